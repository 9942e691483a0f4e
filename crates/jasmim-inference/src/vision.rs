//! Vision backend trait for plant image analysis.

use async_trait::async_trait;
use jasmim_core::Result;

/// Backend for analyzing plant images with a vision LLM.
///
/// The image travels as a reference (a data URI or an externally resolvable
/// URL); the backend never decodes it. The reply is the model's raw text,
/// untrusted until parsed by the caller.
#[async_trait]
pub trait VisionBackend: Send + Sync {
    /// Analyze an image with the given instruction prompt.
    async fn analyze_image(&self, image_url: &str, prompt: &str) -> Result<String>;

    /// Check if the vision backend is available.
    async fn health_check(&self) -> Result<bool>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}
