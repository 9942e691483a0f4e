//! Mock vision backend for deterministic testing.
//!
//! Returns a scripted reply (or failure) and records every call, so tests
//! can assert on prompt content, forwarded image references, and call
//! counts without touching the network.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::vision::VisionBackend;
use jasmim_core::{Error, Result};

/// One recorded `analyze_image` invocation.
#[derive(Debug, Clone)]
pub struct MockVisionCall {
    pub image_url: String,
    pub prompt: String,
}

#[derive(Debug, Clone)]
struct MockConfig {
    reply: String,
    failure: Option<String>,
    healthy: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            reply: "{}".to_string(),
            failure: None,
            healthy: true,
        }
    }
}

/// Mock vision backend.
#[derive(Clone)]
pub struct MockVisionBackend {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockVisionCall>>>,
}

impl MockVisionBackend {
    /// Create a new mock backend with default configuration.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the fixed reply returned by every `analyze_image` call.
    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).reply = reply.into();
        self
    }

    /// Make every `analyze_image` call fail with an inference error.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).failure = Some(message.into());
        self
    }

    /// Set the health-check result.
    pub fn with_health(mut self, healthy: bool) -> Self {
        Arc::make_mut(&mut self.config).healthy = healthy;
        self
    }

    /// Get all logged calls for assertion.
    pub fn calls(&self) -> Vec<MockVisionCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of `analyze_image` calls made.
    pub fn call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }

    /// Clear the call log.
    pub fn clear_calls(&self) {
        self.call_log.lock().unwrap().clear()
    }
}

impl Default for MockVisionBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisionBackend for MockVisionBackend {
    async fn analyze_image(&self, image_url: &str, prompt: &str) -> Result<String> {
        self.call_log.lock().unwrap().push(MockVisionCall {
            image_url: image_url.to_string(),
            prompt: prompt.to_string(),
        });

        if let Some(ref message) = self.config.failure {
            return Err(Error::Inference(message.clone()));
        }

        Ok(self.config.reply.clone())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(self.config.healthy)
    }

    fn model_name(&self) -> &str {
        "mock-vision"
    }
}
