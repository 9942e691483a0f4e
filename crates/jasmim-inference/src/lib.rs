//! # jasmim-inference
//!
//! Vision LLM backend abstraction for jasmim.
//!
//! This crate provides:
//! - The [`VisionBackend`] trait for multimodal chat completion
//! - An OpenAI-compatible implementation (feature `openai`, default)
//! - The fixed analysis instruction prompt
//! - A mock backend for tests (feature `mock`)
//!
//! # Example
//!
//! ```rust,no_run
//! use jasmim_inference::{analysis_prompt, AnalysisType, OpenAIVisionBackend, VisionBackend};
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = OpenAIVisionBackend::from_env().unwrap();
//!     let prompt = analysis_prompt(AnalysisType::Identificacao);
//!     let reply = backend
//!         .analyze_image("https://example.com/plant.jpg", &prompt)
//!         .await
//!         .unwrap();
//!     println!("{}", reply);
//! }
//! ```

pub mod prompt;
pub mod vision;

#[cfg(feature = "openai")]
pub mod openai;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use jasmim_core::*;

pub use prompt::analysis_prompt;
pub use vision::VisionBackend;

#[cfg(feature = "openai")]
pub use openai::{OpenAIVisionBackend, OpenAIVisionConfig};

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockVisionBackend, MockVisionCall};
