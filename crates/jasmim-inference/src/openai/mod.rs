//! OpenAI-compatible vision backend.

mod backend;
mod types;

pub use backend::{
    OpenAIVisionBackend, OpenAIVisionConfig, DEFAULT_OPENAI_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_VISION_MODEL,
};
pub use types::*;
