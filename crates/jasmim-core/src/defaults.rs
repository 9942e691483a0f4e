//! Centralized default constants for jasmim.
//!
//! **This module is the single source of truth** for all shared default
//! values. Crates reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// MODEL CLIENT
// =============================================================================

/// Default OpenAI-compatible API endpoint.
pub const OPENAI_URL: &str = "https://api.openai.com/v1";

/// Default vision model.
pub const VISION_MODEL: &str = "gpt-4o";

/// Output budget for one analysis reply, in tokens. The full schema with a
/// four-step plan fits comfortably under this.
pub const MAX_OUTPUT_TOKENS: u32 = 2000;

/// Model request timeout in seconds.
pub const MODEL_TIMEOUT_SECS: u64 = 120;

/// Health-check timeout in seconds.
pub const HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 3000;

/// Maximum request body size in bytes. Data-URI images are large; 10 MiB
/// covers a phone photo with base64 overhead.
pub const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// API credential for the model provider.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Base URL override for OpenAI-compatible providers.
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";

/// Vision model override.
pub const ENV_OPENAI_VISION_MODEL: &str = "OPENAI_VISION_MODEL";

/// Output token budget override.
pub const ENV_OPENAI_MAX_OUTPUT_TOKENS: &str = "OPENAI_MAX_OUTPUT_TOKENS";

/// Model request timeout override, in seconds.
pub const ENV_OPENAI_TIMEOUT: &str = "OPENAI_TIMEOUT";
