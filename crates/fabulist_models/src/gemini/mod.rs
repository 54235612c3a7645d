//! Google Gemini API client implementation.
//!
//! The REST client supports per-request model selection with lazy,
//! thread-safe client pooling: one underlying client per model, created
//! on first use. No automatic retry: every generation call is attempted
//! exactly once and failures propagate to the caller.

mod client;

pub use client::GeminiClient;

/// Result type for Gemini operations.
pub type GatewayResult<T> = Result<T, fabulist_error::GatewayError>;
