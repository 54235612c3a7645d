//! Trait definitions for generation backends and their capabilities.

use crate::ModelMetadata;
use async_trait::async_trait;
use fabulist_core::{GenerateRequest, GenerateResponse};
use fabulist_error::FabulistResult;

/// Core trait that all generation backends must implement.
///
/// This provides the minimal interface for freeform text generation.
/// Structured output is exposed through the optional [`JsonMode`] trait.
#[async_trait]
pub trait FabulistDriver: Send + Sync {
    /// Generate model output given a request.
    ///
    /// An empty backend response is a hard error
    /// (`GatewayErrorKind::EmptyResponse`), never an empty success.
    async fn generate(&self, req: &GenerateRequest) -> FabulistResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when `GenerateRequest.model` is `None`.
    fn model_name(&self) -> &str;
}

/// Trait for backends that support structured JSON output.
#[async_trait]
pub trait JsonMode: FabulistDriver {
    /// Generate output conforming to a JSON schema.
    ///
    /// The schema is an object/array shape with named, typed fields,
    /// some required. Callers validate required fields after parsing.
    async fn generate_json(
        &self,
        req: &GenerateRequest,
        schema: &serde_json::Value,
    ) -> FabulistResult<serde_json::Value>;
}

/// Trait for querying model metadata and capabilities.
pub trait Metadata: FabulistDriver {
    /// Get metadata about the default model.
    fn metadata(&self) -> ModelMetadata;

    /// Maximum tokens in input context.
    fn max_input_tokens(&self) -> usize {
        self.metadata().max_input_tokens
    }

    /// Maximum tokens in output.
    fn max_output_tokens(&self) -> usize {
        self.metadata().max_output_tokens
    }
}
