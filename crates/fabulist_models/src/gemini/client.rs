//! Google Gemini API implementation of the generation gateway.
//!
//! The [`GeminiClient`] maintains a pool of model-specific clients,
//! created lazily on first use. When a request specifies a model (via
//! `GenerateRequest.model`), the client either retrieves the existing
//! client for that model or creates a new one on demand. This enables
//! the pipeline's static model policy: a faster model for analysis
//! steps and a higher-quality model for prose, each getting its own
//! pooled client.
//!
//! # Example
//!
//! ```no_run
//! use fabulist_models::GeminiClient;
//! use fabulist_core::{GenerateRequest, Message};
//! use fabulist_interface::FabulistDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//!
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Write one sentence about rain.")])
//!     .model(Some("gemini-2.5-pro".to_string()))
//!     .build()?;
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex};
use tracing::instrument;

use gemini_rust::{Gemini, client::Model};

use fabulist_core::{GenerateRequest, GenerateResponse, Output, Role};
use fabulist_error::{FabulistResult, GatewayError, GatewayErrorKind};
use fabulist_interface::{FabulistDriver, JsonMode, Metadata, ModelMetadata};

use super::GatewayResult;
use crate::extraction::extract_json;

/// Default model when neither the request nor the constructor names one.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Client for the Google Gemini API with per-model client pooling.
pub struct GeminiClient {
    /// Cache of model-specific clients, created lazily
    clients: Arc<Mutex<HashMap<String, Gemini>>>,
    /// API key for creating new clients
    api_key: String,
    /// Default model name when `req.model` is `None`
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let client_count = self.clients.lock().map(|c| c.len()).unwrap_or(0);
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("cached_clients", &client_count)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns `GatewayErrorKind::MissingApiKey` when the variable is unset.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> FabulistResult<Self> {
        Self::new_internal(DEFAULT_MODEL).map_err(Into::into)
    }

    /// Create a new Gemini client with a specific default model.
    #[instrument(name = "gemini_client_with_default_model")]
    pub fn with_default_model(model: &str) -> FabulistResult<Self> {
        Self::new_internal(model).map_err(Into::into)
    }

    fn new_internal(model: &str) -> GatewayResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GatewayError::new(GatewayErrorKind::MissingApiKey))?;

        Ok(Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            api_key,
            model_name: model.to_string(),
        })
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Unrecognized names fall through to `Model::Custom` with the
    /// "models/" prefix the API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Get or create the pooled client for a model.
    fn client_for(&self, model_name: &str) -> GatewayResult<Gemini> {
        let mut clients = self
            .clients
            .lock()
            .map_err(|e| GatewayError::new(GatewayErrorKind::ClientCreation(e.to_string())))?;

        if let Some(client) = clients.get(model_name) {
            return Ok(client.clone());
        }

        let model_enum = Self::model_name_to_enum(model_name);
        let client = Gemini::with_model(&self.api_key, model_enum)
            .map_err(|e| GatewayError::new(GatewayErrorKind::ClientCreation(e.to_string())))?;
        clients.insert(model_name.to_string(), client.clone());
        Ok(client)
    }

    /// Internal generate method that returns gateway-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> GatewayResult<GenerateResponse> {
        let model_name = req.model.as_deref().unwrap_or(&self.model_name);
        let client = self.client_for(model_name)?;

        let mut builder = client.generate_content();
        let mut system_prompt = None;

        for msg in &req.messages {
            match msg.role {
                // Gemini uses a separate system prompt slot
                Role::System => system_prompt = Some(msg.content.clone()),
                Role::User => builder = builder.with_user_message(&msg.content),
                Role::Assistant => builder = builder.with_model_message(&msg.content),
            }
        }

        if let Some(prompt) = system_prompt {
            builder = builder.with_system_prompt(&prompt);
        }
        if let Some(temp) = req.temperature {
            builder = builder.with_temperature(temp);
        }
        if let Some(max_tokens) = req.max_tokens {
            builder = builder.with_max_output_tokens(max_tokens as i32);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(GatewayError::new(GatewayErrorKind::EmptyResponse));
        }

        Ok(GenerateResponse {
            outputs: vec![Output::Text(text)],
        })
    }

    /// Parse gemini-rust errors, extracting HTTP status codes when present.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GatewayError {
        let err_msg = err.to_string();

        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GatewayError::new(GatewayErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GatewayError::new(GatewayErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract an HTTP status code from an error message like
    /// "bad response from server; code 503; description: ...".
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        let code_start = error_msg.find("code ")?;
        let code_str = &error_msg[code_start + 5..];
        let end = code_str
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(code_str.len());
        code_str[..end].parse().ok()
    }
}

#[async_trait]
impl FabulistDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> FabulistResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[async_trait]
impl JsonMode for GeminiClient {
    /// Generate structured output by constraining the prompt to a JSON
    /// schema and extracting the JSON payload from the response.
    async fn generate_json(
        &self,
        req: &GenerateRequest,
        schema: &serde_json::Value,
    ) -> FabulistResult<serde_json::Value> {
        let mut constrained = req.clone();
        constrained.messages.push(fabulist_core::Message::system(format!(
            "Respond with a single JSON value conforming to this JSON schema:\n{}\n\
             Output ONLY valid JSON with no surrounding text or code fences.",
            serde_json::to_string_pretty(schema)
                .unwrap_or_else(|_| schema.to_string())
        )));

        let response = self.generate_internal(&constrained).await?;
        let json = extract_json(&response.text())?;
        crate::extraction::parse_json(&json)
    }
}

impl Metadata for GeminiClient {
    fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            provider: "gemini",
            model: self.model_name.clone(),
            max_input_tokens: 1_048_576,
            max_output_tokens: 8192,
            supports_json_mode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_status_code_from_error_text() {
        let msg = "bad response from server; code 503; description: overloaded";
        assert_eq!(GeminiClient::extract_status_code(msg), Some(503));
        assert_eq!(GeminiClient::extract_status_code("no code here"), None);
    }

    #[test]
    fn custom_models_get_prefixed() {
        match GeminiClient::model_name_to_enum("gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected Custom variant"),
        }
        match GeminiClient::model_name_to_enum("models/gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected Custom variant"),
        }
    }
}
