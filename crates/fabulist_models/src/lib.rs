//! Generation backend integrations for Fabulist.
//!
//! This crate provides the concrete generation gateway: a Gemini client
//! implementing the [`fabulist_interface`] driver traits, robust JSON
//! extraction for structured responses, and TOML-based configuration
//! for the model selection policy.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod extraction;
mod gemini;

pub use config::{FabulistConfig, GenerationDefaults};
pub use extraction::{extract_json, parse_json};
pub use gemini::GeminiClient;
