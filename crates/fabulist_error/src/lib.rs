//! Error types for the Fabulist library.
//!
//! This crate provides the foundation error types used throughout the
//! Fabulist workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fabulist_error::{FabulistResult, GatewayError, GatewayErrorKind};
//!
//! fn call_backend() -> FabulistResult<String> {
//!     Err(GatewayError::new(GatewayErrorKind::EmptyResponse))?
//! }
//!
//! match call_backend() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gateway;
mod json;
mod story;

pub use config::ConfigError;
pub use error::{FabulistError, FabulistErrorKind, FabulistResult};
pub use gateway::{GatewayError, GatewayErrorKind};
pub use json::JsonError;
pub use story::{StoryError, StoryErrorKind};
