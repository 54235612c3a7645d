//! Trait definitions for generation backends.
//!
//! The pipeline is generic over these traits; concrete implementations
//! live in `fabulist_models`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{FabulistDriver, JsonMode, Metadata};
pub use types::ModelMetadata;
