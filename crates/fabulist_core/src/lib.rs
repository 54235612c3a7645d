//! Core data types for the Fabulist story generation library.
//!
//! This crate provides the story entity model (bible, chapter/part/section
//! tree, story wrapper) and the generic generation request/response types
//! used across all Fabulist interfaces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bible;
mod message;
mod output;
mod path;
mod policy;
mod request;
mod role;
mod story;
mod telemetry;
mod tree;

pub use bible::{Character, StoryBible};
pub use message::Message;
pub use output::Output;
pub use path::SectionPath;
pub use policy::ModelPolicy;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use story::{Story, StoryStatus};
pub use telemetry::init_tracing;
pub use tree::{Chapter, Part, Section};
