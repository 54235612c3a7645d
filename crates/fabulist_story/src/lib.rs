//! Generation orchestration for Fabulist.
//!
//! This crate owns the three-stage pipeline that turns a raw story
//! idea into authored prose:
//!
//! 1. **Analysis**: extract a [`StoryBible`](fabulist_core::StoryBible)
//!    from the raw input.
//! 2. **Structure expansion**: grow the bible into a full
//!    chapter/part/section outline with deterministic identifiers.
//! 3. **Authoring**: write or continue prose for one addressed section
//!    at a time, threading context from the preceding section.
//!
//! [`StoryPipeline`] is the stateless engine, generic over any backend
//! implementing [`JsonMode`](fabulist_interface::JsonMode). It never
//! mutates its inputs; every operation returns a replacement
//! [`Story`](fabulist_core::Story). [`StorySession`] layers single-story
//! session state and the single-in-flight guard on top.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod draft;
mod pipeline;
mod prompts;
pub mod schema;
mod session;
mod update;

pub use pipeline::StoryPipeline;
pub use prompts::CONTINUATION_CONTEXT_CHARS;
pub use session::StorySession;
pub use update::{SectionUpdate, UpdateOutcome, apply_section_update};
