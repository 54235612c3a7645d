//! Fabulist - Automated Long-Form Fiction Generation
//!
//! Fabulist turns a raw story idea into authored prose through a
//! three-stage pipeline: bible extraction, structure expansion, and
//! section-by-section authoring with continuation.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fabulist::{GeminiClient, ModelPolicy, SectionPath, StoryPipeline, StorySession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::new()?;
//!     let pipeline = StoryPipeline::new(client, ModelPolicy::default());
//!     let mut session = StorySession::new(pipeline);
//!
//!     session.analyze("a detective in a rain-soaked city").await?;
//!     session.expand().await?;
//!     let path = SectionPath::new("ch-0", "ch-0-p-0", "ch-0-p-0-s-0");
//!     let story = session.author_section(&path).await?;
//!     println!("{}", story.chapters[0].parts[0].sections[0].content);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Fabulist is organized as a workspace with focused crates:
//!
//! - `fabulist_core` - Story entity model and generation types
//! - `fabulist_interface` - Driver trait definitions
//! - `fabulist_error` - Error types
//! - `fabulist_story` - The generation pipeline and session state
//! - `fabulist_models` - Gemini backend (feature `gemini`)
//! - `fabulist_voice` - Narration settings and voice selection
//!
//! This crate (`fabulist`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use fabulist_core::*;
pub use fabulist_error::*;
pub use fabulist_interface::*;
pub use fabulist_story::{
    CONTINUATION_CONTEXT_CHARS, SectionUpdate, StoryPipeline, StorySession, UpdateOutcome,
    apply_section_update, schema,
};
pub use fabulist_voice::{Narrator, VoiceDescriptor, VoiceGender, VoiceSettings, select_voice};

#[cfg(feature = "gemini")]
pub use fabulist_models::{FabulistConfig, GeminiClient, GenerationDefaults};
