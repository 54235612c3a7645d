//! Narration support for Fabulist.
//!
//! This crate is a thin collaborator on the side of the generation
//! core: it consumes a section's authored content and nothing else.
//! It defines the narration settings record, a best-effort heuristic
//! for picking a synthesis voice, and the [`Narrator`] trait that
//! concrete speech backends implement.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod narrator;
mod select;
mod settings;

pub use narrator::Narrator;
pub use select::{VoiceDescriptor, select_voice};
pub use settings::{VoiceGender, VoiceSettings};
