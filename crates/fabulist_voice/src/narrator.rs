//! The narration backend trait.

use crate::VoiceSettings;
use async_trait::async_trait;
use fabulist_error::FabulistResult;

/// A speech backend that can narrate section content.
///
/// Narration consumes only the authored text and the settings record;
/// it has no access to the story tree. Starting narration while
/// already playing replaces the current utterance.
#[async_trait]
pub trait Narrator: Send + Sync {
    /// Start narrating `text` with the given settings.
    async fn speak(&self, text: &str, settings: &VoiceSettings) -> FabulistResult<()>;

    /// Stop any narration in progress. A no-op when idle.
    async fn stop(&self) -> FabulistResult<()>;

    /// Whether narration is currently playing.
    fn is_speaking(&self) -> bool;
}
