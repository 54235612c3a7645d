//! Best-effort voice selection.

use crate::VoiceGender;

/// One voice as advertised by a speech backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceDescriptor {
    /// Backend-assigned voice name
    pub name: String,
    /// BCP 47 language tag (e.g. "en-US")
    pub language: String,
}

impl VoiceDescriptor {
    /// Create a descriptor.
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
        }
    }
}

/// Pick a voice for `language_tag` and the preferred gender.
///
/// Voices are first filtered by language tag substring. Within the
/// filtered set, the first voice whose name hints at the preferred
/// gender wins; when no name matches, the first filtered voice is the
/// fallback. `None` only when no voice speaks the language at all.
pub fn select_voice<'a>(
    voices: &'a [VoiceDescriptor],
    language_tag: &str,
    gender: VoiceGender,
) -> Option<&'a VoiceDescriptor> {
    let spoken: Vec<&VoiceDescriptor> = voices
        .iter()
        .filter(|v| v.language.contains(language_tag))
        .collect();
    let first = *spoken.first()?;

    let matched = spoken
        .iter()
        .find(|v| gender.matches_name(&v.name.to_lowercase()));
    if matched.is_none() {
        tracing::debug!(
            language = language_tag,
            ?gender,
            fallback = %first.name,
            "no gender-hinted voice, using first available"
        );
    }
    Some(matched.copied().unwrap_or(first))
}
