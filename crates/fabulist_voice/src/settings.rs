//! The narration settings record.

use serde::{Deserialize, Serialize};

/// Preferred narrator gender, used as a name-matching hint during
/// voice selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    /// Prefer a male-sounding voice
    Male,
    /// Prefer a female-sounding voice
    Female,
}

impl VoiceGender {
    /// Whether a lowercased voice name hints at this gender.
    ///
    /// "female" and "woman" contain "male" and "man", so the male
    /// hints must rule those out explicitly.
    pub(crate) fn matches_name(self, name: &str) -> bool {
        match self {
            VoiceGender::Female => name.contains("female") || name.contains("woman"),
            VoiceGender::Male => {
                (name.contains("male") && !name.contains("female"))
                    || (name.contains("man") && !name.contains("woman"))
            }
        }
    }
}

/// Playback settings for narrating one section's content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Preferred narrator gender
    pub gender: VoiceGender,
    /// Playback rate, clamped to 0.5..=2.0
    pub speed: f32,
    /// Voice pitch, clamped to 0.0..=2.0
    pub pitch: f32,
    /// Whether narration is currently playing
    pub is_playing: bool,
}

impl VoiceSettings {
    /// Lowest supported playback rate.
    pub const MIN_SPEED: f32 = 0.5;
    /// Highest supported playback rate.
    pub const MAX_SPEED: f32 = 2.0;
    /// Highest supported pitch.
    pub const MAX_PITCH: f32 = 2.0;

    /// Create settings with `speed` and `pitch` clamped into their
    /// supported ranges and playback stopped.
    pub fn new(gender: VoiceGender, speed: f32, pitch: f32) -> Self {
        Self {
            gender,
            speed: speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED),
            pitch: pitch.clamp(0.0, Self::MAX_PITCH),
            is_playing: false,
        }
    }

    /// These settings with the playback rate replaced and clamped.
    pub fn with_speed(self, speed: f32) -> Self {
        Self {
            speed: speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED),
            ..self
        }
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self::new(VoiceGender::Female, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_is_clamped_into_range() {
        assert_eq!(VoiceSettings::new(VoiceGender::Male, 0.1, 1.0).speed, 0.5);
        assert_eq!(VoiceSettings::new(VoiceGender::Male, 5.0, 1.0).speed, 2.0);
        assert_eq!(VoiceSettings::new(VoiceGender::Male, 1.3, 1.0).speed, 1.3);
        assert_eq!(VoiceSettings::default().with_speed(3.0).speed, 2.0);
    }

    #[test]
    fn pitch_is_clamped_into_range() {
        assert_eq!(VoiceSettings::new(VoiceGender::Male, 1.0, -1.0).pitch, 0.0);
        assert_eq!(VoiceSettings::new(VoiceGender::Male, 1.0, 9.0).pitch, 2.0);
    }

    #[test]
    fn gender_serializes_lowercase() {
        let json = serde_json::to_string(&VoiceGender::Female).unwrap();
        assert_eq!(json, "\"female\"");
    }
}
