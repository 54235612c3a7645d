//! TOML-based configuration for Fabulist.
//!
//! Configuration sources in order of precedence (later overrides earlier):
//! 1. Bundled defaults (`fabulist.toml` shipped with the workspace)
//! 2. User config in the home directory (`~/.config/fabulist/fabulist.toml`)
//! 3. User config in the current directory (`./fabulist.toml`)

use config::{Config, File, FileFormat};
use fabulist_core::ModelPolicy;
use fabulist_error::{ConfigError, FabulistError, FabulistResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default generation parameters applied to every request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct GenerationDefaults {
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Maximum output tokens
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

/// Top-level Fabulist configuration.
///
/// # Examples
///
/// ```no_run
/// use fabulist_models::FabulistConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FabulistConfig::load()?;
/// println!("writing model: {}", config.models.writing);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct FabulistConfig {
    /// Model selection policy
    #[serde(default)]
    pub models: ModelPolicy,
    /// Default generation parameters
    #[serde(default)]
    pub generation: GenerationDefaults,
}

impl FabulistConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> FabulistResult<Self> {
        debug!(path = %path.as_ref().display(), "Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                FabulistError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FabulistError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    pub fn load() -> FabulistResult<Self> {
        debug!("Loading configuration: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../fabulist.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/fabulist/fabulist.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("fabulist").required(false));

        builder
            .build()
            .map_err(|e| {
                FabulistError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FabulistError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        const DEFAULT_CONFIG: &str = include_str!("../../../fabulist.toml");
        let config: FabulistConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(!config.models.analysis.is_empty());
        assert!(!config.models.writing.is_empty());
        assert_ne!(config.models.analysis, config.models.writing);
    }

    #[test]
    fn empty_config_falls_back_to_policy_defaults() {
        let config: FabulistConfig = Config::builder()
            .add_source(File::from_str("", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.models, ModelPolicy::default());
        assert_eq!(config.generation, GenerationDefaults::default());
    }
}
