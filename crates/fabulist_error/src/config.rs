//! Errors from loading or parsing the layered TOML configuration.

/// A configuration source failed to load or deserialize.
///
/// Only required sources produce this error; a missing user override
/// file is skipped silently during layered loading.
///
/// # Examples
///
/// ```
/// use fabulist_error::ConfigError;
///
/// let err = ConfigError::new("missing [models] table");
/// assert!(format!("{}", err).starts_with("Config Error"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What failed, naming the source when known
    pub message: String,
    /// Line of the call site
    pub line: u32,
    /// File of the call site
    pub file: &'static str,
}

impl ConfigError {
    /// Wrap a message, capturing the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
