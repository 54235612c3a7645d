//! Top-level error wrapper types.

use crate::{ConfigError, GatewayError, JsonError, StoryError};

/// The foundation error enum composing every crate-specific error.
///
/// # Examples
///
/// ```
/// use fabulist_error::{FabulistError, JsonError};
///
/// let json_err = JsonError::new("trailing comma");
/// let err: FabulistError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FabulistErrorKind {
    /// Generation gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// Story pipeline error
    #[from(StoryError)]
    Story(StoryError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Fabulist error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fabulist_error::{FabulistResult, ConfigError};
///
/// fn might_fail() -> FabulistResult<()> {
///     Err(ConfigError::new("missing models table"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fabulist Error: {}", _0)]
pub struct FabulistError(Box<FabulistErrorKind>);

impl FabulistError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulistErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulistErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FabulistErrorKind
impl<T> From<T> for FabulistError
where
    T: Into<FabulistErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fabulist operations.
pub type FabulistResult<T> = std::result::Result<T, FabulistError>;
