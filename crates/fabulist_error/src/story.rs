//! Story pipeline error types.

/// Specific error conditions for story pipeline operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// Bible extraction response is missing required fields or malformed
    #[display("Malformed story bible: {}", _0)]
    MalformedBible(String),
    /// Structure expansion response does not match the expected tree shape
    #[display("Malformed structure response: {}", _0)]
    MalformedStructure(String),
    /// The addressed identifier triple does not exist in the tree
    #[display("Section '{}' not found in part '{}' of chapter '{}'", section, part, chapter)]
    SectionNotFound {
        /// Chapter identifier
        chapter: String,
        /// Part identifier
        part: String,
        /// Section identifier
        section: String,
    },
    /// A generation call was requested while another is in flight
    #[display("A generation call is already in flight")]
    OperationInFlight,
    /// There is no story to operate on yet
    #[display("No story: {}", _0)]
    NoStory(String),
    /// The raw story idea is empty or whitespace
    #[display("Story input is empty")]
    EmptyInput,
}

/// Error type for story pipeline operations.
///
/// # Examples
///
/// ```
/// use fabulist_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::EmptyInput);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
