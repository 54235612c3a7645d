//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Role of a message sender in a generation request.
///
/// # Examples
///
/// ```
/// use fabulist_core::Role;
///
/// assert_eq!(format!("{}", Role::System), "System");
/// assert_ne!(Role::User, Role::Assistant);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages are from the human
    User,
    /// Assistant messages are from the model
    Assistant,
}
