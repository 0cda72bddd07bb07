//! Profile-related errors.

use thiserror::Error;

/// Errors surfaced when fetching or constructing hold profiles.
///
/// All variants are non-fatal: a failed profile load leaves the previously
/// displayed profile untouched, and the UI layer decides whether to show a
/// message.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The data source has no profile with this id
    #[error("hold profile {0} not found")]
    NotFound(u32),

    /// Two patterns in one profile share the same fix
    #[error("duplicate hold pattern for fix '{0}'")]
    DuplicatePattern(String),

    /// A pattern's level bounds are inverted
    #[error("invalid level bounds for fix '{fix}': minimum {minimum} above maximum {maximum}")]
    InvalidLevels {
        fix: String,
        minimum: i32,
        maximum: i32,
    },

    /// The backing data could not be parsed into a profile
    #[error("malformed profile data: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::Malformed(err.to_string())
    }
}
