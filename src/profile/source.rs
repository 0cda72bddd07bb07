//! Profile data source trait for dependency injection.

use super::error::ProfileError;
use super::types::{HoldProfile, ProfileSummary};

/// Synchronous provider of hold profiles.
///
/// The display manager fetches through this trait on cache misses and
/// reloads; the menu enumerates through it. Implementations are expected
/// to be local and fast (file or embedded resource, not network I/O) -
/// `fetch` runs synchronously inside the host's update tick.
///
/// Malformed backing data should surface as [`ProfileError::Malformed`];
/// the display manager treats any fetch error the same way as not-found
/// and leaves the current profile untouched.
pub trait ProfileSource: Send + Sync {
    /// Fetch the profile with the given id from backing data.
    ///
    /// # Errors
    ///
    /// [`ProfileError::NotFound`] when no profile has this id;
    /// [`ProfileError::Malformed`] when the backing data cannot be parsed.
    fn fetch(&self, id: u32) -> Result<HoldProfile, ProfileError>;

    /// Enumerate every profile the source knows about.
    fn catalogue(&self) -> Vec<ProfileSummary>;
}
