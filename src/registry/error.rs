//! Registry error types
//!
//! Error types for track construction and registry operations. None of
//! these are fatal: every error is reported to the immediate caller,
//! which owns the recovery policy. The registry never retries on its
//! own.

use crate::track::TrackId;

/// Error type for track and registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// Track construction with a negative or out-of-range index
    InvalidIndex(i64),
    /// A track with the same (media type, index) is already registered
    DuplicateIdentity(TrackId),
    /// Registration attempted after discovery was closed
    RegistryClosed,
    /// Registration attempted past the configured track limit
    RegistryFull(usize),
    /// No registered track with the given identity
    NotFound(TrackId),
}

impl std::fmt::Display for TrackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackError::InvalidIndex(index) => write!(f, "Invalid track index: {}", index),
            TrackError::DuplicateIdentity(id) => {
                write!(f, "Track already registered: {}", id)
            }
            TrackError::RegistryClosed => write!(f, "Registry closed to new tracks"),
            TrackError::RegistryFull(max) => {
                write!(f, "Registry full: limit of {} tracks reached", max)
            }
            TrackError::NotFound(id) => write!(f, "Track not found: {}", id),
        }
    }
}

impl std::error::Error for TrackError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::MediaType;

    #[test]
    fn test_display() {
        let id = TrackId::new(MediaType::Audio, 2);
        assert_eq!(
            TrackError::DuplicateIdentity(id).to_string(),
            "Track already registered: audio/2"
        );
        assert_eq!(
            TrackError::InvalidIndex(-4).to_string(),
            "Invalid track index: -4"
        );
        assert_eq!(
            TrackError::NotFound(id).to_string(),
            "Track not found: audio/2"
        );
    }
}
