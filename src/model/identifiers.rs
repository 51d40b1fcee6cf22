//! Core identifier newtypes with smart constructors.
//!
//! `SourceId` validates non-empty strings at construction time.
//! `EntryId` is minted only by the session store and never parsed from input.

use serde::Serialize;
use std::fmt;

/// Platform-native identifier of a video source.
///
/// A YouTube video ID, a Twitch channel name, or a Twitch VOD numeric ID.
/// Opaque to the store: never parsed further once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Smart constructor: validates non-empty source ID
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSourceId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidSourceId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for an entry within a session.
///
/// Stable for the entry's lifetime and never reused by the store that minted it.
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Mint an id from its parts: `<source>-<unix millis>-<sequence>`.
    pub(crate) fn mint(source: &SourceId, millis: i64, sequence: u64) -> Self {
        Self(format!("{source}-{millis}-{sequence}"))
    }

    /// Borrow the raw string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Rejected source id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSourceId {
    /// The id was an empty string.
    #[error("Source ID cannot be empty")]
    Empty,
}

// ===== Tests =====
