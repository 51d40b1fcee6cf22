//! Video source descriptors.
//!
//! A `Source` is a tagged union discriminated on platform. Each variant carries
//! only the fields that make sense for it, so a YouTube source never has a
//! Twitch kind and a Twitch source never carries a user-supplied live hint.

use crate::model::{InvalidSourceId, SourceId};
use serde::Serialize;
use std::fmt;

// ===== Platform =====

/// Video source provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// youtube.com / youtu.be
    YouTube,
    /// twitch.tv
    Twitch,
}

impl Platform {
    /// Short tag used in the shareable-link token format.
    pub fn wire_tag(self) -> &'static str {
        match self {
            Platform::YouTube => "yt",
            Platform::Twitch => "tw",
        }
    }

    /// Inverse of [`Platform::wire_tag`]. Unknown tags yield `None`.
    pub fn from_wire_tag(tag: &str) -> Option<Self> {
        match tag {
            "yt" => Some(Platform::YouTube),
            "tw" => Some(Platform::Twitch),
            _ => None,
        }
    }

    /// Lowercase display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Twitch => "twitch",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== TwitchKind =====

/// Whether a Twitch source is a live channel or a recorded VOD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TwitchKind {
    /// A channel page; always live.
    Channel,
    /// A past broadcast; never live.
    Vod,
}

// ===== Source =====

/// What an entry plays. Immutable for the entry's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum Source {
    /// A YouTube video or live broadcast.
    ///
    /// `live` is a user hint and is never inferred or validated.
    YouTube {
        /// The 11-ish character video id.
        video_id: SourceId,
        /// Whether the user declared this a live broadcast.
        live: bool,
    },
    /// A Twitch channel or VOD.
    Twitch {
        /// Channel name or numeric VOD id.
        id: SourceId,
        /// Channel or VOD.
        kind: TwitchKind,
    },
}

impl Source {
    /// Which provider hosts the source.
    pub fn platform(&self) -> Platform {
        match self {
            Source::YouTube { .. } => Platform::YouTube,
            Source::Twitch { .. } => Platform::Twitch,
        }
    }

    /// The platform-native identifier.
    pub fn source_id(&self) -> &SourceId {
        match self {
            Source::YouTube { video_id, .. } => video_id,
            Source::Twitch { id, .. } => id,
        }
    }

    /// Twitch kind; `None` for YouTube.
    pub fn twitch_kind(&self) -> Option<TwitchKind> {
        match self {
            Source::YouTube { .. } => None,
            Source::Twitch { kind, .. } => Some(*kind),
        }
    }

    /// Whether the source is a live broadcast (and therefore has a chat panel).
    ///
    /// Twitch channels are always live and VODs never are; YouTube returns the hint.
    pub fn is_live(&self) -> bool {
        match self {
            Source::YouTube { live, .. } => *live,
            Source::Twitch { kind, .. } => *kind == TwitchKind::Channel,
        }
    }
}

// ===== EntryDraft =====

/// Everything needed to create an entry, minus what the store assigns
/// (id, rank, UI flags).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryDraft {
    /// The source the new entry will play.
    pub source: Source,
}

impl EntryDraft {
    /// Wrap a source.
    pub fn new(source: Source) -> Self {
        Self { source }
    }

    /// Draft for a YouTube video with a user-supplied live hint.
    pub fn youtube(video_id: impl Into<String>, live: bool) -> Result<Self, InvalidSourceId> {
        Ok(Self::new(Source::YouTube {
            video_id: SourceId::new(video_id)?,
            live,
        }))
    }

    /// Draft for a live Twitch channel.
    pub fn twitch_channel(name: impl Into<String>) -> Result<Self, InvalidSourceId> {
        Ok(Self::new(Source::Twitch {
            id: SourceId::new(name)?,
            kind: TwitchKind::Channel,
        }))
    }

    /// Draft for a Twitch VOD.
    pub fn twitch_vod(video_id: impl Into<String>) -> Result<Self, InvalidSourceId> {
        Ok(Self::new(Source::Twitch {
            id: SourceId::new(video_id)?,
            kind: TwitchKind::Vod,
        }))
    }

    /// Build a draft from a parsed URL.
    ///
    /// YouTube liveness cannot be read from a URL, so the caller's hint is used.
    /// Twitch ignores the hint: channels are live, VODs are not.
    pub fn from_parsed(parsed: crate::parser::ParsedUrl, live_hint: bool) -> Self {
        use crate::parser::ParsedUrl;

        match parsed {
            ParsedUrl::YouTube { video_id } => Self::new(Source::YouTube {
                video_id,
                live: live_hint,
            }),
            ParsedUrl::Twitch { id, kind } => Self::new(Source::Twitch { id, kind }),
        }
    }

    /// Which provider hosts the source.
    pub fn platform(&self) -> Platform {
        self.source.platform()
    }

    /// Platform-native identifier of the source.
    pub fn source_id(&self) -> &SourceId {
        self.source.source_id()
    }

    /// Whether the entry created from this draft will be live.
    pub fn is_live(&self) -> bool {
        self.source.is_live()
    }
}

impl From<Source> for EntryDraft {
    fn from(source: Source) -> Self {
        Self::new(source)
    }
}
