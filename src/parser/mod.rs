//! Video URL parsing (pure functions).
//!
//! Detects the platform of a raw URL string by substring match and extracts the
//! platform-native identifier. No network access, no scheme validation.
//!
//! Failure is a normal return value: every function here returns `Option` and
//! the caller decides how to notify the user.

use crate::model::{Platform, SourceId, TwitchKind};
use regex::Regex;
use std::sync::LazyLock;

/// YouTube id shapes, tried in order. The id runs up to the next `&`, whitespace or `?`.
static YOUTUBE_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"youtube\.com/watch\?v=([^&\s?]+)",
        r"youtu\.be/([^&\s?]+)",
        r"youtube\.com/live/([^&\s?]+)",
        r"youtube\.com/embed/([^&\s?]+)",
    ]
    .map(|pattern| Regex::new(pattern).expect("static YouTube pattern"))
});

static TWITCH_VOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"twitch\.tv/videos/(\d+)").expect("static Twitch VOD pattern"));

static TWITCH_CHANNEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"twitch\.tv/([^/\s?]+)").expect("static Twitch channel pattern"));

/// Path segment that introduces a VOD; never a channel name.
const TWITCH_VIDEOS_SEGMENT: &str = "videos";

/// Result of parsing a video URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedUrl {
    /// A YouTube video (watch, short, live or embed link).
    YouTube {
        /// Extracted video id.
        video_id: SourceId,
    },
    /// A Twitch channel or VOD.
    Twitch {
        /// Channel name or VOD digits.
        id: SourceId,
        /// Which of the two link shapes matched.
        kind: TwitchKind,
    },
}

impl ParsedUrl {
    /// Platform the URL belongs to.
    pub fn platform(&self) -> Platform {
        match self {
            ParsedUrl::YouTube { .. } => Platform::YouTube,
            ParsedUrl::Twitch { .. } => Platform::Twitch,
        }
    }

    /// Extracted video id, channel name or VOD id.
    pub fn source_id(&self) -> &SourceId {
        match self {
            ParsedUrl::YouTube { video_id } => video_id,
            ParsedUrl::Twitch { id, .. } => id,
        }
    }

    /// Channel or VOD for Twitch URLs.
    pub fn twitch_kind(&self) -> Option<TwitchKind> {
        match self {
            ParsedUrl::YouTube { .. } => None,
            ParsedUrl::Twitch { kind, .. } => Some(*kind),
        }
    }
}

/// Detect the platform a URL points at.
///
/// Pure substring match: `youtube.com` or `youtu.be` → YouTube, `twitch.tv` → Twitch.
pub fn detect_platform(url: &str) -> Option<Platform> {
    if url.contains("youtube.com") || url.contains("youtu.be") {
        return Some(Platform::YouTube);
    }
    if url.contains("twitch.tv") {
        return Some(Platform::Twitch);
    }
    None
}

/// Extract a YouTube video id. First matching pattern wins.
pub fn extract_youtube_video_id(url: &str) -> Option<SourceId> {
    YOUTUBE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|caps| SourceId::new(&caps[1]).ok())
}

/// Extract a Twitch channel name or VOD id.
///
/// A VOD link (`twitch.tv/videos/<digits>`) takes precedence. Otherwise the first path
/// segment is the channel, except the literal `videos`, which signals a malformed VOD
/// link and fails the parse.
pub fn extract_twitch_source(url: &str) -> Option<(TwitchKind, SourceId)> {
    if let Some(caps) = TWITCH_VOD.captures(url) {
        return SourceId::new(&caps[1]).ok().map(|id| (TwitchKind::Vod, id));
    }

    let caps = TWITCH_CHANNEL.captures(url)?;
    let segment = &caps[1];
    if segment == TWITCH_VIDEOS_SEGMENT {
        return None;
    }
    SourceId::new(segment)
        .ok()
        .map(|id| (TwitchKind::Channel, id))
}

/// Parse a raw URL into a platform-tagged source identifier.
///
/// Returns `None` for unknown platforms and for known platforms whose link shape
/// does not match.
pub fn parse_video_url(url: &str) -> Option<ParsedUrl> {
    let parsed = match detect_platform(url)? {
        Platform::YouTube => {
            extract_youtube_video_id(url).map(|video_id| ParsedUrl::YouTube { video_id })
        }
        Platform::Twitch => {
            extract_twitch_source(url).map(|(kind, id)| ParsedUrl::Twitch { id, kind })
        }
    };

    if parsed.is_none() {
        tracing::debug!(url, "URL matched a platform but no known link shape");
    }
    parsed
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
