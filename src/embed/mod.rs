//! Player and chat embed URLs.
//!
//! Renderers iframe these. Twitch requires the embedding page's host as a
//! `parent` parameter; an empty host falls back to `localhost`.

use crate::model::{Entry, Source, TwitchKind};
use url::Url;

const FALLBACK_PARENT: &str = "localhost";

fn parent_or_default(parent: &str) -> &str {
    if parent.is_empty() {
        FALLBACK_PARENT
    } else {
        parent
    }
}

/// Build an absolute URL from a fixed base and query pairs.
///
/// Path segments go through the URL API so opaque ids are escaped. `flags` are
/// valueless parameters appended verbatim.
fn build(base: &str, segments: &[&str], pairs: &[(&str, &str)], flags: &[&str]) -> String {
    let Ok(mut url) = Url::parse(base) else {
        return base.to_string();
    };
    if !segments.is_empty() {
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
    }
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    let mut out = url.to_string();
    for flag in flags {
        out.push(if out.contains('?') { '&' } else { '?' });
        out.push_str(flag);
    }
    out
}

/// Twitch player URL. VODs do not autoplay.
pub fn twitch_player_url(id: &str, kind: TwitchKind, parent: &str) -> String {
    let parent = parent_or_default(parent);
    match kind {
        TwitchKind::Channel => build(
            "https://player.twitch.tv/",
            &[],
            &[("channel", id), ("parent", parent)],
            &[],
        ),
        TwitchKind::Vod => build(
            "https://player.twitch.tv/",
            &[],
            &[("video", id), ("parent", parent), ("autoplay", "false")],
            &[],
        ),
    }
}

/// YouTube embed URL with the JS API enabled and the entry's mute state.
pub fn youtube_player_url(video_id: &str, muted: bool) -> String {
    build(
        "https://www.youtube.com/embed/",
        &[video_id],
        &[
            ("enablejsapi", "1"),
            ("autoplay", "0"),
            ("mute", if muted { "1" } else { "0" }),
        ],
        &[],
    )
}

/// Player URL for an entry.
pub fn player_url(entry: &Entry, parent: &str) -> String {
    match entry.source() {
        Source::YouTube { video_id, .. } => youtube_player_url(video_id.as_str(), entry.muted()),
        Source::Twitch { id, kind } => twitch_player_url(id.as_str(), *kind, parent),
    }
}

/// Whether the entry offers a chat panel (live sources only).
pub fn chat_available(entry: &Entry) -> bool {
    entry.is_live()
}

/// Chat panel URL for a source, dark themed.
pub fn chat_url(source: &Source, parent: &str) -> String {
    let parent = parent_or_default(parent);
    match source {
        Source::Twitch {
            id,
            kind: TwitchKind::Channel,
        } => build(
            "https://www.twitch.tv/embed/",
            &[id.as_str(), "chat"],
            &[("parent", parent)],
            &["darkpopout"],
        ),
        Source::Twitch {
            id,
            kind: TwitchKind::Vod,
        } => build(
            "https://www.twitch.tv/videos/",
            &[id.as_str(), "chat"],
            &[("parent", parent)],
            &["darkpopout"],
        ),
        Source::YouTube { video_id, .. } => build(
            "https://www.youtube.com/live_chat",
            &[],
            &[
                ("is_popout", "1"),
                ("v", video_id.as_str()),
                ("embed_domain", parent),
                ("dark_theme", "1"),
            ],
            &[],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryDraft;
    use crate::state::SessionStore;

    #[test]
    fn twitch_channel_player() {
        assert_eq!(
            twitch_player_url("testchannel", TwitchKind::Channel, "localhost"),
            "https://player.twitch.tv/?channel=testchannel&parent=localhost"
        );
    }

    #[test]
    fn twitch_vod_player_does_not_autoplay() {
        assert_eq!(
            twitch_player_url("111222333", TwitchKind::Vod, "custom-domain.io"),
            "https://player.twitch.tv/?video=111222333&parent=custom-domain.io&autoplay=false"
        );
    }

    #[test]
    fn empty_parent_falls_back_to_localhost() {
        assert_eq!(
            twitch_player_url("ninja", TwitchKind::Channel, ""),
            "https://player.twitch.tv/?channel=ninja&parent=localhost"
        );
    }

    #[test]
    fn youtube_player_reflects_mute() {
        assert_eq!(
            youtube_player_url("abc123", false),
            "https://www.youtube.com/embed/abc123?enablejsapi=1&autoplay=0&mute=0"
        );
        assert!(youtube_player_url("abc123", true).ends_with("mute=1"));
    }

    #[test]
    fn player_url_follows_entry_flags() {
        let mut store = SessionStore::new();
        let id = store.add_entry(EntryDraft::youtube("abc", true).unwrap());
        store.toggle_mute(&id);
        let entry = store.entry(&id).unwrap();
        assert!(player_url(entry, "example.com").ends_with("mute=1"));
    }

    #[test]
    fn chat_urls() {
        let channel = EntryDraft::twitch_channel("streamer").unwrap().source;
        assert_eq!(
            chat_url(&channel, "example.com"),
            "https://www.twitch.tv/embed/streamer/chat?parent=example.com&darkpopout"
        );

        let vod = EntryDraft::twitch_vod("42").unwrap().source;
        assert_eq!(
            chat_url(&vod, "example.com"),
            "https://www.twitch.tv/videos/42/chat?parent=example.com&darkpopout"
        );

        let yt = EntryDraft::youtube("abc", true).unwrap().source;
        assert_eq!(
            chat_url(&yt, "example.com"),
            "https://www.youtube.com/live_chat?is_popout=1&v=abc&embed_domain=example.com&dark_theme=1"
        );
    }

    #[test]
    fn chat_only_for_live_sources() {
        let mut store = SessionStore::new();
        let live = store.add_entry(EntryDraft::twitch_channel("a").unwrap());
        let vod = store.add_entry(EntryDraft::twitch_vod("1").unwrap());
        assert!(chat_available(store.entry(&live).unwrap()));
        assert!(!chat_available(store.entry(&vod).unwrap()));
    }
}
