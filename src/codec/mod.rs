//! URL state codec.
//!
//! Serializes an ordered list of sources to one compact string that fits in a
//! single query parameter, and back. Wire format, one token per entry joined by `,`:
//!
//! | Source            | Token            |
//! |-------------------|------------------|
//! | YouTube, live     | `yt:<id>:L`      |
//! | YouTube, archive  | `yt:<id>:A`      |
//! | Twitch channel    | `tw:<name>:c`    |
//! | Twitch VOD        | `tw:<id>:v`      |
//!
//! Entry ids, ranks and UI flags are not part of the format; they are minted
//! fresh on load. Decoding never fails: malformed tokens are skipped.

pub mod share_link;

pub use share_link::{
    drafts_from_url, restore_session, shareable_url, shareable_url_for, ShareLinkError,
    SESSION_PARAM,
};

use crate::model::{Entry, EntryDraft, Platform, Source, SourceId, TwitchKind};
use crate::state::SessionStore;
use tracing::debug;

const TOKEN_SEPARATOR: &str = ",";
const FIELD_SEPARATOR: &str = ":";

const YOUTUBE_LIVE: &str = "L";
const YOUTUBE_ARCHIVE: &str = "A";
const TWITCH_CHANNEL: &str = "c";
const TWITCH_VOD: &str = "v";

/// Encode sources, in the order given, to the token string.
///
/// Empty input yields an empty string.
pub fn encode<'a>(sources: impl IntoIterator<Item = &'a Source>) -> String {
    sources
        .into_iter()
        .map(encode_token)
        .collect::<Vec<_>>()
        .join(TOKEN_SEPARATOR)
}

/// Encode entries in the order given.
pub fn encode_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> String {
    encode(entries.into_iter().map(Entry::source))
}

/// Encode a session in display (rank) order.
pub fn encode_session(store: &SessionStore) -> String {
    encode_entries(store.ordered_entries())
}

/// One `platform:id:kind` token.
pub fn encode_token(source: &Source) -> String {
    let kind = match source {
        Source::YouTube { live: true, .. } => YOUTUBE_LIVE,
        Source::YouTube { live: false, .. } => YOUTUBE_ARCHIVE,
        Source::Twitch {
            kind: TwitchKind::Channel,
            ..
        } => TWITCH_CHANNEL,
        Source::Twitch {
            kind: TwitchKind::Vod,
            ..
        } => TWITCH_VOD,
    };
    format!(
        "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{kind}",
        source.platform().wire_tag(),
        source.source_id()
    )
}

/// Decode a token string into drafts, skipping malformed tokens.
///
/// An empty string yields an empty list.
pub fn decode(param: &str) -> Vec<EntryDraft> {
    if param.is_empty() {
        return Vec::new();
    }

    param
        .split(TOKEN_SEPARATOR)
        .filter_map(|part| {
            let draft = decode_token(part);
            if draft.is_none() {
                debug!(token = part, "Skipping malformed share token");
            }
            draft
        })
        .collect()
}

/// Decode one token. Accepts exactly three non-empty fields with a known platform tag.
///
/// YouTube: `L` is live, anything else is archive. Twitch: `c` is a channel,
/// anything else is a VOD.
pub fn decode_token(part: &str) -> Option<EntryDraft> {
    let mut fields = part.split(FIELD_SEPARATOR);
    let (tag, id, kind) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() || tag.is_empty() || kind.is_empty() {
        return None;
    }

    let id = SourceId::new(id).ok()?;
    let source = match Platform::from_wire_tag(tag)? {
        Platform::YouTube => Source::YouTube {
            video_id: id,
            live: kind == YOUTUBE_LIVE,
        },
        Platform::Twitch => Source::Twitch {
            id,
            kind: if kind == TWITCH_CHANNEL {
                TwitchKind::Channel
            } else {
                TwitchKind::Vod
            },
        },
    };
    Some(EntryDraft::new(source))
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
