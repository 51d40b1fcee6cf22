//! The atomic unit of a viewing session.

use crate::model::{EntryId, Platform, Source, SourceId, TwitchKind};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One open video or stream tracked by the session store.
///
/// Everything except `chat_visible` and `muted` is fixed at creation.
/// Only the store can create entries or flip their flags.
///
/// Serializes to the flat shape renderers consume:
/// `{id, platform, source_id, sub_kind?, is_live, chat_visible, muted}`.
/// `sub_kind` is present for Twitch only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    source: Source,
    chat_visible: bool,
    muted: bool,
}

impl Entry {
    /// Fresh entry with both UI flags off.
    pub(crate) fn new(id: EntryId, source: Source) -> Self {
        Self {
            id,
            source,
            chat_visible: false,
            muted: false,
        }
    }

    pub(crate) fn toggle_chat(&mut self) {
        self.chat_visible = !self.chat_visible;
    }

    pub(crate) fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    // ===== Accessors (read-only) =====

    /// Store-minted unique id.
    pub fn id(&self) -> &EntryId {
        &self.id
    }

    /// What this entry plays.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Which provider hosts the source.
    pub fn platform(&self) -> Platform {
        self.source.platform()
    }

    /// Platform-native video id, channel name or VOD id.
    pub fn source_id(&self) -> &SourceId {
        self.source.source_id()
    }

    /// Channel or VOD for Twitch entries; `None` for YouTube.
    pub fn twitch_kind(&self) -> Option<TwitchKind> {
        self.source.twitch_kind()
    }

    /// Whether a chat panel is available.
    pub fn is_live(&self) -> bool {
        self.source.is_live()
    }

    /// Whether the chat panel is open.
    pub fn chat_visible(&self) -> bool {
        self.chat_visible
    }

    /// Whether the player is muted.
    pub fn muted(&self) -> bool {
        self.muted
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Entry", 7)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("platform", &self.platform())?;
        state.serialize_field("source_id", self.source_id())?;
        match self.twitch_kind() {
            Some(kind) => state.serialize_field("sub_kind", &kind)?,
            None => state.skip_field("sub_kind")?,
        }
        state.serialize_field("is_live", &self.is_live())?;
        state.serialize_field("chat_visible", &self.chat_visible)?;
        state.serialize_field("muted", &self.muted)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryDraft;

    fn entry(draft: EntryDraft) -> Entry {
        let id = EntryId::mint(draft.source_id(), 0, 1);
        Entry::new(id, draft.source)
    }

    #[test]
    fn new_entry_has_flags_off() {
        let e = entry(EntryDraft::youtube("abc", true).unwrap());
        assert!(!e.chat_visible());
        assert!(!e.muted());
    }

    #[test]
    fn toggles_flip_independently() {
        let mut e = entry(EntryDraft::twitch_channel("streamer").unwrap());
        e.toggle_chat();
        assert!(e.chat_visible());
        assert!(!e.muted());
        e.toggle_mute();
        e.toggle_chat();
        assert!(!e.chat_visible());
        assert!(e.muted());
    }

    #[test]
    fn serializes_collaborator_shape() {
        let e = entry(EntryDraft::twitch_vod("123").unwrap());
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["id"], "123-0-1");
        assert_eq!(json["platform"], "twitch");
        assert_eq!(json["source_id"], "123");
        assert_eq!(json["sub_kind"], "vod");
        assert_eq!(json["is_live"], false);
        assert_eq!(json["chat_visible"], false);
        assert_eq!(json["muted"], false);
    }

    #[test]
    fn twitch_entry_id_is_not_shadowed_by_source_id() {
        for draft in [
            EntryDraft::twitch_channel("streamer").unwrap(),
            EntryDraft::twitch_vod("987654").unwrap(),
        ] {
            let e = entry(draft);
            let text = serde_json::to_string(&e).unwrap();
            assert_eq!(text.matches("\"id\"").count(), 1, "one id key in {text}");

            let json: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert_eq!(json["id"], e.id().as_str());
            assert_eq!(json["source_id"], e.source_id().as_str());
        }
    }

    #[test]
    fn youtube_entry_omits_sub_kind() {
        let e = entry(EntryDraft::youtube("abc", true).unwrap());
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["platform"], "youtube");
        assert_eq!(json["source_id"], "abc");
        assert_eq!(json["is_live"], true);
        assert!(json.get("sub_kind").is_none());
    }
}
