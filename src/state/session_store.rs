//! The session store: authoritative in-memory model of a viewing session.
//!
//! Owns the open entries, the rank map that orders them for display, the
//! selected layout mode and two screen-level flags. Every operation runs to
//! completion synchronously; no partially-updated state is ever observable.
//!
//! # Ranks
//!
//! Display order is a map `EntryId -> Rank`, separate from the physical order
//! of the entry collection. Ranks are unique and strictly positive but not
//! necessarily contiguous. The key set of the rank map always equals the id set
//! of the collection: both are created and destroyed together.
//!
//! # Stale references
//!
//! Operations that name an entry by id (remove, toggle, reorder) are no-ops
//! when the id is unknown. UI events can race state changes (a drag cancelled
//! after the entry was removed), so this is not an error.

use crate::model::{Entry, EntryDraft, EntryId, LayoutMode};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Display rank of an entry. Lower ranks are drawn first.
pub type Rank = u32;

/// Process-wide session state.
///
/// Created once at startup with the welcome screen visible, controls closed
/// and no entries. Only its own methods mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    /// Entries in insertion order. Irrelevant for display once ranks exist.
    entries: Vec<Entry>,

    /// Rank of every entry in `entries`, and nothing else.
    order: HashMap<EntryId, Rank>,

    /// Selected layout strategy.
    layout_mode: LayoutMode,

    /// Whether the landing screen is shown instead of the video grid.
    welcome_visible: bool,

    /// Whether the add/reset controls panel is open.
    controls_open: bool,

    /// Monotonic id sequence; never rewinds, so ids are never reused.
    next_sequence: u64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Fresh session: welcome visible, controls closed, no entries, grid layout.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            order: HashMap::new(),
            layout_mode: LayoutMode::default(),
            welcome_visible: true,
            controls_open: false,
            next_sequence: 1,
        }
    }

    /// Fresh session with a preselected layout mode.
    pub fn with_layout_mode(layout_mode: LayoutMode) -> Self {
        Self {
            layout_mode,
            ..Self::new()
        }
    }

    // ===== Mutations =====

    /// Add one entry at the end of the display order.
    ///
    /// Rank is one past the current maximum (or 1 when empty). No dedup: adding
    /// the same source twice yields two independent entries.
    pub fn add_entry(&mut self, draft: EntryDraft) -> EntryId {
        let rank = self.max_rank().unwrap_or(0) + 1;
        let id = self.mint_id(&draft);

        debug!(entry_id = %id, rank, platform = %draft.platform(), "Adding entry");

        self.order.insert(id.clone(), rank);
        self.entries.push(Entry::new(id.clone(), draft.source));
        id
    }

    /// Remove an entry and its rank. Returns whether anything was removed.
    pub fn remove_entry(&mut self, id: &EntryId) -> bool {
        let Some(position) = self.position(id) else {
            trace!(entry_id = %id, "remove_entry: unknown id, ignoring");
            return false;
        };

        self.entries.remove(position);
        self.order.remove(id);
        debug!(entry_id = %id, remaining = self.entries.len(), "Removed entry");
        true
    }

    /// Empty the collection and rank map in one transition.
    ///
    /// Does not touch `welcome_visible`; returning to the landing screen is the
    /// caller's decision (see [`crate::state::WelcomeTracker`]).
    pub fn reset_all(&mut self) {
        debug!(removed = self.entries.len(), "Resetting session");
        self.entries.clear();
        self.order.clear();
    }

    /// Flip the chat-panel flag of an entry. Returns whether the id was known.
    pub fn toggle_chat(&mut self, id: &EntryId) -> bool {
        self.with_entry_mut(id, "toggle_chat", Entry::toggle_chat)
    }

    /// Flip the muted flag of an entry. Returns whether the id was known.
    pub fn toggle_mute(&mut self, id: &EntryId) -> bool {
        self.with_entry_mut(id, "toggle_mute", Entry::toggle_mute)
    }

    /// Select the layout strategy. Entries and ranks are untouched.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        debug!(%mode, "Layout mode changed");
        self.layout_mode = mode;
    }

    /// Show or hide the landing screen.
    pub fn set_welcome_visible(&mut self, visible: bool) {
        self.welcome_visible = visible;
    }

    /// Open or close the add/reset controls panel.
    pub fn set_controls_open(&mut self, open: bool) {
        self.controls_open = open;
    }

    /// Leave the landing screen: hide welcome, open the controls panel.
    pub fn start_session(&mut self) {
        debug!("Starting session");
        self.welcome_visible = false;
        self.controls_open = true;
    }

    /// Replace the whole session with `drafts`, ranked 1..=N in order.
    ///
    /// Used once at startup to restore a shared link. Never merges with
    /// existing entries. Hides the welcome screen.
    pub fn load_batch(&mut self, drafts: impl IntoIterator<Item = EntryDraft>) {
        let mut entries = Vec::new();
        let mut order = HashMap::new();

        for (rank, draft) in (1..).zip(drafts) {
            let id = self.mint_id(&draft);
            order.insert(id.clone(), rank);
            entries.push(Entry::new(id, draft.source));
        }

        debug!(count = entries.len(), "Loaded batch");

        self.entries = entries;
        self.order = order;
        self.welcome_visible = false;
    }

    /// Swap the ranks of two entries.
    ///
    /// If either id has no rank the call is a no-op. Returns whether a swap happened.
    pub fn reorder(&mut self, a: &EntryId, b: &EntryId) -> bool {
        let (Some(rank_a), Some(rank_b)) = (self.rank_of(a), self.rank_of(b)) else {
            trace!(a = %a, b = %b, "reorder: unknown id, ignoring");
            return false;
        };

        self.order.insert(a.clone(), rank_b);
        self.order.insert(b.clone(), rank_a);
        debug!(a = %a, b = %b, new_rank_a = rank_b, new_rank_b = rank_a, "Swapped ranks");
        true
    }

    // ===== Derived views =====

    /// Entries sorted ascending by rank; ties keep collection order.
    ///
    /// Recomputed on every call. This is the sequence renderers iterate.
    pub fn ordered_entries(&self) -> Vec<&Entry> {
        order_by_rank(&self.entries, &self.order)
    }

    // ===== Accessors (read-only) =====

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn entry(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// The raw rank map, for renderers that need rank integers as ordering hints.
    pub fn order(&self) -> &HashMap<EntryId, Rank> {
        &self.order
    }

    /// Rank of an entry, `None` for unknown ids.
    pub fn rank_of(&self, id: &EntryId) -> Option<Rank> {
        self.order.get(id).copied()
    }

    /// Number of open entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry is open.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selected layout strategy.
    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    /// Whether the landing screen is shown.
    pub fn welcome_visible(&self) -> bool {
        self.welcome_visible
    }

    /// Whether the controls panel is open.
    pub fn controls_open(&self) -> bool {
        self.controls_open
    }

    // ===== Internals =====

    fn max_rank(&self) -> Option<Rank> {
        self.order.values().copied().max()
    }

    fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    fn mint_id(&mut self, draft: &EntryDraft) -> EntryId {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        EntryId::mint(
            draft.source_id(),
            chrono::Utc::now().timestamp_millis(),
            sequence,
        )
    }

    fn with_entry_mut(
        &mut self,
        id: &EntryId,
        op: &'static str,
        f: impl FnOnce(&mut Entry),
    ) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) => {
                f(entry);
                debug!(
                    entry_id = %id,
                    op,
                    chat_visible = entry.chat_visible(),
                    muted = entry.muted(),
                    "Toggled flag"
                );
                true
            }
            None => {
                trace!(entry_id = %id, op, "unknown id, ignoring");
                false
            }
        }
    }
}

/// Sort `entries` by their rank in `order`, stable on ties.
///
/// Entries without a rank sort last; the store's invariant means this never
/// happens for its own data.
pub fn order_by_rank<'a>(entries: &'a [Entry], order: &HashMap<EntryId, Rank>) -> Vec<&'a Entry> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by_key(|e| order.get(e.id()).copied().unwrap_or(Rank::MAX));
    sorted
}

#[cfg(test)]
#[path = "session_store_tests.rs"]
mod tests;
