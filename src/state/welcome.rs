//! Return-to-welcome hysteresis.
//!
//! The store never reverts to the landing screen by itself. This tracker,
//! owned by the presentation layer, watches the entry count after each store
//! change and says when to call `set_welcome_visible(true)`: only when the
//! collection becomes empty after having been populated. Removing the last
//! entry during initial setup before anything was ever shown does not flicker
//! back to the landing screen, because nothing was populated yet.

/// Where the session is in its populate/empty cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WelcomePhase {
    /// No entry has been seen since the welcome screen was last shown.
    #[default]
    NeverPopulated,
    /// At least one entry is open.
    Populated,
    /// Emptied after being populated; welcome is due.
    EmptiedAfterPopulated,
}

/// What the caller should do after an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeSignal {
    /// Nothing to do.
    None,
    /// Call `set_welcome_visible(true)` on the store.
    ShowWelcome,
}

/// Drives [`WelcomePhase`] from store-change notifications.
#[derive(Debug, Clone, Default)]
pub struct WelcomeTracker {
    phase: WelcomePhase,
}

impl WelcomeTracker {
    /// Tracker in `NeverPopulated`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> WelcomePhase {
        self.phase
    }

    /// Feed the current entry count after a store change.
    ///
    /// Returns `ShowWelcome` on the populated→empty transition. The tracker then
    /// stays in `EmptiedAfterPopulated` until [`acknowledge`](Self::acknowledge)
    /// reports the welcome screen as shown; further empty observations return
    /// `None`. Any non-empty observation moves to `Populated`.
    pub fn observe(&mut self, entry_count: usize) -> WelcomeSignal {
        if entry_count > 0 {
            self.phase = WelcomePhase::Populated;
            return WelcomeSignal::None;
        }

        if self.phase == WelcomePhase::Populated {
            tracing::debug!("Session emptied after being populated; welcome is due");
            self.phase = WelcomePhase::EmptiedAfterPopulated;
            return WelcomeSignal::ShowWelcome;
        }
        WelcomeSignal::None
    }

    /// The welcome screen is on screen: rearm in `NeverPopulated`.
    ///
    /// No-op in any other phase.
    pub fn acknowledge(&mut self) {
        if self.phase == WelcomePhase::EmptiedAfterPopulated {
            self.phase = WelcomePhase::NeverPopulated;
        }
    }

    /// Observe a store and bring the welcome screen back when due.
    ///
    /// Only shows welcome if it is currently hidden, and only rearms after
    /// doing so. When the session empties while welcome is already visible,
    /// the tracker stays due and fires once welcome is hidden again with the
    /// session still empty.
    pub fn sync(&mut self, store: &mut crate::state::SessionStore) -> WelcomeSignal {
        self.observe(store.len());

        if self.phase == WelcomePhase::EmptiedAfterPopulated && !store.welcome_visible() {
            store.set_welcome_visible(true);
            self.acknowledge();
            return WelcomeSignal::ShowWelcome;
        }
        WelcomeSignal::None
    }
}
