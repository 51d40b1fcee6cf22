//! Session state (pure data model plus presentation-side hysteresis).
//!
//! `SessionStore` is the single authoritative session. `WelcomeTracker` is the
//! presentation-layer state machine that decides when an emptied session
//! returns to the landing screen.

pub mod session_store;
pub mod welcome;

pub use session_store::{order_by_rank, Rank, SessionStore};
pub use welcome::{WelcomePhase, WelcomeSignal, WelcomeTracker};
