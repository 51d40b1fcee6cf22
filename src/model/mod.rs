//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod entry;
pub mod error;
pub mod identifiers;
pub mod layout_mode;
pub mod source;

// Re-export for convenience
pub use entry::Entry;
pub use error::AppError;
pub use identifiers::{EntryId, InvalidSourceId, SourceId};
pub use layout_mode::{LayoutMode, ParseModeError};
pub use source::{EntryDraft, Platform, Source, TwitchKind};
