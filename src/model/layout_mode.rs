//! Layout strategy selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How entries are arranged on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Smallest square-ish grid that fits every entry.
    #[default]
    Grid,
    /// One large main entry with the rest stacked in a side column.
    Focus,
    /// A single row.
    Horizontal,
    /// A single column.
    Vertical,
}

impl LayoutMode {
    /// All modes, in the order a UI would offer them.
    pub const ALL: [LayoutMode; 4] = [
        LayoutMode::Grid,
        LayoutMode::Focus,
        LayoutMode::Horizontal,
        LayoutMode::Vertical,
    ];

    /// Lowercase name, as used in config files and the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Grid => "grid",
            LayoutMode::Focus => "focus",
            LayoutMode::Horizontal => "horizontal",
            LayoutMode::Vertical => "vertical",
        }
    }

    /// Lenient parse: any unrecognized name falls back to `Grid`.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown layout mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown layout mode '{0}' (expected grid, focus, horizontal or vertical)")]
pub struct ParseModeError(pub String);

impl FromStr for LayoutMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}
