//! Declarative grid geometry.
//!
//! A `GridSpec` describes column/row tracks and, for two-tier layouts, the span of
//! the main cell. It knows nothing about which entry sits where beyond the rank
//! index passed to [`GridSpec::cell_for`].

use serde::Serialize;
use std::fmt;

/// Track sizing for one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Tracks {
    /// `count` tracks of equal size (`repeat(count, 1fr)`).
    Equal {
        /// Number of tracks. Always at least 1.
        count: usize,
    },
    /// One track per weight, sized proportionally (`7fr 3fr`).
    Weighted {
        /// Fractional weights, in track order.
        weights: Vec<u32>,
    },
}

impl Tracks {
    /// Equal tracks; a zero count is raised to one so the spec stays drawable.
    pub fn equal(count: usize) -> Self {
        Tracks::Equal {
            count: count.max(1),
        }
    }

    /// Proportional tracks, one per weight.
    pub fn weighted(weights: impl Into<Vec<u32>>) -> Self {
        Tracks::Weighted {
            weights: weights.into(),
        }
    }

    /// Number of tracks on this axis.
    pub fn len(&self) -> usize {
        match self {
            Tracks::Equal { count } => *count,
            Tracks::Weighted { weights } => weights.len(),
        }
    }

    /// Whether the axis has no tracks. Never true for specs built by this crate.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// CSS `grid-template-*` value.
    pub fn to_css(&self) -> String {
        match self {
            Tracks::Equal { count: 1 } => "1fr".to_string(),
            Tracks::Equal { count } => format!("repeat({count}, 1fr)"),
            Tracks::Weighted { weights } => weights
                .iter()
                .map(|w| format!("{w}fr"))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// A placed cell. Lines are 1-based like CSS grid lines; `row_span` is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// 1-based column.
    pub column: usize,
    /// 1-based first row.
    pub row: usize,
    /// Rows covered, starting at `row`.
    pub row_span: usize,
}

impl Cell {
    fn single(column: usize, row: usize) -> Self {
        Self {
            column,
            row,
            row_span: 1,
        }
    }

    /// CSS `grid-row` value, e.g. `1 / 5`.
    pub fn grid_row_css(&self) -> String {
        format!("{} / {}", self.row, self.row + self.row_span)
    }
}

/// Complete geometry for one layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSpec {
    columns: Tracks,
    rows: Tracks,
    /// Explicit placement for the rank-0 element in two-tier layouts.
    main: Option<Cell>,
}

impl GridSpec {
    pub(crate) fn new(columns: Tracks, rows: Tracks, main: Option<Cell>) -> Self {
        Self {
            columns,
            rows,
            main,
        }
    }

    /// The 1×1 spec used for empty and single-entry sessions.
    pub fn single() -> Self {
        Self::new(Tracks::equal(1), Tracks::equal(1), None)
    }

    /// Column tracks.
    pub fn columns(&self) -> &Tracks {
        &self.columns
    }

    /// Row tracks.
    pub fn rows(&self) -> &Tracks {
        &self.rows
    }

    /// Main-cell override, present only for multi-entry focus layouts.
    pub fn main_cell(&self) -> Option<Cell> {
        self.main
    }

    /// Number of cells the explicit grid defines.
    pub fn cell_count(&self) -> usize {
        self.columns.len() * self.rows.len()
    }

    /// Cell for the element at display position `index` (0-based, rank order).
    ///
    /// With a main override, index 0 takes the main cell and the rest fill
    /// column 2 top to bottom. Otherwise cells fill left-to-right, top-to-bottom;
    /// indexes past the explicit grid continue onto implicit rows.
    pub fn cell_for(&self, index: usize) -> Cell {
        match self.main {
            Some(main) if index == 0 => main,
            Some(_) => Cell::single(2, index),
            None => {
                let cols = self.columns.len().max(1);
                Cell::single(index % cols + 1, index / cols + 1)
            }
        }
    }

    /// Cells for the first `count` elements in rank order.
    pub fn placements(&self, count: usize) -> Vec<Cell> {
        (0..count).map(|index| self.cell_for(index)).collect()
    }

    /// CSS declarations for the grid container.
    pub fn to_css(&self) -> String {
        format!(
            "grid-template-columns: {}; grid-template-rows: {};",
            self.columns.to_css(),
            self.rows.to_css()
        )
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns.len(), self.rows.len())?;
        if let Some(main) = self.main {
            write!(f, " (main spans rows {})", main.grid_row_css())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_tracks_never_empty() {
        assert_eq!(Tracks::equal(0).len(), 1);
        assert!(!Tracks::equal(0).is_empty());
    }

    #[test]
    fn tracks_css() {
        assert_eq!(Tracks::equal(1).to_css(), "1fr");
        assert_eq!(Tracks::equal(4).to_css(), "repeat(4, 1fr)");
        assert_eq!(Tracks::weighted([7, 3]).to_css(), "7fr 3fr");
    }

    #[test]
    fn cell_grid_row_css_is_exclusive_end() {
        let cell = Cell {
            column: 1,
            row: 1,
            row_span: 4,
        };
        assert_eq!(cell.grid_row_css(), "1 / 5");
    }

    #[test]
    fn row_major_placement() {
        let spec = GridSpec::new(Tracks::equal(3), Tracks::equal(2), None);
        let cells = spec.placements(5);
        assert_eq!(cells[0], Cell::single(1, 1));
        assert_eq!(cells[2], Cell::single(3, 1));
        assert_eq!(cells[3], Cell::single(1, 2));
        assert_eq!(cells[4], Cell::single(2, 2));
    }

    #[test]
    fn single_spec_display() {
        assert_eq!(GridSpec::single().to_string(), "1x1");
        assert_eq!(GridSpec::single().cell_count(), 1);
    }
}
