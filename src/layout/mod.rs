//! Layout engine (pure).
//!
//! Maps a layout mode and entry count to a declarative [`GridSpec`]. Total over
//! every input, including a count of zero: the worst case is a 1×1 grid.
//!
//! Cell-to-entry assignment is rank order. For `Focus` with more than one entry,
//! the lowest-ranked entry is the main cell spanning every side row.

pub mod spec;

pub use spec::{Cell, GridSpec, Tracks};

use crate::model::LayoutMode;

/// Main:side column weights for the focus layout.
pub const FOCUS_COLUMN_WEIGHTS: [u32; 2] = [7, 3];

/// Smallest square-ish grid fitting `count` cells, as `(cols, rows)`.
///
/// Zero and one entry both map to 1×1. Otherwise `cols = ceil(sqrt(count))` and
/// `rows = ceil(count / cols)`, computed in integers.
pub fn grid_dimensions(count: usize) -> (usize, usize) {
    if count <= 1 {
        return (1, 1);
    }
    let cols = ceil_sqrt(count);
    let rows = count.div_ceil(cols);
    (cols, rows)
}

/// Integer ceiling of the square root.
fn ceil_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    // Float estimate may be off by one in either direction for large n.
    while root.saturating_mul(root) < n {
        root += 1;
    }
    while root > 1 && (root - 1).saturating_mul(root - 1) >= n {
        root -= 1;
    }
    root
}

/// Compute the geometry for `count` entries under `mode`.
///
/// `cols`/`rows` are only consulted by `Grid`, which trusts them as given (see
/// [`grid_dimensions`] for the usual source). Zero-sized inputs are raised to one
/// track so the result is always drawable.
pub fn compute_geometry(mode: LayoutMode, count: usize, cols: usize, rows: usize) -> GridSpec {
    match mode {
        LayoutMode::Horizontal => GridSpec::new(Tracks::equal(count), Tracks::equal(1), None),
        LayoutMode::Vertical => GridSpec::new(Tracks::equal(1), Tracks::equal(count), None),
        LayoutMode::Focus if count <= 1 => GridSpec::single(),
        LayoutMode::Focus => {
            let side_rows = count - 1;
            let main = Cell {
                column: 1,
                row: 1,
                row_span: side_rows,
            };
            GridSpec::new(
                Tracks::weighted(FOCUS_COLUMN_WEIGHTS),
                Tracks::equal(side_rows),
                Some(main),
            )
        }
        LayoutMode::Grid => GridSpec::new(Tracks::equal(cols), Tracks::equal(rows), None),
    }
}

/// Geometry for `count` entries with grid dimensions derived from the count.
pub fn geometry_for(mode: LayoutMode, count: usize) -> GridSpec {
    let (cols, rows) = grid_dimensions(count);
    compute_geometry(mode, count, cols, rows)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
