//! The dense rectangular grid of optional marker ids.

use crate::error::IntegrityError;
use crate::id::MarkerId;
use std::collections::HashMap;

/// A `width × height` array of cells, each empty or holding one marker.
///
/// Cells are addressed by grid-local `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`; row `y` of the input holds the cells `(0..width, y)`.
/// Construction validates the loader contract (rectangular rows, unique
/// marker ids) and the grid is immutable afterwards.
///
/// # Examples
///
/// ```
/// use vicinity_core::{Grid, MarkerId};
///
/// let grid = Grid::from_rows(vec![
///     vec![Some(MarkerId(1)), None],
///     vec![None, Some(MarkerId(2))],
/// ])
/// .unwrap();
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.get(1, 1), Some(MarkerId(2)));
/// assert_eq!(grid.get(5, -3), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Option<MarkerId>>,
    marker_count: usize,
}

impl Grid {
    /// Maximum dimension size: logical coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Build a grid from rows of cells, row `y` first.
    ///
    /// Returns `Err(IntegrityError::EmptyGrid)` for zero rows or columns,
    /// `RaggedRow` if any row differs in length from row 0,
    /// `DimensionTooLarge` if an axis exceeds [`Grid::MAX_DIM`], and
    /// `DuplicateMarker` if an id occupies more than one cell.
    pub fn from_rows(rows: Vec<Vec<Option<MarkerId>>>) -> Result<Self, IntegrityError> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || width == 0 {
            return Err(IntegrityError::EmptyGrid);
        }
        let height = rows.len();
        let width_u32 = check_dim("width", width)?;
        let height_u32 = check_dim("height", height)?;

        let mut cells = Vec::with_capacity(width * height);
        let mut seen: HashMap<MarkerId, (u32, u32)> = HashMap::new();
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(IntegrityError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, cell) in row.iter().enumerate() {
                if let Some(marker) = *cell {
                    // Both indices are bounded by the checked dimensions.
                    let here = (x as u32, y as u32);
                    if let Some(first) = seen.insert(marker, here) {
                        return Err(IntegrityError::DuplicateMarker {
                            marker,
                            first,
                            second: here,
                        });
                    }
                }
            }
            cells.extend(row);
        }

        Ok(Self {
            width: width_u32,
            height: height_u32,
            cells,
            marker_count: seen.len(),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of occupied cells.
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    /// Whether grid-local `(x, y)` lies inside the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// The marker at grid-local `(x, y)`, or `None` if empty or out of bounds.
    pub fn get(&self, x: i64, y: i64) -> Option<MarkerId> {
        if !self.contains(x, y) {
            return None;
        }
        self.cells[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Occupied cells as `(x, y, marker)` in row-major order.
    pub fn markers(&self) -> impl Iterator<Item = (u32, u32, MarkerId)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|marker| ((i % width) as u32, (i / width) as u32, marker))
        })
    }

    /// Rows of cells, row 0 first.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<MarkerId>]> + '_ {
        self.cells.chunks(self.width as usize)
    }
}

fn check_dim(name: &'static str, value: usize) -> Result<u32, IntegrityError> {
    u32::try_from(value)
        .ok()
        .filter(|&v| v <= Grid::MAX_DIM)
        .ok_or(IntegrityError::DimensionTooLarge {
            name,
            value,
            max: Grid::MAX_DIM as usize,
        })
}
