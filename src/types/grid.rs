//! Mirrored grid of digest values.

use serde::Serialize;

/// Number of cells in every grid (5 rows of 5).
pub const GRID_CELLS: usize = 25;

/// One grid position: the byte driving it and its row-major index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridCell {
    pub value: u8,
    pub index: usize,
}

impl GridCell {
    pub const fn new(value: u8, index: usize) -> Self {
        Self { value, index }
    }

    /// Even-valued cells are drawn in the identicon colour.
    pub fn is_painted(&self) -> bool {
        self.value % 2 == 0
    }

    /// Row of this cell in a grid with the given side length.
    pub fn row(&self, side: usize) -> usize {
        self.index / side
    }

    /// Column of this cell in a grid with the given side length.
    pub fn column(&self, side: usize) -> usize {
        self.index % side
    }
}

/// A square grid of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    cells: Vec<GridCell>,
}

impl Grid {
    /// Build a grid from row-major values, indexing each by position.
    pub fn from_values(values: impl IntoIterator<Item = u8>) -> Self {
        let cells = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| GridCell::new(value, index))
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Side length, derived from the cell count.
    pub fn side(&self) -> usize {
        side_for(self.cells.len())
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.side().max(1))
    }

    /// Values of a single row, if it exists.
    pub fn row_values(&self, row: usize) -> Option<Vec<u8>> {
        self.rows()
            .nth(row)
            .map(|cells| cells.iter().map(|c| c.value).collect())
    }

    /// Text preview: `#` for painted cells, `.` for blank ones.
    pub fn preview(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.side());
        for row in self.rows() {
            for cell in row {
                out.push(if cell.is_painted() { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

/// Side length of a square grid holding `len` cells.
pub(crate) fn side_for(len: usize) -> usize {
    (len as f64).sqrt().round() as usize
}
