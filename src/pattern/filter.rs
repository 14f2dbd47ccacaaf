use crate::types::{Grid, GridCell};

/// Keep the even-valued cells, in grid order.
pub fn filter_painted(grid: &Grid) -> Vec<GridCell> {
    grid.cells()
        .iter()
        .filter(|cell| cell.is_painted())
        .copied()
        .collect()
}
