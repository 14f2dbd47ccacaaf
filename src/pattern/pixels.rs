//! Grid index to canvas coordinates.

use crate::types::{side_for, GridCell, PixelRegion, Point};

/// Pixels per grid cell along each axis.
pub const CELL_SIZE: u32 = 50;

/// Gutter between a cell's edge and its filled square.
pub const CELL_MARGIN: u32 = 2;

/// Distance between a region's top-left and bottom-right corners.
pub const REGION_SIZE: u32 = 46;

/// Canvas width and height.
pub const CANVAS_SIZE: u32 = CELL_SIZE * 5;

/// Map each painted cell to its square on the canvas, preserving order.
///
/// `grid_len` is the cell count of the grid the cells came from; the side
/// length is `round(sqrt(grid_len))`.
pub fn map_to_pixels(cells: &[GridCell], grid_len: usize) -> Vec<PixelRegion> {
    let side = side_for(grid_len).max(1);
    log::trace!("mapping {} cells on a {}x{} grid", cells.len(), side, side);
    cells.iter().map(|cell| region_for(cell.index, side)).collect()
}

/// Region for grid index `index` in a grid `side` cells wide.
pub fn region_for(index: usize, side: usize) -> PixelRegion {
    let column = (index % side) as u32;
    let row = (index / side) as u32;

    let top_left = Point::new(
        column * CELL_SIZE + CELL_MARGIN,
        row * CELL_SIZE + CELL_MARGIN,
    );
    let bottom_right = Point::new(top_left.x + REGION_SIZE, top_left.y + REGION_SIZE);

    PixelRegion::new(top_left, bottom_right)
}
