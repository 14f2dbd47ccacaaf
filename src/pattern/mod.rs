//! Pattern derivation.
//!
//! Turns a digest into the things the rasterizer needs: a colour and a list
//! of pixel regions to fill. Each stage is a pure function of the previous
//! stage's output.

mod colour;
mod filter;
mod grid;
mod pixels;

pub use colour::pick_colour;
pub use filter::filter_painted;
pub use grid::build_grid;
pub use pixels::{map_to_pixels, region_for, CANVAS_SIZE, CELL_MARGIN, CELL_SIZE, REGION_SIZE};
