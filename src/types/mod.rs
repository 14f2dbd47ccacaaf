//! Core domain types for identicon.
//!
//! This module contains the values that flow through the pipeline:
//! - `Digest` - the 16 byte fingerprint of the input
//! - `Colour` - RGBA colour values
//! - `Grid` / `GridCell` - the mirrored 5x5 pattern
//! - `PixelRegion` / `Point` - canvas coordinates for one grid cell

mod colour;
mod digest;
mod grid;
mod region;

pub use colour::Colour;
pub use digest::{Digest, DIGEST_LEN};
pub use grid::{Grid, GridCell, GRID_CELLS};
pub(crate) use grid::side_for;
pub use region::{PixelRegion, Point};
