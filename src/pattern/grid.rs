//! Grid construction.
//!
//! The first digest byte is skipped, the remaining fifteen are split into
//! five triplets, and each triplet `[a, b, c]` becomes the row
//! `[a, b, c, b, a]`. The result is horizontally symmetric.

use crate::types::{Digest, Grid};

/// Bytes consumed per row before mirroring.
const ROW_SOURCE: usize = 3;

/// Expand a digest into the mirrored 5x5 grid.
pub fn build_grid(digest: &Digest) -> Grid {
    let values = digest.as_bytes()[1..]
        .chunks_exact(ROW_SOURCE)
        .flat_map(mirror_row);

    let grid = Grid::from_values(values);
    log::trace!("built {}-cell grid from {}", grid.len(), digest);
    grid
}

/// `[a, b, c]` -> `[a, b, c, b, a]`.
fn mirror_row(source: &[u8]) -> Vec<u8> {
    let mut row = source.to_vec();
    row.extend(source.iter().rev().skip(1));
    row
}
