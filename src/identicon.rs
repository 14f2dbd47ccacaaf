//! The identicon pipeline.
//!
//! `identicon()` composes the stages in order:
//! hash -> colour -> grid -> painted cells -> pixel regions -> canvas.
//! `Generator` does the same with a caller-supplied hasher.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::hash::{Hasher, Md5Hasher};
use crate::pattern::{build_grid, filter_painted, map_to_pixels, pick_colour};
use crate::render::{encode_png, write_png, Canvas};
use crate::types::{Colour, Digest, Grid, GridCell, PixelRegion};

/// Everything derived from one input string.
///
/// Each field is computed once from the one before it; nothing is shared
/// between identicons.
#[derive(Debug, Clone, PartialEq)]
pub struct Identicon {
    pub input: String,
    pub digest: Digest,
    pub colour: Colour,
    pub grid: Grid,
    pub painted: Vec<GridCell>,
    pub regions: Vec<PixelRegion>,
    pub canvas: Canvas,
}

impl Identicon {
    /// Derive an identicon with the default hasher.
    pub fn new(input: &str) -> Self {
        Generator::<Md5Hasher>::default().generate(input)
    }

    /// Encode the canvas as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.canvas)
    }

    /// Encode and write the canvas to `path`.
    pub fn save(&self, path: &Path) -> Result<PathBuf> {
        write_png(&self.canvas, path)
    }
}

/// Render the identicon canvas for `input`.
pub fn identicon(input: &str) -> Canvas {
    Identicon::new(input).canvas
}

/// Runs the pipeline with a pluggable hasher.
#[derive(Debug, Clone, Default)]
pub struct Generator<H = Md5Hasher> {
    hasher: H,
}

impl<H: Hasher> Generator<H> {
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    pub fn generate(&self, input: &str) -> Identicon {
        let digest = self.hasher.digest(input.as_bytes());
        let colour = pick_colour(&digest);
        let grid = build_grid(&digest);
        let painted = filter_painted(&grid);
        let regions = map_to_pixels(&painted, grid.len());
        let canvas = Canvas::render(colour, &regions);

        log::debug!(
            "identicon {:?}: digest {}, colour {}, {} painted cells",
            input,
            digest,
            colour,
            painted.len()
        );

        Identicon {
            input: input.to_string(),
            digest,
            colour,
            grid,
            painted,
            regions,
            canvas,
        }
    }
}
