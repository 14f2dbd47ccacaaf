//! Canvas rasterizer - fills pixel regions with a single colour.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::pattern::CANVAS_SIZE;
use crate::types::{Colour, PixelRegion};

/// Background for pixels outside every painted region.
const BACKGROUND: Colour = Colour::WHITE;

/// A 250x250 RGBA raster owned by a single identicon.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with the background colour.
    pub fn blank() -> Self {
        let image = ImageBuffer::from_pixel(CANVAS_SIZE, CANVAS_SIZE, Rgba::from(BACKGROUND));
        Self { image }
    }

    /// Render regions in `colour` onto a fresh canvas.
    pub fn render(colour: Colour, regions: &[PixelRegion]) -> Self {
        let mut canvas = Self::blank();
        for region in regions {
            canvas.fill(region, colour);
        }
        canvas
    }

    /// Fill a region, corners inclusive. Pixels past the canvas edge are
    /// ignored.
    pub fn fill(&mut self, region: &PixelRegion, colour: Colour) {
        let rgba = Rgba::from(colour);
        let max_x = region.bottom_right.x.min(self.width() - 1);
        let max_y = region.bottom_right.y.min(self.height() - 1);

        for y in region.top_left.y..=max_y {
            for x in region.top_left.x..=max_x {
                self.image.put_pixel(x, y, rgba);
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Colour of a pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Colour::new(p.0[0], p.0[1], p.0[2], p.0[3]))
    }

    /// Count pixels that differ from the background.
    pub fn painted_pixels(&self) -> usize {
        let background = Rgba::from(BACKGROUND);
        self.image.pixels().filter(|p| **p != background).count()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
