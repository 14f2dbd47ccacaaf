//! identicon - Deterministic avatars from text
//!
//! A library for turning any string (a username, an email address) into a
//! small symmetric 250x250 image. The same string always yields the same
//! image.
//!
//! ```no_run
//! let icon = identicon::Identicon::new("alice@example.com");
//! let png = icon.to_png()?;
//! # Ok::<(), identicon::IdenticonError>(())
//! ```

pub mod cli;
pub mod error;
pub mod hash;
pub mod identicon;
pub mod logger;
pub mod manifest;
pub mod output;
pub mod pattern;
pub mod render;
pub mod types;

pub use error::{IdenticonError, Result};
pub use hash::{hash, Hasher, Md5Hasher};
pub use identicon::{identicon, Generator, Identicon};
pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use pattern::{build_grid, filter_painted, map_to_pixels, pick_colour};
pub use render::{encode_png, write_png, Canvas};
pub use types::{Colour, Digest, Grid, GridCell, PixelRegion, Point};
