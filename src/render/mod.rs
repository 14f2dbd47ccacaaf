//! Rendering module for identicon.
//!
//! This module rasterizes pixel regions onto a canvas and encodes the
//! result as PNG.

mod canvas;
mod png;

pub use canvas::Canvas;
pub use png::{encode_png, write_png};
