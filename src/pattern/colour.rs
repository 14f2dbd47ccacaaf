//! Colour selection.

use crate::types::{Colour, Digest};

/// Take the first three digest bytes as red, green and blue.
pub fn pick_colour(digest: &Digest) -> Colour {
    let bytes = digest.as_bytes();
    Colour::rgb(bytes[0], bytes[1], bytes[2])
}
