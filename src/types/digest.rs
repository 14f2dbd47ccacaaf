//! Fixed-length digest of an input string.

use std::fmt;

use serde::Serialize;

/// Number of bytes in every digest.
pub const DIGEST_LEN: usize = 16;

/// A 16 byte fingerprint of the input text.
///
/// Byte 0 feeds the red channel of the colour and is skipped by the grid;
/// bytes 1..16 drive the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex representation.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        let digest = Digest::new([
            173, 43, 65, 97, 60, 135, 2, 181, 55, 43, 189, 201, 168, 16, 112, 64,
        ]);
        assert_eq!(digest.to_hex(), "ad2b41613c8702b5372bbdc9a8107040");
        assert_eq!(digest.to_string(), digest.to_hex());
    }

    #[test]
    fn test_zero_padded_hex() {
        let digest = Digest::from([0u8; DIGEST_LEN]);
        assert_eq!(digest.to_hex(), "0".repeat(32));
    }
}
