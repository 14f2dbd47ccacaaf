//! Input hashing.
//!
//! The digest algorithm is fixed to MD5 so that a given string keeps the
//! same identicon across releases. The `Hasher` trait exists so callers can
//! plug in another 16 byte digest without touching the rest of the pipeline.

use md5::{Digest as _, Md5};

use crate::types::{Digest, DIGEST_LEN};

/// Turns input bytes into a 16 byte digest.
pub trait Hasher {
    fn digest(&self, input: &[u8]) -> Digest;
}

/// MD5, the default hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Hasher;

impl Hasher for Md5Hasher {
    fn digest(&self, input: &[u8]) -> Digest {
        let output = Md5::digest(input);
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&output);
        Digest::new(bytes)
    }
}

/// Hash a string with the default hasher.
pub fn hash(input: &str) -> Digest {
    let digest = Md5Hasher.digest(input.as_bytes());
    log::trace!("hashed {:?} -> {}", input, digest);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_input() {
        assert_eq!(
            hash("identicon").as_bytes(),
            &[173, 43, 65, 97, 60, 135, 2, 181, 55, 43, 189, 201, 168, 16, 112, 64]
        );
    }

    #[test]
    fn test_hash_empty_input() {
        assert_eq!(hash("").to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash("alice@example.com"), hash("alice@example.com"));
        assert_ne!(hash("alice"), hash("bob"));
    }

    #[test]
    fn test_hash_length_independent_of_input() {
        let long = "x".repeat(10_000);
        assert_eq!(hash(&long).as_bytes().len(), DIGEST_LEN);
        assert_eq!(hash("\u{1F600}").as_bytes().len(), DIGEST_LEN);
    }
}
