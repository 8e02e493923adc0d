//! Hashing utilities for the trust system
//!
//! Manifests are signed the Ethereum way, so every digest here is legacy
//! Keccak-256 (not the NIST SHA3-256 padding).

use sha3::{Digest, Keccak256};

/// Length in bytes of a Keccak-256 digest
pub const DIGEST_LEN: usize = 32;

/// Hash a byte slice with Keccak-256
pub fn keccak256(bytes: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Keccak256::new();
    hasher.update(bytes);
    let hash = hasher.finalize();

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&hash);
    digest
}

/// Hash a byte slice and render it as `0x`-prefixed lowercase hex
pub fn keccak256_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(keccak256(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty_input() {
        // Well-known Keccak-256 of the empty string
        assert_eq!(
            keccak256_hex(b""),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak256_is_not_sha3() {
        // SHA3-256("") starts with a7ffc6f8; Keccak-256 must not
        assert!(!keccak256_hex(b"").starts_with("0xa7ffc6f8"));
    }

    #[test]
    fn test_keccak256_deterministic() {
        let first = keccak256(b"dapp file");
        let second = keccak256(b"dapp file");
        assert_eq!(first, second);
        assert_ne!(first, keccak256(b"dapp file "));
    }
}
