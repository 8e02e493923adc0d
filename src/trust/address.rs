//! Account addresses and the public keys they are derived from

use crate::trust::hasher::keccak256;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length in bytes of an account address
pub const ADDRESS_LEN: usize = 20;

/// Length in bytes of an uncompressed secp256k1 point (`0x04 || X || Y`)
pub const PUBLIC_KEY_LEN: usize = 65;

/// Error returned when a string is not a 20-byte hex address
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a 20-byte hex address: {0:?}")]
pub struct AddressParseError(pub String);

/// Uncompressed secp256k1 public key
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct UncompressedPublicKey([u8; PUBLIC_KEY_LEN]);

impl UncompressedPublicKey {
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        UncompressedPublicKey(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    /// The 64 coordinate bytes without the curve-point prefix
    pub fn coordinates(&self) -> &[u8] {
        &self.0[1..]
    }
}

impl fmt::Debug for UncompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UncompressedPublicKey(0x{})", hex::encode(self.0))
    }
}

/// A 20-byte account address
///
/// Displayed as lowercase hex with a `0x` prefix. Parsing accepts any hex
/// casing, so checksum-cased and lowercase spellings compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }

    /// Derive the address of a public key: the last 20 bytes of the
    /// Keccak-256 hash of its coordinates
    pub fn from_public_key(public_key: &UncompressedPublicKey) -> Self {
        let digest = keccak256(public_key.coordinates());

        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&digest[digest.len() - ADDRESS_LEN..]);
        Address(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Compare against an externally supplied address string
    ///
    /// Empty or malformed strings never match.
    pub fn matches(&self, other: &str) -> bool {
        other.parse::<Address>().is_ok_and(|parsed| parsed == *self)
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.len() != ADDRESS_LEN * 2 {
            return Err(AddressParseError(s.to_string()));
        }

        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| AddressParseError(s.to_string()))?;
        Ok(Address(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_mixed_case() {
        let checksummed: Address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap();
        let lowercase: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
        assert_eq!(checksummed, lowercase);
        assert_eq!(
            checksummed.to_string(),
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
        );
    }

    #[test]
    fn test_parse_without_prefix() {
        let address: Address = "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
        assert!(address.matches("0X5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED"));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("".parse::<Address>().is_err());
        assert!("0x".parse::<Address>().is_err());
        assert!("0x1234".parse::<Address>().is_err());
        assert!("0xzzaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse::<Address>().is_err());
        assert!("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed00".parse::<Address>().is_err());
    }

    #[test]
    fn test_matches_never_accepts_empty() {
        let address = Address::from_bytes([0u8; ADDRESS_LEN]);
        assert!(!address.matches(""));
        assert!(address.matches("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn test_from_public_key_uses_last_twenty_bytes() {
        let mut raw = [0u8; PUBLIC_KEY_LEN];
        raw[0] = 0x04;
        let key = UncompressedPublicKey::from_bytes(raw);

        let digest = keccak256(&[0u8; 64]);
        let address = Address::from_public_key(&key);
        assert_eq!(address.as_bytes()[..], digest[12..]);
    }
}
