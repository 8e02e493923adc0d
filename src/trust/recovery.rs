//! Public key recovery from recoverable ECDSA signatures
//!
//! Signatures are 65 bytes laid out as `r || s || v`. The recovery id `v`
//! may be given either raw (`0..=3`) or in the Ethereum `27..` notation.

use crate::trust::address::{UncompressedPublicKey, PUBLIC_KEY_LEN};
use crate::trust::error::TrustError;
use crate::trust::hasher::DIGEST_LEN;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use tracing::debug;

/// Length in bytes of a recoverable signature
pub const SIGNATURE_LEN: usize = 65;

/// Offset applied to recovery ids in the Ethereum `v` notation
const ETHEREUM_V_OFFSET: u8 = 27;

/// Recovers the public key that produced a signature over a digest
pub trait SignatureRecoverer {
    fn recover(
        &self,
        digest: &[u8; DIGEST_LEN],
        signature: &[u8],
    ) -> Result<UncompressedPublicKey, TrustError>;
}

/// secp256k1 recovery backed by `k256`
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Recoverer;

impl SignatureRecoverer for Secp256k1Recoverer {
    fn recover(
        &self,
        digest: &[u8; DIGEST_LEN],
        signature: &[u8],
    ) -> Result<UncompressedPublicKey, TrustError> {
        if signature.len() != SIGNATURE_LEN {
            debug!("Rejecting signature of {} bytes", signature.len());
            return Err(TrustError::InvalidSignature);
        }

        let recovery_id = parse_recovery_id(signature[SIGNATURE_LEN - 1])?;
        let signature = Signature::from_slice(&signature[..SIGNATURE_LEN - 1])
            .map_err(|_| TrustError::InvalidSignature)?;

        // k256 only accepts low-s; flipping s to n - s mirrors the point, so the parity flips too
        let (signature, recovery_id) = match signature.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
            ),
            None => (signature, recovery_id),
        };

        let key = VerifyingKey::recover_from_prehash(digest, &signature, recovery_id)
            .map_err(|_| TrustError::InvalidSignature)?;

        let point = key.to_encoded_point(false);
        let bytes: [u8; PUBLIC_KEY_LEN] = point
            .as_bytes()
            .try_into()
            .map_err(|_| TrustError::InvalidSignature)?;

        Ok(UncompressedPublicKey::from_bytes(bytes))
    }
}

fn parse_recovery_id(v: u8) -> Result<RecoveryId, TrustError> {
    let raw = if v >= ETHEREUM_V_OFFSET { v - ETHEREUM_V_OFFSET } else { v };
    RecoveryId::from_byte(raw).ok_or(TrustError::InvalidSignature)
}
