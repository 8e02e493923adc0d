//! Trust engine - decides whether a dapp manifest is authentic and bound to the request
//!
//! Two checks run on every call and are reported together:
//!
//! 1. **Signature**: the manifest must be signed by the contract's deployer.
//!    This verdict is always computed, whatever the binding checks say.
//! 2. **Binding**: the requested host (and, in contract mode, the requested
//!    contract) must match what the manifest declares. Host is checked first
//!    and the first failing check ends the binding chain.

use crate::trust::address::{Address, UncompressedPublicKey};
use crate::trust::binding::{validate_contract, validate_host};
use crate::trust::error::TrustError;
use crate::trust::hasher::keccak256;
use crate::trust::manifest::{DappManifest, VerificationContext};
use crate::trust::recovery::{Secp256k1Recoverer, SignatureRecoverer};
use tracing::debug;

/// Identity recovered from a manifest signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveredIdentity {
    pub public_key: UncompressedPublicKey,
    pub address: Address,
}

/// Result of one validation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Whether the manifest was signed by the claimed deployer
    pub signature_valid: bool,

    /// First binding failure, if any
    pub error: Option<TrustError>,
}

impl ValidationOutcome {
    /// Signature verified and every binding check passed
    pub fn is_trusted(&self) -> bool {
        self.signature_valid && self.error.is_none()
    }

    pub fn into_parts(self) -> (bool, Option<TrustError>) {
        (self.signature_valid, self.error)
    }
}

/// Stateless verifier for dapp manifests
#[derive(Debug, Clone, Default)]
pub struct TrustEngine<R = Secp256k1Recoverer> {
    recoverer: R,
}

impl TrustEngine<Secp256k1Recoverer> {
    pub fn new() -> Self {
        TrustEngine {
            recoverer: Secp256k1Recoverer,
        }
    }
}

impl<R: SignatureRecoverer> TrustEngine<R> {
    /// Create an engine around a specific recoverer
    pub fn with_recoverer(recoverer: R) -> Self {
        TrustEngine { recoverer }
    }

    pub fn recoverer(&self) -> &R {
        &self.recoverer
    }

    /// Verify the signature and the host binding
    pub fn validate_host_only(
        &self,
        manifest: &DappManifest,
        host: &str,
        deployer: &str,
    ) -> ValidationOutcome {
        let signature_valid = self.is_signature_valid(manifest, deployer);

        ValidationOutcome {
            signature_valid,
            error: validate_host(&manifest.domain, host).err(),
        }
    }

    /// Verify the signature, the host binding and then the contract binding
    pub fn validate(
        &self,
        manifest: &DappManifest,
        host: &str,
        contract: &str,
        deployer: &str,
    ) -> ValidationOutcome {
        let signature_valid = self.is_signature_valid(manifest, deployer);

        let error = validate_host(&manifest.domain, host)
            .and_then(|()| validate_contract(&manifest.contract_address, contract))
            .err();

        ValidationOutcome {
            signature_valid,
            error,
        }
    }

    /// Run the mode the context asks for: contract mode when it names a contract
    pub fn verify(
        &self,
        manifest: &DappManifest,
        context: &VerificationContext,
    ) -> ValidationOutcome {
        match &context.requested_contract {
            Some(contract) => self.validate(
                manifest,
                &context.requested_host,
                contract,
                &context.claimed_deployer,
            ),
            None => self.validate_host_only(
                manifest,
                &context.requested_host,
                &context.claimed_deployer,
            ),
        }
    }

    /// Whether the manifest was signed by `deployer`
    ///
    /// Never fails: malformed signatures and an empty or malformed deployer
    /// all yield `false`.
    pub fn is_signature_valid(&self, manifest: &DappManifest, deployer: &str) -> bool {
        match self.recover_signer(manifest) {
            Ok(identity) => {
                let valid = identity.address.matches(deployer);
                debug!(
                    signer = %identity.address,
                    deployer,
                    valid,
                    "Dapp file signature checked"
                );
                valid
            }
            Err(e) => {
                debug!("Dapp file signature rejected: {}", e);
                false
            }
        }
    }

    /// Recover the key and address that signed the manifest
    pub fn recover_signer(&self, manifest: &DappManifest) -> Result<RecoveredIdentity, TrustError> {
        // Nothing to recover from; the recoverer must not see empty input
        if !manifest.is_signed() {
            return Err(TrustError::InvalidSignature);
        }

        let signature = decode_signature(&manifest.signature)?;
        let message = manifest.signing_bytes().map_err(|e| {
            debug!("Cannot canonicalize dapp file: {}", e);
            TrustError::InvalidSignature
        })?;
        let digest = keccak256(&message);
        let public_key = self.recoverer.recover(&digest, &signature)?;

        Ok(RecoveredIdentity {
            public_key,
            address: Address::from_public_key(&public_key),
        })
    }
}

fn decode_signature(signature: &str) -> Result<Vec<u8>, TrustError> {
    let digits = signature
        .strip_prefix("0x")
        .or_else(|| signature.strip_prefix("0X"))
        .unwrap_or(signature);

    if digits.is_empty() {
        return Err(TrustError::InvalidSignature);
    }

    hex::decode(digits).map_err(|_| TrustError::InvalidSignature)
}
