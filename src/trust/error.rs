//! Trust verification error types
//!
//! Every variant is an expected outcome of untrusted input. None of them is
//! fatal: the engine returns them as values next to the signature verdict.

use thiserror::Error;

/// Errors produced while verifying a dapp manifest
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrustError {
    /// The signature could not be decoded or no public key could be recovered from it
    #[error("invalid signature")]
    InvalidSignature,

    /// The manifest does not declare a domain
    #[error("invalid domain")]
    EmptyDomain,

    /// The requested host differs from the domain the manifest was issued for
    #[error("domain mismatch: requested {requested}, dapp file declares {manifest}")]
    DomainMismatch { requested: String, manifest: String },

    /// The manifest does not declare a contract address
    #[error("invalid contract address")]
    EmptyContract,

    /// The requested contract differs from the contract the manifest was issued for
    #[error("contract address mismatch: requested {requested}, dapp file declares {manifest}")]
    ContractMismatch { requested: String, manifest: String },
}

impl TrustError {
    /// Whether this error is a binding failure (host or contract) rather than a signature failure
    pub fn is_binding_error(&self) -> bool {
        !matches!(self, TrustError::InvalidSignature)
    }

    /// Log binding mismatches on the `security` target
    ///
    /// A mismatch means a site published a manifest that claims another
    /// domain or contract, which callers usually want surfaced.
    pub fn log_if_security_critical(&self) {
        match self {
            TrustError::DomainMismatch { .. } | TrustError::ContractMismatch { .. } => {
                tracing::warn!(target: "security", "dapp file binding violation: {}", self);
            }
            _ => {}
        }
    }
}
