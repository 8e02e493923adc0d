//! Errors reported by the collaborators that gather facts

use crate::trust::TrustError;
use thiserror::Error;

/// Failures surfaced to the client of a report
///
/// Messages are deliberately generic; details go to the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("failed to process dapp_file")]
    DappFile,

    #[error("failed to get domain information")]
    WhoIsLookup,

    #[error("failed to parse domain information")]
    WhoIsParsing,

    #[error("failed to get blockchain information")]
    Blockchain,

    #[error("failed to get tls information: {0}")]
    Tls(String),

    #[error("cannot extract a host from {0:?}")]
    InvalidUrl(String),

    /// A binding check failed; the signature verdict is kept alongside it
    #[error("{source}")]
    Validation {
        #[source]
        source: TrustError,
        signature_valid: bool,
    },
}

impl ServiceError {
    /// The signature verdict carried by a validation failure
    pub fn signature_valid(&self) -> Option<bool> {
        match self {
            ServiceError::Validation { signature_valid, .. } => Some(*signature_valid),
            _ => None,
        }
    }
}
