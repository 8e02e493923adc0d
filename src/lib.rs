pub mod config;
pub mod error;
pub mod facts;
pub mod logging;
pub mod report;
pub mod trust;

pub use error::{Result, WalletInfoError};
pub use trust::{DappManifest, TrustEngine, ValidationOutcome, VerificationContext};
