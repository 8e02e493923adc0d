//! Trust verification for dapp manifests
//!
//! Answers whether a site's published dapp file genuinely belongs to the
//! contract it names: the manifest must be signed by the contract's deployer,
//! and the host (and optionally the contract) asked about must match what the
//! manifest declares.
//!
//! Pipeline: canonical signing bytes -> Keccak-256 -> secp256k1 public key
//! recovery -> address derivation -> deployer comparison, followed by the
//! host and contract binding checks.

pub mod address;
pub mod binding;
pub mod error;
pub mod hasher;
pub mod manifest;
pub mod recovery;
pub mod verifier;

pub use address::{Address, UncompressedPublicKey};
pub use error::TrustError;
pub use manifest::{DappManifest, VerificationContext};
pub use recovery::{Secp256k1Recoverer, SignatureRecoverer};
pub use verifier::{RecoveredIdentity, TrustEngine, ValidationOutcome};
