//! Test helpers shared by the integration tests
//!
//! Signing goes through `k256` directly so the engine is checked against an
//! independent signer rather than against itself.

#![allow(dead_code)]

use chrono::DateTime;
use k256::ecdsa::SigningKey;
use std::path::PathBuf;
use std::sync::Once;
use wallet_info::trust::hasher::keccak256;
use wallet_info::trust::{Address, DappManifest, UncompressedPublicKey};

/// Private key used by the original signing tool's test harness
pub const TEST_SECRET: &str = "fad9c8855b740a0b7ed4c221dbad0f33a83a49cad6b3fe8d5817ac83d38b6a19";

/// Address of [`TEST_SECRET`] in checksum casing
pub const TEST_ADDRESS: &str = "0x96216849c49358B10257cb55b28eA603c874b05E";

pub const ACME_CONTRACT: &str = "0x1111111111111111111111111111111111111111";

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn test_key() -> SigningKey {
    let secret = hex::decode(TEST_SECRET).expect("valid hex");
    SigningKey::from_slice(&secret).expect("valid secp256k1 scalar")
}

/// Address derived from a signing key's public point
pub fn address_of(key: &SigningKey) -> Address {
    let point = key.verifying_key().to_encoded_point(false);
    let bytes: [u8; 65] = point.as_bytes().try_into().expect("uncompressed point");
    Address::from_public_key(&UncompressedPublicKey::from_bytes(bytes))
}

/// Sign a manifest's canonical bytes and store the `0x`-prefixed signature on it
pub fn sign_manifest(manifest: &mut DappManifest, key: &SigningKey) {
    let digest = keccak256(&manifest.signing_bytes().expect("canonical bytes"));
    let (signature, recovery_id) = key
        .sign_prehash_recoverable(&digest)
        .expect("signing a 32-byte digest");

    let mut bytes = signature.to_bytes().to_vec();
    bytes.push(recovery_id.to_byte());
    manifest.signature = format!("0x{}", hex::encode(bytes));
}

/// An unsigned manifest for acme.xyz
pub fn acme_manifest() -> DappManifest {
    DappManifest {
        name: "Acme".to_string(),
        domain: "acme.xyz".to_string(),
        contract_address: ACME_CONTRACT.to_string(),
        timestamp: DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z").expect("valid timestamp"),
        signature: String::new(),
    }
}

/// The acme.xyz manifest signed by the test key
pub fn signed_acme_manifest() -> DappManifest {
    let mut manifest = acme_manifest();
    sign_manifest(&mut manifest, &test_key());
    manifest
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).expect("fixture exists")
}
