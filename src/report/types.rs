//! Report payloads, serialized with the field names clients expect

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// What is known about a site and its dapp file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostReport {
    pub name: String,
    pub timestamp: DateTime<FixedOffset>,

    pub domain: String,

    /// Whether the TLS certificate is inside its validity window
    #[serde(rename = "tls")]
    pub is_tls_valid: bool,
    pub tls_issued_on: DateTime<Utc>,
    pub tls_expires_on: DateTime<Utc>,

    #[serde(rename = "domain_created_on")]
    pub domain_record_created: DateTime<Utc>,
    #[serde(rename = "domain_updated_on")]
    pub domain_record_updated: DateTime<Utc>,
    #[serde(rename = "domain_expired_on")]
    pub domain_record_expires: DateTime<Utc>,

    #[serde(rename = "valid_signature")]
    pub is_signature_valid: bool,
}

/// What is known about a contract and whether the site's dapp file vouches for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractReport {
    pub is_contract: bool,
    pub contract_address: String,
    pub contract_deployer: String,
    #[serde(rename = "contract_tx_count")]
    pub tx_count: usize,
    #[serde(rename = "contract_unique_tx")]
    pub unique_interactions: usize,
    #[serde(rename = "verified_source")]
    pub is_source_verified: bool,

    #[serde(rename = "valid_signature")]
    pub is_signature_valid: bool,
}
