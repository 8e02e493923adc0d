//! Facts gathered about a site and a contract by external collaborators
//!
//! Fetching (block explorer, TLS handshake, WHOIS) happens outside this
//! crate. What lives here are the value types those lookups produce and the
//! pure computations the reports need on top of them.

pub mod chain;
pub mod domain;
pub mod error;
pub mod host;
pub mod tls;

pub use chain::{Transaction, TransactionSummary};
pub use domain::DomainRecordInfo;
pub use error::ServiceError;
pub use host::{get_host, tld_plus_one};
pub use tls::TlsInfo;
