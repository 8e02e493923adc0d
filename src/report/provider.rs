//! The seam between report building and the network collaborators

use crate::facts::{DomainRecordInfo, ServiceError, TlsInfo, TransactionSummary};
use crate::trust::DappManifest;

/// Supplies the facts a report needs
///
/// Implementations do the I/O (block explorer, TLS handshake, WHOIS, fetching
/// the dapp file) and map their failures onto [`ServiceError`].
pub trait FactProvider {
    /// Fetch and decode `https://{host}/.well-known/dapp_file`
    fn dapp_file(&self, host: &str) -> Result<DappManifest, ServiceError>;

    /// Address that created `address`; empty when it is not a contract
    fn contract_deployer(&self, address: &str) -> Result<String, ServiceError>;

    fn transactions(&self, address: &str) -> Result<TransactionSummary, ServiceError>;

    /// Whether the block explorer has verified source code for the contract
    fn is_source_verified(&self, address: &str) -> Result<bool, ServiceError>;

    fn tls_info(&self, domain: &str) -> Result<TlsInfo, ServiceError>;

    fn domain_record(&self, host: &str) -> Result<DomainRecordInfo, ServiceError>;
}

impl<P: FactProvider + ?Sized> FactProvider for &P {
    fn dapp_file(&self, host: &str) -> Result<DappManifest, ServiceError> {
        (**self).dapp_file(host)
    }

    fn contract_deployer(&self, address: &str) -> Result<String, ServiceError> {
        (**self).contract_deployer(address)
    }

    fn transactions(&self, address: &str) -> Result<TransactionSummary, ServiceError> {
        (**self).transactions(address)
    }

    fn is_source_verified(&self, address: &str) -> Result<bool, ServiceError> {
        (**self).is_source_verified(address)
    }

    fn tls_info(&self, domain: &str) -> Result<TlsInfo, ServiceError> {
        (**self).tls_info(domain)
    }

    fn domain_record(&self, host: &str) -> Result<DomainRecordInfo, ServiceError> {
        (**self).domain_record(host)
    }
}
