//! Report assembly
//!
//! Each step asks the [`FactProvider`] for one fact; the first failure ends
//! the report. Binding failures are returned as [`ServiceError::Validation`]
//! so the signature verdict is not lost.

use crate::facts::{get_host, ServiceError};
use crate::report::provider::FactProvider;
use crate::report::types::{ContractReport, HostReport};
use crate::trust::{
    DappManifest, Secp256k1Recoverer, SignatureRecoverer, TrustEngine, ValidationOutcome,
};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Builds host and contract reports from a fact provider and a trust engine
pub struct ReportBuilder<P, R = Secp256k1Recoverer> {
    provider: P,
    engine: TrustEngine<R>,
}

impl<P: FactProvider> ReportBuilder<P, Secp256k1Recoverer> {
    pub fn new(provider: P) -> Self {
        ReportBuilder {
            provider,
            engine: TrustEngine::new(),
        }
    }
}

impl<P: FactProvider, R: SignatureRecoverer> ReportBuilder<P, R> {
    pub fn with_engine(provider: P, engine: TrustEngine<R>) -> Self {
        ReportBuilder { provider, engine }
    }

    pub fn engine(&self) -> &TrustEngine<R> {
        &self.engine
    }

    /// Report on the site behind `url`, judging TLS validity at `now`
    pub fn host_report(&self, url: &str, now: DateTime<Utc>) -> Result<HostReport, ServiceError> {
        let host = require_host(url)?;
        let manifest = self.fetch_manifest(&host)?;

        let deployer = self
            .provider
            .contract_deployer(&manifest.contract_address)
            .inspect_err(|e| info!("failed to get contract deployer: {}", e))?;

        let outcome = self.engine.validate_host_only(&manifest, &host, &deployer);
        let signature_valid = into_verdict(outcome)?;

        let tls = self
            .provider
            .tls_info(&manifest.domain)
            .inspect_err(|e| info!("failed to get tls info: {}", e))?;

        let record = self
            .provider
            .domain_record(&host)
            .inspect_err(|e| info!("failed to get domain record info: {}", e))?;

        Ok(HostReport {
            name: manifest.name,
            timestamp: manifest.timestamp,
            domain: manifest.domain,
            is_tls_valid: tls.is_valid_at(now),
            tls_issued_on: tls.issued_on,
            tls_expires_on: tls.expires_on,
            domain_record_created: record.created,
            domain_record_updated: record.updated,
            domain_record_expires: record.expires,
            is_signature_valid: signature_valid,
        })
    }

    /// Report on `contract` as vouched for by the site behind `url`
    pub fn contract_report(
        &self,
        url: &str,
        contract: &str,
    ) -> Result<ContractReport, ServiceError> {
        let host = require_host(url)?;
        let manifest = self.fetch_manifest(&host)?;

        let deployer = self
            .provider
            .contract_deployer(contract)
            .inspect_err(|e| info!("failed to get contract deployer: {}", e))?;

        // Externally owned accounts have no deployer and nothing to vouch for
        let is_contract = !deployer.is_empty();
        let signature_valid = if is_contract {
            into_verdict(self.engine.validate(&manifest, &host, contract, &deployer))?
        } else {
            info!(contract, "address has no deployer, skipping dapp file validation");
            false
        };

        let transactions = self
            .provider
            .transactions(contract)
            .inspect_err(|e| info!("failed to get contract transactions: {}", e))?;

        let is_source_verified = self
            .provider
            .is_source_verified(contract)
            .inspect_err(|e| info!("failed to get contract verified status: {}", e))?;

        Ok(ContractReport {
            is_contract,
            contract_address: contract.to_string(),
            contract_deployer: deployer,
            tx_count: transactions.count,
            unique_interactions: transactions.unique,
            is_source_verified,
            is_signature_valid: signature_valid,
        })
    }

    fn fetch_manifest(&self, host: &str) -> Result<DappManifest, ServiceError> {
        info!(host, "reading dapp file");
        self.provider
            .dapp_file(host)
            .inspect_err(|e| info!("failed to get dapp file: {}", e))
    }
}

fn require_host(url: &str) -> Result<String, ServiceError> {
    get_host(url).ok_or_else(|| ServiceError::InvalidUrl(url.to_string()))
}

fn into_verdict(outcome: ValidationOutcome) -> Result<bool, ServiceError> {
    match outcome.error {
        None => Ok(outcome.signature_valid),
        Some(source) => {
            source.log_if_security_critical();
            warn!("failed to validate dapp file: {}", source);
            Err(ServiceError::Validation {
                source,
                signature_valid: outcome.signature_valid,
            })
        }
    }
}
