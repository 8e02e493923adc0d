//! Binding checks between a request and the manifest it resolved to

use crate::trust::error::TrustError;
use tracing::debug;

/// Check that the requested host is the domain the manifest was issued for
///
/// Hostnames are compared exactly; callers normalize them beforehand.
pub fn validate_host(manifest_domain: &str, requested_host: &str) -> Result<(), TrustError> {
    if manifest_domain.is_empty() {
        debug!("Dapp file declares no domain");
        return Err(TrustError::EmptyDomain);
    }

    if requested_host != manifest_domain {
        debug!(
            requested = requested_host,
            dapp_file = manifest_domain,
            "Dapp file domain mismatch"
        );
        return Err(TrustError::DomainMismatch {
            requested: requested_host.to_string(),
            manifest: manifest_domain.to_string(),
        });
    }

    Ok(())
}

/// Check that the requested contract is the contract the manifest was issued for
///
/// Hex addresses may differ in checksum casing, so the comparison ignores ASCII case.
pub fn validate_contract(
    manifest_contract: &str,
    requested_contract: &str,
) -> Result<(), TrustError> {
    if manifest_contract.is_empty() {
        debug!("Dapp file declares no contract address");
        return Err(TrustError::EmptyContract);
    }

    if !requested_contract.eq_ignore_ascii_case(manifest_contract) {
        debug!(
            requested = requested_contract,
            dapp_file = manifest_contract,
            "Dapp file contract address mismatch"
        );
        return Err(TrustError::ContractMismatch {
            requested: requested_contract.to_string(),
            manifest: manifest_contract.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_host() {
        assert_eq!(validate_host("foo.com", "foo.com"), Ok(()));
        assert_eq!(validate_host("", "foo.com"), Err(TrustError::EmptyDomain));
        assert_eq!(validate_host("", ""), Err(TrustError::EmptyDomain));
        assert!(matches!(
            validate_host("foo.com", "bar.com"),
            Err(TrustError::DomainMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_host_is_case_sensitive() {
        assert!(matches!(
            validate_host("foo.com", "FOO.com"),
            Err(TrustError::DomainMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_host_rejects_subdomain() {
        assert!(validate_host("foo.com", "app.foo.com").is_err());
    }

    #[test]
    fn test_validate_contract_ignores_case() {
        assert_eq!(
            validate_contract(
                "0xABCDEF0123456789ABCDEF0123456789ABCDEF01",
                "0xabcdef0123456789abcdef0123456789abcdef01"
            ),
            Ok(())
        );
    }

    #[test]
    fn test_validate_contract_mismatch() {
        let result = validate_contract(
            "0xABCDEF0123456789ABCDEF0123456789ABCDEF01",
            "0xdef0000000000000000000000000000000000000",
        );
        assert_eq!(
            result,
            Err(TrustError::ContractMismatch {
                requested: "0xdef0000000000000000000000000000000000000".to_string(),
                manifest: "0xABCDEF0123456789ABCDEF0123456789ABCDEF01".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_contract_empty() {
        assert_eq!(validate_contract("", "0xabc"), Err(TrustError::EmptyContract));
    }
}
