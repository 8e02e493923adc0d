use serde::{Deserialize, Serialize};

/// Settings loaded from `config.yml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Enable verbose debug logging
    #[serde(default)]
    pub debug: bool,

    /// Etherscan-compatible API endpoint used to resolve deployers and transactions
    pub etherscan_endpoint: String,

    /// API key sent with every block explorer request
    #[serde(default)]
    pub etherscan_api_key: String,

    /// Solscan endpoint, for Solana lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solscan_endpoint: Option<String>,

    /// Explicit `tracing` filter directive, overriding `debug`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl ServiceConfig {
    /// The `tracing` filter directive this configuration asks for
    pub fn log_directive(&self) -> &str {
        match &self.log_filter {
            Some(filter) => filter,
            None if self.debug => "debug",
            None => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ServiceConfig {
        ServiceConfig {
            debug: false,
            etherscan_endpoint: "https://api.etherscan.io/api".to_string(),
            etherscan_api_key: "KEY".to_string(),
            solscan_endpoint: None,
            log_filter: None,
        }
    }

    #[test]
    fn test_log_directive() {
        let mut cfg = config();
        assert_eq!(cfg.log_directive(), "info");

        cfg.debug = true;
        assert_eq!(cfg.log_directive(), "debug");

        cfg.log_filter = Some("wallet_info=trace".to_string());
        assert_eq!(cfg.log_directive(), "wallet_info=trace");
    }
}
