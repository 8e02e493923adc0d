use super::types::ServiceConfig;
use super::CONFIG_FILE_NAME;
use crate::{Result, WalletInfoError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use url::Url;

/// Configuration loader for `config.yml`
pub struct ConfigLoader {
    /// Enable strict validation
    strict: bool,
}

impl ConfigLoader {
    /// Create new config loader
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Enable strict validation mode
    pub fn with_strict_validation(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Load configuration from a YAML file
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<ServiceConfig> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            WalletInfoError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        self.load_from_str(&contents).map_err(|e| {
            WalletInfoError::Config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Parse and validate configuration from YAML text
    pub fn load_from_str(&self, contents: &str) -> Result<ServiceConfig> {
        let config: ServiceConfig = serde_yaml_ng::from_str(contents)?;
        self.validate_config(&config)?;
        Ok(config)
    }

    /// Load the first configuration found: project directory first, then the
    /// user config directory
    pub fn load_hierarchy<P: AsRef<Path>>(&self, project_root: P) -> Result<Option<ServiceConfig>> {
        for candidate in Self::candidate_paths(project_root.as_ref()) {
            if !candidate.exists() {
                continue;
            }

            match self.load_file(&candidate) {
                Ok(config) => {
                    debug!("Loaded configuration from {}", candidate.display());
                    return Ok(Some(config));
                }
                Err(e) => {
                    warn!("Failed to load config file {}: {}", candidate.display(), e);
                    // Fall through to the next location
                }
            }
        }

        Ok(None)
    }

    /// Locations searched by [`ConfigLoader::load_hierarchy`], in priority order
    pub fn candidate_paths(project_root: &Path) -> Vec<PathBuf> {
        let mut paths = vec![project_root.join(CONFIG_FILE_NAME)];

        if let Some(base_dirs) = directories::BaseDirs::new() {
            paths.push(base_dirs.config_dir().join("wallet-info").join(CONFIG_FILE_NAME));
        }

        paths
    }

    fn validate_config(&self, config: &ServiceConfig) -> Result<()> {
        validate_endpoint("etherscan_endpoint", &config.etherscan_endpoint)?;

        if let Some(solscan) = &config.solscan_endpoint {
            validate_endpoint("solscan_endpoint", solscan)?;
        }

        if self.strict && config.etherscan_api_key.trim().is_empty() {
            return Err(WalletInfoError::Config(
                "etherscan_api_key must be set".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_endpoint(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| {
        WalletInfoError::Config(format!("{field} is not a valid URL ({value}): {e}"))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(WalletInfoError::Config(format!(
            "{field} must use http or https, got {other}"
        ))),
    }
}
