use crate::error::config::ConfigError;

use common::{ApiKey, ErrorLocation};

use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

/// User configuration: the single recognized field is the QRNG API key.
///
/// Loaded fresh on every generation request and never written back, so there
/// is no save path and no versioning.
#[derive(Debug, Deserialize)]
pub struct QuantumPassConfig {
    #[serde(default)]
    api_key: ApiKey,
}

impl QuantumPassConfig {
    /// Load and validate the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - the file is missing or unreadable ([`ConfigError::ReadError`])
    /// - the contents are not well-formed JSON ([`ConfigError::ParseError`])
    /// - the `api_key` field is absent or empty ([`ConfigError::MissingApiKey`])
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            warn!("Failed to read config file {}: {}", path.display(), e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let config: QuantumPassConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON {}: {}", path.display(), e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        if config.api_key.is_empty() {
            warn!("Config {} has no api_key", path.display());
            return Err(ConfigError::MissingApiKey {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
            });
        }

        info!(
            "Config loaded from {} (api key: {} bytes)",
            path.display(),
            config.api_key.len()
        );
        Ok(config)
    }

    /// The configured API key.
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}
