//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pricing
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};

use super::types::{AddOnCatalog, BusinessMetadata, PricingConfig, PricingFile};

/// Loads and provides access to pricing configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/halo/
/// ├── business.yaml   # Business metadata
/// ├── pricing.yaml    # Tier table, surcharges and review bonus
/// └── addons.yaml     # Add-on catalog
/// ```
///
/// # Example
///
/// ```no_run
/// use halo_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/halo").unwrap();
/// println!("Loaded price list for {}", loader.business().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PricingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` when a required file is missing
    /// - `ConfigParseError` when a file contains invalid YAML
    /// - `InvalidPricing` when the parsed values fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<BusinessMetadata>(&path.join("business.yaml"))?;
        let pricing = Self::load_yaml::<PricingFile>(&path.join("pricing.yaml"))?;
        let catalog = Self::load_yaml::<AddOnCatalog>(&path.join("addons.yaml"))?;

        let config = PricingConfig::new(metadata, pricing, catalog.add_ons)?;

        Ok(Self { config })
    }

    /// Loads the pricing configuration, using the built-in Halo price list
    /// when the directory has no configuration files.
    ///
    /// # Errors
    ///
    /// `ConfigParseError` and `InvalidPricing` are returned as from
    /// [`ConfigLoader::load`]; a broken price list never falls back.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<PricingConfig> {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(loader) => {
                info!(
                    config_dir = %path.display(),
                    version = %loader.business().version,
                    "Loaded pricing configuration"
                );
                Ok(loader.into_config())
            }
            Err(EngineError::ConfigNotFound { path: missing }) => {
                warn!(missing = %missing, "Config file missing, using built-in Halo pricing");
                Ok(PricingConfig::halo_default())
            }
            Err(err) => Err(err),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Consumes the loader, returning the pricing configuration.
    pub fn into_config(self) -> PricingConfig {
        self.config
    }

    /// Returns the business metadata.
    pub fn business(&self) -> &BusinessMetadata {
        self.config.metadata()
    }
}
