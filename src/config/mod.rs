//! Pricing configuration for the payroll engine.
//!
//! This module loads the Halo price list from YAML files: the duration tier
//! table, service surcharges, the review bonus and the add-on catalog.
//!
//! # Example
//!
//! ```no_run
//! use halo_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/halo").unwrap();
//! println!("Loaded price list: {}", config.business().version);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AddOnCatalog, AddOnCatalogEntry, BusinessMetadata, PricingConfig, PricingFile, PricingTier,
    ServiceSurcharges,
};
