//! Configuration types for Halo session pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the assembled
//! [`PricingConfig`] every calculation is given.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AddOnLineItem, SurchargeKind};

/// Metadata about the business the pricing applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessMetadata {
    /// Short business code (e.g., "halo").
    pub code: String,
    /// The human-readable business name.
    pub name: String,
    /// The version or effective date of the price list.
    pub version: String,
}

/// One row of the duration tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Session length this tier prices.
    pub minutes: u32,
    /// Therapist payout for exactly that length.
    pub payout: Decimal,
}

impl PricingTier {
    /// Returns the effective hourly rate of this tier.
    ///
    /// A zero-minute tier is rejected at load time; it reports zero here.
    pub fn hourly_rate(&self) -> Decimal {
        if self.minutes == 0 {
            return Decimal::ZERO;
        }
        self.payout * Decimal::from(60u32) / Decimal::from(self.minutes)
    }
}

/// Flat surcharges paid for specialised service types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSurcharges {
    /// Deep tissue / sports / lymphatic.
    pub deep_tissue: Decimal,
    /// Advanced bodywork.
    pub advanced_bodywork: Decimal,
}

/// Structure of pricing.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingFile {
    /// Duration tiers, in any order.
    pub tiers: Vec<PricingTier>,
    /// Service-type surcharges.
    pub surcharges: ServiceSurcharges,
    /// Flat bonus when the client leaves a review.
    pub review_bonus: Decimal,
}

/// An entry of the add-on catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnCatalogEntry {
    /// Catalog identifier (e.g., "cupping").
    pub id: String,
    /// Name shown in the add-on picker.
    pub name: String,
    /// Therapist payout for the add-on.
    pub price: Decimal,
    /// Set when picking this entry charges a service surcharge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surcharge_code: Option<SurchargeKind>,
}

/// Structure of addons.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnCatalog {
    /// Catalog entries in display order.
    pub add_ons: Vec<AddOnCatalogEntry>,
}

/// The complete, immutable pricing configuration.
///
/// Built once (from YAML or [`PricingConfig::halo_default`]) and shared
/// read-only by every calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    metadata: BusinessMetadata,
    /// Sorted by minutes, ascending.
    tiers: Vec<PricingTier>,
    surcharges: ServiceSurcharges,
    review_bonus: Decimal,
    catalog: Vec<AddOnCatalogEntry>,
}

impl PricingConfig {
    /// Assembles a configuration, validating every amount.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPricing` when a tier has zero minutes, two tiers
    /// share a length, or any amount is negative.
    pub fn new(
        metadata: BusinessMetadata,
        pricing: PricingFile,
        catalog: Vec<AddOnCatalogEntry>,
    ) -> EngineResult<Self> {
        let mut tiers = pricing.tiers;
        tiers.sort_by_key(|tier| tier.minutes);

        for tier in &tiers {
            if tier.minutes == 0 {
                return Err(invalid("tier length must be greater than zero minutes"));
            }
            if tier.payout.is_sign_negative() {
                return Err(invalid(format!(
                    "payout for the {}-minute tier is negative",
                    tier.minutes
                )));
            }
        }
        if let Some(pair) = tiers.windows(2).find(|w| w[0].minutes == w[1].minutes) {
            return Err(invalid(format!(
                "duplicate tier for {} minutes",
                pair[0].minutes
            )));
        }

        let surcharges = pricing.surcharges;
        if surcharges.deep_tissue.is_sign_negative()
            || surcharges.advanced_bodywork.is_sign_negative()
        {
            return Err(invalid("service surcharges must not be negative"));
        }
        if pricing.review_bonus.is_sign_negative() {
            return Err(invalid("review bonus must not be negative"));
        }
        if let Some(entry) = catalog.iter().find(|e| e.price.is_sign_negative()) {
            return Err(invalid(format!("add-on '{}' has a negative price", entry.id)));
        }

        Ok(Self {
            metadata,
            tiers,
            surcharges,
            review_bonus: pricing.review_bonus,
            catalog,
        })
    }

    /// The Halo Therapies price list, identical to `config/halo/`.
    pub fn halo_default() -> Self {
        let money = |cents: i64| Decimal::new(cents, 2);
        let entry = |id: &str, name: &str, cents: i64| AddOnCatalogEntry {
            id: id.to_string(),
            name: name.to_string(),
            price: money(cents),
            surcharge_code: SurchargeKind::from_code(id),
        };

        Self {
            metadata: BusinessMetadata {
                code: "halo".to_string(),
                name: "Halo Therapies".to_string(),
                version: "2026-01-01".to_string(),
            },
            tiers: vec![
                PricingTier {
                    minutes: 60,
                    payout: money(5000),
                },
                PricingTier {
                    minutes: 90,
                    payout: money(7000),
                },
                PricingTier {
                    minutes: 120,
                    payout: money(9500),
                },
            ],
            surcharges: ServiceSurcharges {
                deep_tissue: money(750),
                advanced_bodywork: money(1250),
            },
            review_bonus: money(500),
            catalog: vec![
                entry("advanced-bodywork", "Advanced Bodywork", 1250),
                entry("argon-eye", "Argon Eye Treatment", 1000),
                entry("balance-bomb", "Balance Bomb", 500),
                entry("cupping", "Cupping", 1250),
                entry("deep-tissue", "Deep Tissue / Sports / Lymphatic", 750),
                entry("dry-brushing-12.5", "Dry Brushing ($12.50)", 1250),
                entry("dry-brushing-25", "Dry Brushing ($25)", 2500),
                entry("dry-brushing-50", "Dry Brushing ($50)", 5000),
                entry("extra-15-min", "Extra 15 Minutes", 1250),
                entry("hot-salt-stones", "Hot Salt Stones", 1250),
                entry("peppermint-rosemary", "Peppermint Rosemary Scalp & Foot", 1000),
                entry("spellbound", "Spellbound (10% commission)", 300),
                entry("turmeric-face", "Turmeric Face Oil", 1000),
                entry("vetiver-guasha", "Vetiver Guasha Treatment", 1000),
            ],
        }
    }

    /// Returns the business metadata.
    pub fn metadata(&self) -> &BusinessMetadata {
        &self.metadata
    }

    /// Returns the tier table, sorted by minutes ascending.
    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    /// Returns the surcharge for a specialised service type.
    pub fn surcharge_for(&self, kind: SurchargeKind) -> Decimal {
        match kind {
            SurchargeKind::DeepTissue => self.surcharges.deep_tissue,
            SurchargeKind::AdvancedBodywork => self.surcharges.advanced_bodywork,
        }
    }

    /// Returns the flat review bonus.
    pub fn review_bonus(&self) -> Decimal {
        self.review_bonus
    }

    /// Returns the add-on catalog in display order.
    pub fn catalog(&self) -> &[AddOnCatalogEntry] {
        &self.catalog
    }

    /// Looks up a catalog entry by id.
    pub fn add_on(&self, id: &str) -> Option<&AddOnCatalogEntry> {
        self.catalog.iter().find(|entry| entry.id == id)
    }

    /// Builds the line item a therapist gets by picking catalog entry `id`.
    ///
    /// `line_id` identifies the line on the session; entries that carry a
    /// surcharge code become [`AddOnLineItem::Surcharge`].
    pub fn catalog_line_item(&self, id: &str, line_id: &str) -> Option<AddOnLineItem> {
        self.add_on(id).map(|entry| match entry.surcharge_code {
            Some(kind) => AddOnLineItem::surcharge(line_id, &entry.name, kind, entry.price),
            None => AddOnLineItem::generic(line_id, &entry.name, entry.price),
        })
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidPricing {
        message: message.into(),
    }
}
