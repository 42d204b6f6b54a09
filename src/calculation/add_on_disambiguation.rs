//! Add-on bucketing.
//!
//! Surcharge entries made through the add-on picker are paid into the same
//! bucket as the matching service surcharge; everything else is a generic
//! add-on. Nothing is deduplicated: a deep tissue service with a deep
//! tissue add-on pays the surcharge twice.

use rust_decimal::Decimal;

use crate::models::{AddOnLineItem, AuditStep, SurchargeKind};

/// The payout bucket an add-on is credited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOnBucket {
    /// Deep-tissue surcharge bucket.
    DeepTissue,
    /// Advanced-bodywork surcharge bucket.
    AdvancedBodywork,
    /// Other add-ons.
    Other,
}

impl AddOnBucket {
    /// Returns the bucket for an add-on line.
    pub fn for_add_on(add_on: &AddOnLineItem) -> Self {
        match add_on {
            AddOnLineItem::Surcharge {
                kind: SurchargeKind::DeepTissue,
                ..
            } => AddOnBucket::DeepTissue,
            AddOnLineItem::Surcharge {
                kind: SurchargeKind::AdvancedBodywork,
                ..
            } => AddOnBucket::AdvancedBodywork,
            AddOnLineItem::Generic { .. } => AddOnBucket::Other,
        }
    }
}

/// Per-bucket add-on totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddOnTotals {
    /// Deep-tissue surcharge entries.
    pub deep_tissue: Decimal,
    /// Advanced-bodywork surcharge entries.
    pub advanced_bodywork: Decimal,
    /// Generic add-ons.
    pub other: Decimal,
}

impl AddOnTotals {
    /// Sum of all three buckets.
    pub fn total(&self) -> Decimal {
        self.deep_tissue + self.advanced_bodywork + self.other
    }
}

/// The result of bucketing a session's add-ons, including the audit step.
#[derive(Debug, Clone)]
pub struct AddOnTotalsResult {
    /// The bucket totals.
    pub totals: AddOnTotals,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums add-on prices into their buckets.
///
/// # Examples
///
/// ```
/// use halo_payroll::calculation::partition_add_ons;
/// use halo_payroll::models::{AddOnLineItem, SurchargeKind};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let add_ons = vec![
///     AddOnLineItem::generic("a1", "Cupping", Decimal::from_str("12.50").unwrap()),
///     AddOnLineItem::surcharge(
///         "a2",
///         "Deep Tissue",
///         SurchargeKind::DeepTissue,
///         Decimal::from_str("7.50").unwrap(),
///     ),
/// ];
///
/// let totals = partition_add_ons(&add_ons);
/// assert_eq!(totals.other, Decimal::from_str("12.50").unwrap());
/// assert_eq!(totals.deep_tissue, Decimal::from_str("7.50").unwrap());
/// ```
pub fn partition_add_ons(add_ons: &[AddOnLineItem]) -> AddOnTotals {
    let mut totals = AddOnTotals::default();
    for add_on in add_ons {
        let price = add_on.price();
        match AddOnBucket::for_add_on(add_on) {
            AddOnBucket::DeepTissue => totals.deep_tissue += price,
            AddOnBucket::AdvancedBodywork => totals.advanced_bodywork += price,
            AddOnBucket::Other => totals.other += price,
        }
    }
    totals
}

/// Buckets a session's add-ons and records the audit step.
pub fn calculate_add_on_totals(add_ons: &[AddOnLineItem], step_number: u32) -> AddOnTotalsResult {
    let totals = partition_add_ons(add_ons);

    let surcharge_count = add_ons
        .iter()
        .filter(|a| a.surcharge_kind().is_some())
        .count();

    let reasoning = if add_ons.is_empty() {
        "No add-ons".to_string()
    } else {
        format!(
            "{} add-on(s), {} paid as service surcharges: deep tissue ${}, advanced bodywork ${}, other ${}",
            add_ons.len(),
            surcharge_count,
            totals.deep_tissue.normalize(),
            totals.advanced_bodywork.normalize(),
            totals.other.normalize()
        )
    };

    AddOnTotalsResult {
        totals,
        audit_step: AuditStep {
            step_number,
            rule_id: "add_on_bucketing".to_string(),
            rule_name: "Add-On Bucketing".to_string(),
            input: serde_json::json!({
                "add_ons": add_ons
                    .iter()
                    .map(|a| serde_json::json!({
                        "id": a.id(),
                        "price": a.price().to_string(),
                        "surcharge": a.surcharge_kind().map(SurchargeKind::code)
                    }))
                    .collect::<Vec<_>>()
            }),
            output: serde_json::json!({
                "deep_tissue": totals.deep_tissue.to_string(),
                "advanced_bodywork": totals.advanced_bodywork.to_string(),
                "other": totals.other.to_string()
            }),
            reasoning,
        },
    }
}
