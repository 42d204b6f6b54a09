//! Total payout calculation.
//!
//! This module combines the individual pricing rules into the payout for a
//! whole session:
//!
//! 1. base pay per service from the tier table
//! 2. a service-type surcharge per service, credited to its own bucket
//! 3. add-ons bucketed as surcharges or generic add-ons
//! 4. the review bonus
//! 5. tips, passed through in full
//! 6. the grand total as the exact sum of the six buckets
//!
//! The calculation never fails; malformed input contributes zero.

use std::time::Instant;

use rust_decimal::Decimal;

use crate::config::PricingConfig;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, PayoutBreakdown, SessionInputs, SurchargeKind,
};

use super::add_on_disambiguation::{calculate_add_on_totals, partition_add_ons};
use super::review_bonus::{calculate_review_bonus, review_bonus_amount};
use super::service_surcharge::{calculate_service_surcharge, service_surcharge_amount};
use super::tier_resolver::{TierMatch, calculate_base_pay, resolve_base_pay};

/// Warning code for a duration that is not on the tier table.
pub const OFF_TIER_DURATION: &str = "OFF_TIER_DURATION";

/// Warning code for a service type the price list does not know.
pub const UNKNOWN_SERVICE_TYPE: &str = "UNKNOWN_SERVICE_TYPE";

/// A payout breakdown together with the audit trace that produced it.
#[derive(Debug, Clone)]
pub struct PayoutCalculation {
    /// The payout breakdown.
    pub breakdown: PayoutBreakdown,
    /// Ordered audit steps and warnings.
    pub audit_trace: AuditTrace,
}

/// Calculates the payout breakdown for one session.
///
/// # Examples
///
/// ```
/// use halo_payroll::calculation::calculate_payout;
/// use halo_payroll::config::PricingConfig;
/// use halo_payroll::models::{AddOnLineItem, ServiceLineItem, ServiceType, SessionInputs};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// let inputs = SessionInputs {
///     services: vec![ServiceLineItem::new(ServiceType::AdvancedBodywork, 90)],
///     add_ons: vec![AddOnLineItem::generic("a1", "Cupping", dec("12.50"))],
///     tip_amount: dec("20.00"),
///     client_left_review: true,
/// };
///
/// let breakdown = calculate_payout(&inputs, &PricingConfig::halo_default());
/// assert_eq!(breakdown.base_pay, dec("70.00"));
/// assert_eq!(breakdown.advanced_bodywork_surcharge, dec("12.50"));
/// assert_eq!(breakdown.other_add_ons_total, dec("12.50"));
/// assert_eq!(breakdown.review_bonus, dec("5.00"));
/// assert_eq!(breakdown.tips_total, dec("20.00"));
/// assert_eq!(breakdown.grand_total, dec("120.00"));
/// ```
pub fn calculate_payout(inputs: &SessionInputs, pricing: &PricingConfig) -> PayoutBreakdown {
    let mut breakdown = PayoutBreakdown::default();

    for service in &inputs.services {
        breakdown.base_pay += resolve_base_pay(service.duration_minutes, pricing);
        if let Some(kind) = service.service_type.surcharge_kind() {
            credit_surcharge(
                &mut breakdown,
                kind,
                service_surcharge_amount(&service.service_type, pricing),
            );
        }
    }

    let add_ons = partition_add_ons(&inputs.add_ons);
    breakdown.deep_tissue_surcharge += add_ons.deep_tissue;
    breakdown.advanced_bodywork_surcharge += add_ons.advanced_bodywork;
    breakdown.other_add_ons_total += add_ons.other;

    breakdown.review_bonus = review_bonus_amount(inputs.client_left_review, pricing);
    breakdown.tips_total = inputs.tip_amount;
    breakdown.grand_total = breakdown.components_sum();

    breakdown
}

/// Calculates the payout breakdown and records every rule application.
///
/// Returns the same breakdown as [`calculate_payout`]. Audit steps are
/// numbered from 1 in the order the rules ran: base pay and surcharge for
/// each service, add-on bucketing, review bonus, tips, grand total.
pub fn calculate_payout_traced(
    inputs: &SessionInputs,
    pricing: &PricingConfig,
) -> PayoutCalculation {
    let start_time = Instant::now();
    let mut breakdown = PayoutBreakdown::default();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    for service in &inputs.services {
        let base = calculate_base_pay(service, pricing, step_number);
        breakdown.base_pay += base.amount;
        steps.push(base.audit_step);
        step_number += 1;

        if base.resolution.match_kind == TierMatch::Nearest {
            warnings.push(AuditWarning {
                code: OFF_TIER_DURATION.to_string(),
                message: format!(
                    "{} minutes is not a priced tier; paid pro rata from the closest tier",
                    service.duration_minutes
                ),
                severity: "low".to_string(),
            });
        }
        if service.service_type.is_unrecognized() {
            warnings.push(AuditWarning {
                code: UNKNOWN_SERVICE_TYPE.to_string(),
                message: format!(
                    "Service type '{}' is not on the price list; no surcharge applied",
                    service.service_type
                ),
                severity: "medium".to_string(),
            });
        }

        let surcharge = calculate_service_surcharge(service, pricing, step_number);
        if let Some(kind) = surcharge.kind {
            credit_surcharge(&mut breakdown, kind, surcharge.amount);
        }
        steps.push(surcharge.audit_step);
        step_number += 1;
    }

    let add_ons = calculate_add_on_totals(&inputs.add_ons, step_number);
    breakdown.deep_tissue_surcharge += add_ons.totals.deep_tissue;
    breakdown.advanced_bodywork_surcharge += add_ons.totals.advanced_bodywork;
    breakdown.other_add_ons_total += add_ons.totals.other;
    steps.push(add_ons.audit_step);
    step_number += 1;

    let bonus = calculate_review_bonus(inputs.client_left_review, pricing, step_number);
    breakdown.review_bonus = bonus.amount;
    steps.push(bonus.audit_step);
    step_number += 1;

    breakdown.tips_total = inputs.tip_amount;
    steps.push(AuditStep {
        step_number,
        rule_id: "tips".to_string(),
        rule_name: "Tips".to_string(),
        input: serde_json::json!({ "tip_amount": inputs.tip_amount.to_string() }),
        output: serde_json::json!({ "amount": inputs.tip_amount.to_string() }),
        reasoning: format!("Tips paid in full: ${}", inputs.tip_amount.normalize()),
    });
    step_number += 1;

    breakdown.grand_total = breakdown.components_sum();
    steps.push(grand_total_step(&breakdown, step_number));

    PayoutCalculation {
        breakdown,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

fn credit_surcharge(breakdown: &mut PayoutBreakdown, kind: SurchargeKind, amount: Decimal) {
    match kind {
        SurchargeKind::DeepTissue => breakdown.deep_tissue_surcharge += amount,
        SurchargeKind::AdvancedBodywork => breakdown.advanced_bodywork_surcharge += amount,
    }
}

fn grand_total_step(breakdown: &PayoutBreakdown, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "grand_total".to_string(),
        rule_name: "Grand Total".to_string(),
        input: serde_json::json!({
            "base_pay": breakdown.base_pay.to_string(),
            "deep_tissue_surcharge": breakdown.deep_tissue_surcharge.to_string(),
            "advanced_bodywork_surcharge": breakdown.advanced_bodywork_surcharge.to_string(),
            "other_add_ons_total": breakdown.other_add_ons_total.to_string(),
            "review_bonus": breakdown.review_bonus.to_string(),
            "tips_total": breakdown.tips_total.to_string()
        }),
        output: serde_json::json!({ "grand_total": breakdown.grand_total.to_string() }),
        reasoning: format!(
            "Sum of all payout buckets: ${}",
            breakdown.grand_total.round_dp(2).normalize()
        ),
    }
}
