//! Review bonus calculation.

use rust_decimal::Decimal;

use crate::config::PricingConfig;
use crate::models::AuditStep;

/// The result of the review bonus rule, including the audit step.
#[derive(Debug, Clone)]
pub struct ReviewBonusResult {
    /// The bonus paid (zero without a review).
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the bonus owed for a session.
pub fn review_bonus_amount(client_left_review: bool, pricing: &PricingConfig) -> Decimal {
    if client_left_review {
        pricing.review_bonus()
    } else {
        Decimal::ZERO
    }
}

/// Applies the flat review bonus.
///
/// # Examples
///
/// ```
/// use halo_payroll::calculation::calculate_review_bonus;
/// use halo_payroll::config::PricingConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_review_bonus(true, &PricingConfig::halo_default(), 1);
/// assert_eq!(result.amount, Decimal::from_str("5.00").unwrap());
/// ```
pub fn calculate_review_bonus(
    client_left_review: bool,
    pricing: &PricingConfig,
    step_number: u32,
) -> ReviewBonusResult {
    let amount = review_bonus_amount(client_left_review, pricing);

    let reasoning = if client_left_review {
        format!("Client left a review: ${} bonus", amount.normalize())
    } else {
        "No client review - no bonus".to_string()
    };

    ReviewBonusResult {
        amount,
        audit_step: AuditStep {
            step_number,
            rule_id: "review_bonus".to_string(),
            rule_name: "Review Bonus".to_string(),
            input: serde_json::json!({
                "client_left_review": client_left_review
            }),
            output: serde_json::json!({
                "amount": amount.to_string()
            }),
            reasoning,
        },
    }
}
