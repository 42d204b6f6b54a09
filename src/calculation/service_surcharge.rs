//! Service-type surcharge calculation.
//!
//! Deep tissue and advanced bodywork services pay a flat surcharge on top
//! of their tier base pay. Every other service type pays none.

use rust_decimal::Decimal;

use crate::config::PricingConfig;
use crate::models::{AuditStep, ServiceLineItem, ServiceType, SurchargeKind};

/// The result of the surcharge rule for one service, including the audit step.
#[derive(Debug, Clone)]
pub struct ServiceSurchargeResult {
    /// Which surcharge bucket the amount belongs to, if any.
    pub kind: Option<SurchargeKind>,
    /// The surcharge amount (zero when `kind` is `None`).
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the surcharge owed for a service type under `pricing`.
///
/// # Examples
///
/// ```
/// use halo_payroll::calculation::service_surcharge_amount;
/// use halo_payroll::config::PricingConfig;
/// use halo_payroll::models::ServiceType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pricing = PricingConfig::halo_default();
/// assert_eq!(
///     service_surcharge_amount(&ServiceType::DeepTissue, &pricing),
///     Decimal::from_str("7.50").unwrap()
/// );
/// assert_eq!(service_surcharge_amount(&ServiceType::Massage, &pricing), Decimal::ZERO);
/// ```
pub fn service_surcharge_amount(service_type: &ServiceType, pricing: &PricingConfig) -> Decimal {
    service_type
        .surcharge_kind()
        .map(|kind| pricing.surcharge_for(kind))
        .unwrap_or(Decimal::ZERO)
}

/// Applies the surcharge rule to one service line.
///
/// # Arguments
///
/// * `service` - The service line
/// * `pricing` - The pricing configuration holding the surcharge table
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_service_surcharge(
    service: &ServiceLineItem,
    pricing: &PricingConfig,
    step_number: u32,
) -> ServiceSurchargeResult {
    let kind = service.service_type.surcharge_kind();
    let amount = service_surcharge_amount(&service.service_type, pricing);

    let reasoning = match kind {
        Some(kind) => format!(
            "'{}' service earns the {} surcharge: ${}",
            service.service_type,
            kind.display_name(),
            amount.normalize()
        ),
        None => format!("'{}' service has no surcharge", service.service_type),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "service_surcharge".to_string(),
        rule_name: "Service-Type Surcharge".to_string(),
        input: serde_json::json!({
            "service_type": service.service_type.as_str()
        }),
        output: serde_json::json!({
            "bucket": kind.map(SurchargeKind::code),
            "amount": amount.to_string()
        }),
        reasoning,
    };

    ServiceSurchargeResult {
        kind,
        amount,
        audit_step,
    }
}
