//! Pricing a logged session according to the business it was performed for.
//!
//! Halo sessions go through [`calculate_payout`]. Soul Bridge sessions are
//! billed by the hour: each service earns `rate * duration / 60`, add-ons
//! are paid at their price and tips pass through. No Halo surcharge or
//! review bonus applies to them.

use rust_decimal::Decimal;

use crate::config::PricingConfig;
use crate::models::{Location, PayoutBreakdown, ServiceLineItem, SessionRecord};

use super::total_payout::calculate_payout;

const MINUTES_PER_HOUR: u32 = 60;

/// Returns the hourly-rate earnings of one service.
///
/// A service without a rate earns nothing.
///
/// # Example
///
/// ```
/// use halo_payroll::calculation::hourly_service_pay;
/// use halo_payroll::models::{ServiceLineItem, ServiceType};
/// use rust_decimal::Decimal;
///
/// let service = ServiceLineItem::new(ServiceType::Massage, 90).with_rate(Decimal::from(100));
/// assert_eq!(hourly_service_pay(&service), Decimal::from(150));
/// ```
pub fn hourly_service_pay(service: &ServiceLineItem) -> Decimal {
    service.rate.map_or(Decimal::ZERO, |rate| {
        rate * Decimal::from(service.duration_minutes) / Decimal::from(MINUTES_PER_HOUR)
    })
}

/// Calculates the payout of an hourly-billed session.
///
/// Service earnings land in `base_pay` and every add-on in
/// `other_add_ons_total`, whatever its surcharge code.
pub fn calculate_hourly_payout(session: &SessionRecord) -> PayoutBreakdown {
    let mut breakdown = PayoutBreakdown {
        base_pay: session.services.iter().map(hourly_service_pay).sum(),
        other_add_ons_total: session.add_ons.iter().map(|a| a.price()).sum(),
        tips_total: session.tips,
        ..PayoutBreakdown::default()
    };
    breakdown.grand_total = breakdown.components_sum();
    breakdown
}

/// Calculates the payout of a logged session.
pub fn price_session(session: &SessionRecord, pricing: &PricingConfig) -> PayoutBreakdown {
    match session.location {
        Location::Halo => calculate_payout(&session.payout_inputs(), pricing),
        Location::SoulBridge => calculate_hourly_payout(session),
    }
}
