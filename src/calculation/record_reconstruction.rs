//! Conversion between session records and flat database rows.
//!
//! A [`StoredSessionRecord`] keeps one service and per-bucket totals. Loading
//! it back synthesizes one add-on line per non-empty column so the payout can
//! be recalculated:
//!
//! - `add_ons > 0` becomes a generic "Add-ons" line
//! - `deeptissue_lymp_sport > 0` becomes a deep-tissue surcharge line, unless
//!   the service itself is deep tissue
//! - `advanced_bodywork > 0` becomes an advanced-bodywork surcharge line,
//!   unless the service itself is advanced bodywork
//!
//! When the service type already carries the surcharge the column is assumed
//! to be the service surcharge, so nothing is synthesized.

use rust_decimal::Decimal;

use crate::models::{
    AddOnLineItem, Location, PayoutBreakdown, ServiceLineItem, SessionInputs, SessionKind,
    SessionRecord, StoredSessionRecord, SurchargeKind,
};

/// Name given to the synthesized generic add-on line.
pub const RECONSTRUCTED_ADD_ONS_NAME: &str = "Add-ons";

/// Rebuilds the add-on lines a stored row stands for.
fn reconstruct_add_ons(row: &StoredSessionRecord) -> Vec<AddOnLineItem> {
    let mut add_ons = Vec::new();

    if row.add_ons > Decimal::ZERO {
        add_ons.push(AddOnLineItem::generic(
            format!("addon-{}", row.id),
            RECONSTRUCTED_ADD_ONS_NAME,
            row.add_ons,
        ));
    }

    for (kind, amount) in [
        (SurchargeKind::DeepTissue, row.deeptissue_lymp_sport),
        (SurchargeKind::AdvancedBodywork, row.advanced_bodywork),
    ] {
        if amount > Decimal::ZERO && row.service_type.surcharge_kind() != Some(kind) {
            add_ons.push(AddOnLineItem::surcharge(
                format!("{}-{}", kind.code(), row.id),
                kind.display_name(),
                kind,
                amount,
            ));
        }
    }

    add_ons
}

/// Rebuilds calculator inputs from a stored row.
///
/// # Examples
///
/// ```
/// use halo_payroll::calculation::{calculate_payout, reconstruct_session_inputs};
/// use halo_payroll::config::PricingConfig;
/// use halo_payroll::models::StoredSessionRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let row: StoredSessionRecord = serde_json::from_str(r#"{
///     "id": "42", "date": "2026-02-10", "business": "halo",
///     "service_type": "massage", "duration": 60, "base_price": "50",
///     "add_ons": "0", "deeptissue_lymp_sport": "7.50", "advanced_bodywork": "0",
///     "review": "0", "tips": "0", "total_payout": "57.50"
/// }"#).unwrap();
///
/// let inputs = reconstruct_session_inputs(&row);
/// assert_eq!(inputs.add_ons.len(), 1);
/// assert_eq!(inputs.add_ons[0].id(), "deep-tissue-42");
///
/// let breakdown = calculate_payout(&inputs, &PricingConfig::halo_default());
/// assert_eq!(breakdown.deep_tissue_surcharge, Decimal::from_str("7.50").unwrap());
/// assert_eq!(breakdown.base_pay, Decimal::from_str("50.00").unwrap());
/// ```
pub fn reconstruct_session_inputs(row: &StoredSessionRecord) -> SessionInputs {
    SessionInputs {
        services: vec![ServiceLineItem::new(row.service_type.clone(), row.duration)],
        add_ons: reconstruct_add_ons(row),
        tip_amount: row.tips,
        client_left_review: row.review > Decimal::ZERO,
    }
}

/// Rebuilds a full session record from a stored row.
///
/// Rows from the owner practice become [`SessionKind::Rated`] without a
/// rating, since the row does not keep one. Their service gets back the
/// hourly rate implied by `base_price` and `duration`.
pub fn reconstruct_session_record(row: &StoredSessionRecord) -> SessionRecord {
    let location = Location::from_business_code(&row.business);
    let kind = match location {
        Location::Halo => SessionKind::BonusEligible {
            client_left_review: row.review > Decimal::ZERO,
        },
        Location::SoulBridge => SessionKind::Rated {
            rating: None,
            review: None,
        },
    };

    let mut service = ServiceLineItem::new(row.service_type.clone(), row.duration);
    if location == Location::SoulBridge && row.duration > 0 {
        service.rate = Some(row.base_price * Decimal::from(60) / Decimal::from(row.duration));
    }

    SessionRecord {
        id: row.id.clone(),
        date: row.date,
        location,
        services: vec![service],
        add_ons: reconstruct_add_ons(row),
        tips: row.tips,
        kind,
    }
}

/// Flattens a session and its payout into a database row.
///
/// Only the first service is kept. The surcharge columns hold the whole
/// bucket, whether it came from the service or from add-on lines.
pub fn flatten_session_record(
    session: &SessionRecord,
    breakdown: &PayoutBreakdown,
) -> StoredSessionRecord {
    let (service_type, duration) = session
        .primary_service()
        .map(|s| (s.service_type.clone(), s.duration_minutes))
        .unwrap_or_default();

    StoredSessionRecord {
        id: session.id.clone(),
        date: session.date,
        business: session.location.business_code().to_string(),
        service_type,
        duration,
        base_price: breakdown.base_pay,
        add_ons: breakdown.other_add_ons_total,
        deeptissue_lymp_sport: breakdown.deep_tissue_surcharge,
        advanced_bodywork: breakdown.advanced_bodywork_surcharge,
        review: breakdown.review_bonus,
        tips: breakdown.tips_total,
        total_payout: breakdown.grand_total,
    }
}
