//! Calculation logic for the payroll engine.
//!
//! This module contains the pricing rules for a session (duration tiers,
//! service-type surcharges, add-on bucketing, the review bonus), the
//! orchestrator that combines them into a [`crate::models::PayoutBreakdown`],
//! hourly pricing for owner-practice sessions,
//! the conversion to and from flat database rows, and period summaries.

mod add_on_disambiguation;
mod record_reconstruction;
mod review_bonus;
mod service_surcharge;
mod session_pricing;
mod summary;
mod tier_resolver;
mod total_payout;

pub use add_on_disambiguation::{
    AddOnBucket, AddOnTotals, AddOnTotalsResult, calculate_add_on_totals, partition_add_ons,
};
pub use record_reconstruction::{
    RECONSTRUCTED_ADD_ONS_NAME, flatten_session_record, reconstruct_session_inputs,
    reconstruct_session_record,
};
pub use review_bonus::{ReviewBonusResult, calculate_review_bonus, review_bonus_amount};
pub use service_surcharge::{
    ServiceSurchargeResult, calculate_service_surcharge, service_surcharge_amount,
};
pub use session_pricing::{calculate_hourly_payout, hourly_service_pay, price_session};
pub use summary::{DailySummary, PayoutSummary, daily_summaries, price_sessions, summarize_payouts};
pub use tier_resolver::{
    BasePayResult, TierMatch, TierResolution, calculate_base_pay, resolve_base_pay, resolve_tier,
};
pub use total_payout::{
    OFF_TIER_DURATION, PayoutCalculation, UNKNOWN_SERVICE_TYPE, calculate_payout,
    calculate_payout_traced,
};
