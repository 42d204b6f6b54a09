//! Payout breakdown models.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::SessionRecord;

/// Rounds a monetary amount to cents, halves away from zero.
///
/// Only presentation code (exports, tally text) rounds. Calculations keep
/// full precision so that sums over many sessions do not drift.
///
/// # Example
///
/// ```
/// use halo_payroll::models::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("81.666666").unwrap();
/// assert_eq!(round_money(amount), Decimal::from_str("81.67").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The categorized payout for one session (or a sum of sessions).
///
/// Every cent of a session lands in exactly one of the six component
/// buckets, and `grand_total` is their exact sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayoutBreakdown {
    /// Tiered pay for the service durations, before any surcharge.
    pub base_pay: Decimal,
    /// Deep-tissue surcharges from services and from coded add-ons.
    pub deep_tissue_surcharge: Decimal,
    /// Advanced-bodywork surcharges from services and from coded add-ons.
    pub advanced_bodywork_surcharge: Decimal,
    /// All other add-ons.
    pub other_add_ons_total: Decimal,
    /// Flat bonus for a client review.
    pub review_bonus: Decimal,
    /// Tips, passed through in full.
    pub tips_total: Decimal,
    /// Sum of the six fields above.
    pub grand_total: Decimal,
}

impl PayoutBreakdown {
    /// Returns the sum of the six component buckets.
    pub fn components_sum(&self) -> Decimal {
        self.base_pay
            + self.deep_tissue_surcharge
            + self.advanced_bodywork_surcharge
            + self.other_add_ons_total
            + self.review_bonus
            + self.tips_total
    }

    /// Returns every add-on style payment: both surcharge buckets plus the
    /// generic add-ons.
    pub fn surcharges_and_add_ons(&self) -> Decimal {
        self.deep_tissue_surcharge + self.advanced_bodywork_surcharge + self.other_add_ons_total
    }

    /// Adds another breakdown field by field.
    pub fn accumulate(&mut self, other: &PayoutBreakdown) {
        self.base_pay += other.base_pay;
        self.deep_tissue_surcharge += other.deep_tissue_surcharge;
        self.advanced_bodywork_surcharge += other.advanced_bodywork_surcharge;
        self.other_add_ons_total += other.other_add_ons_total;
        self.review_bonus += other.review_bonus;
        self.tips_total += other.tips_total;
        self.grand_total += other.grand_total;
    }

    /// Returns a copy with every field rounded to cents for display.
    pub fn rounded(&self) -> PayoutBreakdown {
        PayoutBreakdown {
            base_pay: round_money(self.base_pay),
            deep_tissue_surcharge: round_money(self.deep_tissue_surcharge),
            advanced_bodywork_surcharge: round_money(self.advanced_bodywork_surcharge),
            other_add_ons_total: round_money(self.other_add_ons_total),
            review_bonus: round_money(self.review_bonus),
            tips_total: round_money(self.tips_total),
            grand_total: round_money(self.grand_total),
        }
    }
}

/// A stored session paired with its computed breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedSession {
    /// The session record.
    pub session: SessionRecord,
    /// The payout computed for it.
    pub breakdown: PayoutBreakdown,
}
