//! Period and daily payout summaries.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::models::{PayoutBreakdown, PricedSession, SessionRecord};

use super::session_pricing::price_session;

/// Field-wise totals over a set of sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayoutSummary {
    /// Number of sessions summed.
    pub session_count: usize,
    /// Sum of every breakdown field.
    pub totals: PayoutBreakdown,
}

/// Totals for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// The day.
    pub date: NaiveDate,
    /// Totals for sessions on that day.
    pub summary: PayoutSummary,
}

/// Sums breakdowns field by field.
///
/// `totals.grand_total` equals the sum of the individual grand totals.
///
/// # Examples
///
/// ```
/// use halo_payroll::calculation::summarize_payouts;
/// use halo_payroll::models::PayoutBreakdown;
/// use rust_decimal::Decimal;
///
/// let session = PayoutBreakdown {
///     base_pay: Decimal::new(5000, 2),
///     grand_total: Decimal::new(5000, 2),
///     ..PayoutBreakdown::default()
/// };
///
/// let summary = summarize_payouts([&session, &session]);
/// assert_eq!(summary.session_count, 2);
/// assert_eq!(summary.totals.grand_total, Decimal::new(10000, 2));
/// ```
pub fn summarize_payouts<'a, I>(breakdowns: I) -> PayoutSummary
where
    I: IntoIterator<Item = &'a PayoutBreakdown>,
{
    breakdowns
        .into_iter()
        .fold(PayoutSummary::default(), |mut summary, breakdown| {
            summary.session_count += 1;
            summary.totals.accumulate(breakdown);
            summary
        })
}

/// Calculates the payout of every session, each by its business's rules.
pub fn price_sessions(sessions: &[SessionRecord], pricing: &PricingConfig) -> Vec<PricedSession> {
    sessions
        .iter()
        .map(|session| PricedSession {
            breakdown: price_session(session, pricing),
            session: session.clone(),
        })
        .collect()
}

/// Groups priced sessions by day, oldest day first.
pub fn daily_summaries(sessions: &[PricedSession]) -> Vec<DailySummary> {
    let mut by_day: BTreeMap<NaiveDate, PayoutSummary> = BTreeMap::new();
    for priced in sessions {
        let summary = by_day.entry(priced.session.date).or_default();
        summary.session_count += 1;
        summary.totals.accumulate(&priced.breakdown);
    }

    by_day
        .into_iter()
        .map(|(date, summary)| DailySummary { date, summary })
        .collect()
}
