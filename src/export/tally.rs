//! Plain-text daily tally.

use chrono::NaiveDate;

use crate::calculation::summarize_payouts;
use crate::models::{PayoutBreakdown, PricedSession};

use super::format_money;

const RULE: &str = "────────────────────────";

fn session_block(number: usize, breakdown: &PayoutBreakdown) -> String {
    [
        format!("Session {}:", number),
        format!("  Massage: ${}", format_money(breakdown.base_pay)),
        format!(
            "  Deep Tissue: ${}",
            format_money(breakdown.deep_tissue_surcharge)
        ),
        format!(
            "  Advanced Bodywork: ${}",
            format_money(breakdown.advanced_bodywork_surcharge)
        ),
        format!("  Add-ons: ${}", format_money(breakdown.other_add_ons_total)),
        format!("  Review: ${}", format_money(breakdown.review_bonus)),
        format!("  Tips: ${}", format_money(breakdown.tips_total)),
        format!("  Total: ${}", format_money(breakdown.grand_total)),
    ]
    .join("\n")
}

fn totals_block(totals: &PayoutBreakdown) -> String {
    [
        format!("massage: ${}", format_money(totals.base_pay)),
        format!(
            "deep tissue: ${}",
            format_money(totals.deep_tissue_surcharge)
        ),
        format!(
            "advanced bodywork: ${}",
            format_money(totals.advanced_bodywork_surcharge)
        ),
        format!("add ons: ${}", format_money(totals.other_add_ons_total)),
        format!("review: ${}", format_money(totals.review_bonus)),
        format!("tips: ${}", format_money(totals.tips_total)),
    ]
    .join("\n")
}

/// Renders the daily tally a therapist sends at the end of a shift.
///
/// Lists each session's breakdown, then the day's totals. `date` is shown
/// in the heading when given.
///
/// # Example
///
/// ```
/// use halo_payroll::export::render_daily_tally;
///
/// let text = render_daily_tally(None, &[]);
/// assert!(text.starts_with("HALO THERAPIES - DAILY TALLY\nDaily Summary\n"));
/// assert!(text.ends_with("TOTAL: $0.00"));
/// ```
pub fn render_daily_tally(date: Option<NaiveDate>, sessions: &[PricedSession]) -> String {
    let heading = match date {
        Some(date) => format!("Date: {}", date.format("%B %-d, %Y")),
        None => "Daily Summary".to_string(),
    };
    let blocks: Vec<String> = sessions
        .iter()
        .enumerate()
        .map(|(idx, priced)| session_block(idx + 1, &priced.breakdown))
        .collect();
    let totals = summarize_payouts(sessions.iter().map(|p| &p.breakdown)).totals;

    format!(
        "HALO THERAPIES - DAILY TALLY\n{}\n\nSESSION BREAKDOWN:\n{}\n\n{}\nDAILY TOTALS:\n\n{}\n\nTOTAL: ${}",
        heading,
        blocks.join("\n\n"),
        RULE,
        totals_block(&totals),
        format_money(totals.grand_total)
    )
}
