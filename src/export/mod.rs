//! Session exports.
//!
//! - [`render_csv`]: the flat spreadsheet layout, one row per session
//! - [`render_json`]: a full backup document with per-session breakdowns
//! - [`render_daily_tally`]: the plain-text summary sent to the manager
//!
//! Exports are the only place amounts are rounded to cents.

mod csv;
mod json;
mod tally;

pub use self::csv::{CSV_HEADERS, render_csv};
pub use self::json::{ExportDocument, ExportedSession, render_json};
pub use self::tally::render_daily_tally;

use rust_decimal::Decimal;

use crate::models::round_money;

/// Formats an amount with exactly two decimal places.
///
/// # Example
///
/// ```
/// use halo_payroll::export::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(50, 0)), "50.00");
/// assert_eq!(format_money(Decimal::new(816666, 4)), "81.67");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    rounded.rescale(2);
    rounded.to_string()
}
