//! CSV export.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{EngineError, EngineResult};
use crate::models::PricedSession;

use super::format_money;

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 8] = [
    "Date",
    "Location",
    "Service Type",
    "Duration (min)",
    "Base Price",
    "Add-ons",
    "Tips",
    "Total",
];

fn export_error(err: impl std::fmt::Display) -> EngineError {
    EngineError::ExportError {
        format: "csv".to_string(),
        message: err.to_string(),
    }
}

/// Renders sessions as CSV, one row per session.
///
/// The header row is plain; every data cell is quoted. Only the first
/// service of a session is described (`Unknown` / `0` without one).
/// "Add-ons" holds both surcharge buckets plus the generic add-ons.
pub fn render_csv(sessions: &[PricedSession]) -> EngineResult<String> {
    let mut header = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    header.write_record(CSV_HEADERS).map_err(export_error)?;
    let buffer = header.into_inner().map_err(export_error)?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buffer);

    for priced in sessions {
        let session = &priced.session;
        let breakdown = &priced.breakdown;
        let (service_type, duration) = session
            .primary_service()
            .map(|s| (s.service_type.to_string(), s.duration_minutes))
            .unwrap_or_else(|| ("Unknown".to_string(), 0));

        writer
            .write_record([
                session.date.to_string(),
                session.location.display_name().to_string(),
                service_type,
                duration.to_string(),
                format_money(breakdown.base_pay),
                format_money(breakdown.surcharges_and_add_ons()),
                format_money(breakdown.tips_total),
                format_money(breakdown.grand_total),
            ])
            .map_err(export_error)?;
    }

    let bytes = writer.into_inner().map_err(export_error)?;
    String::from_utf8(bytes).map_err(export_error)
}
