//! JSON export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PayoutBreakdown, PricedSession, SessionRecord};

/// One session in a JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedSession {
    /// The session fields.
    #[serde(flatten)]
    pub session: SessionRecord,
    /// The payout, rounded to cents.
    pub breakdown: PayoutBreakdown,
}

/// A JSON export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// When the export was produced.
    pub export_date: DateTime<Utc>,
    /// Number of sessions in the export.
    pub session_count: usize,
    /// The exported sessions.
    pub sessions: Vec<ExportedSession>,
}

impl ExportDocument {
    /// Builds a document from priced sessions.
    pub fn new(sessions: &[PricedSession], export_date: DateTime<Utc>) -> Self {
        Self {
            export_date,
            session_count: sessions.len(),
            sessions: sessions
                .iter()
                .map(|priced| ExportedSession {
                    session: priced.session.clone(),
                    breakdown: priced.breakdown.rounded(),
                })
                .collect(),
        }
    }
}

/// Renders sessions as a pretty-printed JSON document.
pub fn render_json(sessions: &[PricedSession], export_date: DateTime<Utc>) -> EngineResult<String> {
    serde_json::to_string_pretty(&ExportDocument::new(sessions, export_date)).map_err(|e| {
        EngineError::ExportError {
            format: "json".to_string(),
            message: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::price_sessions;
    use crate::config::PricingConfig;
    use crate::models::{Location, ServiceLineItem, ServiceType, SessionKind};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn export_date() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-02-28T18:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn priced() -> Vec<PricedSession> {
        let session = SessionRecord {
            id: "s1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 27).unwrap(),
            location: Location::Halo,
            services: vec![ServiceLineItem::new(ServiceType::Massage, 105)],
            add_ons: vec![],
            tips: dec("10"),
            kind: SessionKind::BonusEligible {
                client_left_review: false,
            },
        };
        price_sessions(&[session], &PricingConfig::halo_default())
    }

    #[test]
    fn test_document_shape() {
        let json = render_json(&priced(), export_date()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["export_date"], "2026-02-28T18:30:00Z");
        assert_eq!(value["session_count"], 1);
        assert_eq!(value["sessions"][0]["id"], "s1");
        assert_eq!(value["sessions"][0]["location"], "halo");
        assert_eq!(value["sessions"][0]["kind"]["type"], "bonus_eligible");
    }

    #[test]
    fn test_breakdown_is_rounded() {
        let json = render_json(&priced(), export_date()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        // 70 * 105 / 90 = 81.666...
        assert_eq!(value["sessions"][0]["breakdown"]["base_pay"], "81.67");
        assert_eq!(value["sessions"][0]["breakdown"]["grand_total"], "91.67");
    }

    #[test]
    fn test_document_reads_back() {
        let json = render_json(&priced(), export_date()).unwrap();
        let document: ExportDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(document.session_count, 1);
        assert_eq!(document.sessions[0].session.id, "s1");
        assert_eq!(document.sessions[0].breakdown.tips_total, dec("10"));
    }
}
