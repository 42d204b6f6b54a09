//! Request types for the payroll engine API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AddOnLineItem, LegacySessionRecord, ServiceLineItem, SessionInputs, SessionRecord,
};

/// Request body for the `/calculate` endpoint.
///
/// Every field is optional; missing lists are empty, a missing tip is zero
/// and a missing review flag is `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Session the calculation is for, echoed back in the result.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Services rendered.
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub services: Vec<ServiceLineItem>,
    /// Add-ons charged.
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub add_ons: Vec<AddOnLineItem>,
    /// Tip received.
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub tip_amount: Decimal,
    /// Whether the client left a review.
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub client_left_review: bool,
}

impl CalculationRequest {
    /// Splits the request into the optional session id and calculator inputs.
    pub fn into_parts(self) -> (Option<String>, SessionInputs) {
        (
            self.session_id,
            SessionInputs {
                services: self.services,
                add_ons: self.add_ons,
                tip_amount: self.tip_amount,
                client_left_review: self.client_left_review,
            },
        )
    }
}

/// Request body for the `/summary` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Inputs of each session to total.
    #[serde(default)]
    pub sessions: Vec<SessionInputs>,
}

/// Request body for `POST /sessions`.
///
/// Accepts the current record layout or the older flat layout used by
/// device backups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionPayload {
    /// A record in the current layout.
    Current(SessionRecord),
    /// A record in the legacy flat layout.
    Legacy(LegacySessionRecord),
}

impl From<SessionPayload> for SessionRecord {
    fn from(payload: SessionPayload) -> Self {
        match payload {
            SessionPayload::Current(record) => record,
            SessionPayload::Legacy(legacy) => legacy.into(),
        }
    }
}

/// Query parameters selecting a single day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    /// Restrict to sessions on this day.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, SessionKind};

    #[test]
    fn test_empty_calculation_request() {
        let request: CalculationRequest = serde_json::from_str("{}").unwrap();
        let (session_id, inputs) = request.into_parts();

        assert!(session_id.is_none());
        assert_eq!(inputs, SessionInputs::default());
    }

    #[test]
    fn test_calculation_request_accepts_legacy_field_names() {
        let json = r#"{
            "session_id": "s1",
            "services": [{"type": "deep-tissue", "duration": 60}],
            "add_ons": [{"id": "deep-tissue", "name": "Deep Tissue", "price": "7.50"}],
            "tip_amount": null,
            "client_left_review": true
        }"#;

        let (session_id, inputs) = serde_json::from_str::<CalculationRequest>(json)
            .unwrap()
            .into_parts();
        assert_eq!(session_id.as_deref(), Some("s1"));
        assert_eq!(inputs.services[0].duration_minutes, 60);
        assert!(inputs.add_ons[0].surcharge_kind().is_some());
        assert_eq!(inputs.tip_amount, Decimal::ZERO);
    }

    #[test]
    fn test_session_payload_current_layout() {
        let json = r#"{
            "id": "s1",
            "date": "2026-02-02",
            "location": "halo",
            "services": [{"service_type": "massage", "duration_minutes": 60}],
            "add_ons": [],
            "tips": "5",
            "kind": {"type": "bonus_eligible", "client_left_review": true}
        }"#;

        let payload: SessionPayload = serde_json::from_str(json).unwrap();
        assert!(matches!(payload, SessionPayload::Current(_)));

        let record = SessionRecord::from(payload);
        assert!(record.kind.earns_review_bonus());
    }

    #[test]
    fn test_session_payload_legacy_layout() {
        let json = r#"{
            "id": "s2",
            "date": "2026-02-02",
            "location": "soul-bridge",
            "services": [],
            "addOns": [],
            "tips": 0,
            "rating": 5
        }"#;

        let payload: SessionPayload = serde_json::from_str(json).unwrap();
        assert!(matches!(payload, SessionPayload::Legacy(_)));

        let record = SessionRecord::from(payload);
        assert_eq!(record.location, Location::SoulBridge);
        assert_eq!(
            record.kind,
            SessionKind::Rated {
                rating: Some(5),
                review: None
            }
        );
    }

    #[test]
    fn test_date_query() {
        let query: DateQuery = serde_json::from_str(r#"{"date": "2026-02-02"}"#).unwrap();
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2026, 2, 2));
    }
}
