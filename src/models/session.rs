//! Session models.
//!
//! [`SessionInputs`] is everything the payout calculation looks at.
//! [`SessionRecord`] is a logged session as the store keeps it, including
//! which business variant it belongs to.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AddOnLineItem, ServiceLineItem};

/// The sole input to a payout calculation.
///
/// Built fresh for each calculation from whatever the application holds for
/// a session. Missing fields default to empty lists, zero and `false`.
///
/// # Example
///
/// ```
/// use halo_payroll::models::SessionInputs;
///
/// let inputs: SessionInputs = serde_json::from_str("{}").unwrap();
/// assert!(inputs.services.is_empty());
/// assert!(!inputs.client_left_review);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionInputs {
    /// Services rendered, in entry order.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub services: Vec<ServiceLineItem>,
    /// Add-ons charged, in entry order.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub add_ons: Vec<AddOnLineItem>,
    /// Tip received.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tip_amount: Decimal,
    /// Whether the client left a review.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub client_left_review: bool,
}

/// The business a session was performed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    /// Halo Therapies, where the contractor payout rules apply.
    Halo,
    /// Soul Bridge Healing, the owner-operated practice.
    SoulBridge,
}

impl Location {
    /// Returns the human-readable business name.
    pub fn display_name(self) -> &'static str {
        match self {
            Location::Halo => "Halo Therapies",
            Location::SoulBridge => "Soul Bridge Healing",
        }
    }

    /// Returns the short code stored in the hosted `business` column.
    pub fn business_code(self) -> &'static str {
        match self {
            Location::Halo => "halo",
            Location::SoulBridge => "soul",
        }
    }

    /// Parses a `business` column value. Anything other than `halo` is the
    /// owner practice.
    pub fn from_business_code(code: &str) -> Self {
        if code == "halo" {
            Location::Halo
        } else {
            Location::SoulBridge
        }
    }
}

/// How client feedback is recorded for a session.
///
/// The two businesses never mix: a session is either rated (star rating and
/// free text, no money attached) or bonus-eligible (a yes/no review flag
/// worth a flat bonus).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionKind {
    /// Star rating and review text with no monetary effect.
    Rated {
        /// Rating from 1 to 5, if given.
        #[serde(default)]
        rating: Option<u8>,
        /// Review text, if given.
        #[serde(default)]
        review: Option<String>,
    },
    /// A review flag that earns the review bonus.
    BonusEligible {
        /// Whether the client left a review.
        #[serde(default)]
        client_left_review: bool,
    },
}

impl SessionKind {
    /// Returns true only for bonus-eligible sessions with a review.
    pub fn earns_review_bonus(&self) -> bool {
        matches!(
            self,
            SessionKind::BonusEligible {
                client_left_review: true
            }
        )
    }
}

/// A logged session as kept by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique identifier for the session.
    pub id: String,
    /// The day the session took place.
    pub date: NaiveDate,
    /// The business the session was performed for.
    pub location: Location,
    /// Services rendered.
    #[serde(default)]
    pub services: Vec<ServiceLineItem>,
    /// Add-ons charged.
    #[serde(default)]
    pub add_ons: Vec<AddOnLineItem>,
    /// Tip received.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tips: Decimal,
    /// Review model for this session.
    pub kind: SessionKind,
}

impl SessionRecord {
    /// Builds the calculator inputs for this session.
    pub fn payout_inputs(&self) -> SessionInputs {
        SessionInputs {
            services: self.services.clone(),
            add_ons: self.add_ons.clone(),
            tip_amount: self.tips,
            client_left_review: self.kind.earns_review_bonus(),
        }
    }

    /// Returns the first service, which the flat exports describe.
    pub fn primary_service(&self) -> Option<&ServiceLineItem> {
        self.services.first()
    }
}

/// A session in the older flat JSON layout used by device backups.
///
/// Review data is spread over `review`, `rating` and `hasClientReview`; which
/// of them matter depends on `location`. Converting into [`SessionRecord`]
/// settles that once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySessionRecord {
    /// Unique identifier for the session.
    pub id: String,
    /// `halo` or `soul-bridge`.
    pub location: Location,
    /// The day the session took place.
    pub date: NaiveDate,
    /// Services rendered.
    #[serde(default)]
    pub services: Vec<ServiceLineItem>,
    /// Add-ons charged.
    #[serde(default)]
    pub add_ons: Vec<AddOnLineItem>,
    /// Tip received.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tips: Decimal,
    /// Review text (owner practice only).
    #[serde(default)]
    pub review: Option<String>,
    /// Star rating (owner practice only).
    #[serde(default)]
    pub rating: Option<u8>,
    /// Review flag (Halo only).
    #[serde(default)]
    pub has_client_review: Option<bool>,
}

impl From<LegacySessionRecord> for SessionRecord {
    fn from(legacy: LegacySessionRecord) -> Self {
        let kind = match legacy.location {
            Location::Halo => SessionKind::BonusEligible {
                client_left_review: legacy.has_client_review.unwrap_or(false),
            },
            Location::SoulBridge => SessionKind::Rated {
                rating: legacy.rating,
                review: legacy.review,
            },
        };

        SessionRecord {
            id: legacy.id,
            date: legacy.date,
            location: legacy.location,
            services: legacy.services,
            add_ons: legacy.add_ons,
            tips: legacy.tips,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ServiceType, SurchargeKind};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn halo_session(client_left_review: bool) -> SessionRecord {
        SessionRecord {
            id: "sess_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
            location: Location::Halo,
            services: vec![ServiceLineItem::new(ServiceType::Massage, 60)],
            add_ons: vec![],
            tips: dec("15.00"),
            kind: SessionKind::BonusEligible { client_left_review },
        }
    }

    #[test]
    fn test_empty_inputs_deserialize_with_defaults() {
        let inputs: SessionInputs = serde_json::from_str("{}").unwrap();
        assert_eq!(inputs, SessionInputs::default());

        let inputs: SessionInputs =
            serde_json::from_str(r#"{"tip_amount": null, "add_ons": null}"#).unwrap();
        assert_eq!(inputs.tip_amount, Decimal::ZERO);
        assert!(inputs.add_ons.is_empty());
    }

    #[test]
    fn test_payout_inputs_carry_review_flag() {
        let inputs = halo_session(true).payout_inputs();
        assert!(inputs.client_left_review);
        assert_eq!(inputs.tip_amount, dec("15.00"));
        assert_eq!(inputs.services.len(), 1);
    }

    #[test]
    fn test_rated_session_never_earns_review_bonus() {
        let mut session = halo_session(true);
        session.location = Location::SoulBridge;
        session.kind = SessionKind::Rated {
            rating: Some(5),
            review: Some("Wonderful".to_string()),
        };

        assert!(!session.payout_inputs().client_left_review);
    }

    #[test]
    fn test_legacy_halo_record_becomes_bonus_eligible() {
        let json = r#"{
            "id": "1738500000000",
            "location": "halo",
            "date": "2026-02-02",
            "services": [{"id": "s1", "type": "deep-tissue", "duration": 90, "rate": 77.5}],
            "addOns": [{"id": "cupping-1", "name": "Cupping", "price": 12.5, "haloCode": "cupping"}],
            "tips": 20,
            "hasClientReview": true
        }"#;

        let legacy: LegacySessionRecord = serde_json::from_str(json).unwrap();
        let record = SessionRecord::from(legacy);

        assert_eq!(record.location, Location::Halo);
        assert_eq!(
            record.kind,
            SessionKind::BonusEligible {
                client_left_review: true
            }
        );
        assert_eq!(record.services[0].service_type, ServiceType::DeepTissue);
        assert_eq!(record.services[0].duration_minutes, 90);
        assert_eq!(record.services[0].rate, Some(dec("77.5")));
        assert_eq!(record.add_ons[0].surcharge_kind(), None);
    }

    #[test]
    fn test_legacy_soul_bridge_record_becomes_rated() {
        let json = r#"{
            "id": "1738500000001",
            "location": "soul-bridge",
            "date": "2026-02-03",
            "services": [],
            "addOns": [],
            "tips": 0,
            "review": "Great session",
            "rating": 4,
            "hasClientReview": true
        }"#;

        let legacy: LegacySessionRecord = serde_json::from_str(json).unwrap();
        let record = SessionRecord::from(legacy);

        assert_eq!(
            record.kind,
            SessionKind::Rated {
                rating: Some(4),
                review: Some("Great session".to_string()),
            }
        );
        assert!(!record.kind.earns_review_bonus());
    }

    #[test]
    fn test_session_record_serialization_tags_kind() {
        let mut session = halo_session(true);
        session.add_ons.push(AddOnLineItem::surcharge(
            "dt",
            "Deep Tissue",
            SurchargeKind::DeepTissue,
            dec("7.50"),
        ));

        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"location\":\"halo\""));
        assert!(json.contains("\"type\":\"bonus_eligible\""));

        let back: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_location_business_codes() {
        assert_eq!(Location::from_business_code("halo"), Location::Halo);
        assert_eq!(Location::from_business_code("soul"), Location::SoulBridge);
        assert_eq!(Location::SoulBridge.business_code(), "soul");
        assert_eq!(Location::Halo.display_name(), "Halo Therapies");
    }
}
