//! The flat session row kept by the hosted database.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ServiceType;

/// One session as a single database row.
///
/// The row keeps only aggregate amounts: one service, the total of generic
/// add-ons and a total per surcharge column. Itemized add-ons are rebuilt
/// from these columns when the row is loaded again (see
/// [`crate::calculation::reconstruct_session_inputs`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSessionRecord {
    /// Unique identifier for the session.
    pub id: String,
    /// The day the session took place.
    pub date: NaiveDate,
    /// `halo` or `soul`.
    pub business: String,
    /// The primary service type.
    #[serde(default)]
    pub service_type: ServiceType,
    /// The primary service duration in minutes.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub duration: u32,
    /// Base pay for the primary service.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub base_price: Decimal,
    /// Total of generic add-ons.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub add_ons: Decimal,
    /// Total deep-tissue surcharge, whatever its origin.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub deeptissue_lymp_sport: Decimal,
    /// Total advanced-bodywork surcharge, whatever its origin.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub advanced_bodywork: Decimal,
    /// Review bonus paid.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub review: Decimal,
    /// Tip received.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tips: Decimal,
    /// Grand total paid out for the session.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_payout: Decimal,
}
