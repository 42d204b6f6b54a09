//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod add_on;
mod breakdown;
mod calculation_result;
mod service;
mod session;
mod stored_record;

pub use add_on::{AddOnLineItem, SurchargeKind};
pub use breakdown::{PayoutBreakdown, PricedSession, round_money};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use service::{ServiceLineItem, ServiceType};
pub use session::{LegacySessionRecord, Location, SessionInputs, SessionKind, SessionRecord};
pub use stored_record::StoredSessionRecord;

use serde::{Deserialize, Deserializer};

/// Deserializes `null` the same way as a missing field.
///
/// Records imported from older schemas carry explicit `null`s for numbers
/// that were never filled in; those count as zero.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
