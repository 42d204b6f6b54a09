//! Service line items and service types.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SurchargeKind;

/// The kind of bodywork rendered in a session.
///
/// Values arriving from older records may be free-form. Anything that is not
/// a known type is kept verbatim in [`ServiceType::Other`] so it survives a
/// save/load cycle; it simply earns no surcharge.
///
/// # Example
///
/// ```
/// use halo_payroll::models::ServiceType;
///
/// assert_eq!(ServiceType::from("deep-tissue"), ServiceType::DeepTissue);
/// assert_eq!(ServiceType::from("reiki"), ServiceType::Other("reiki".to_string()));
/// assert_eq!(ServiceType::AdvancedBodywork.as_str(), "advanced-bodywork");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceType {
    /// A standard massage. No surcharge.
    #[default]
    Massage,
    /// Deep tissue, sports or lymphatic work.
    DeepTissue,
    /// Advanced bodywork.
    AdvancedBodywork,
    /// Dry brushing booked as the main service.
    DryBrush,
    /// An unrecognized value, preserved as entered.
    Other(String),
}

impl ServiceType {
    /// Returns the wire value for this service type.
    pub fn as_str(&self) -> &str {
        match self {
            ServiceType::Massage => "massage",
            ServiceType::DeepTissue => "deep-tissue",
            ServiceType::AdvancedBodywork => "advanced-bodywork",
            ServiceType::DryBrush => "dry-brush",
            ServiceType::Other(value) => value,
        }
    }

    /// Returns the surcharge this service type carries, if any.
    pub fn surcharge_kind(&self) -> Option<SurchargeKind> {
        match self {
            ServiceType::DeepTissue => Some(SurchargeKind::DeepTissue),
            ServiceType::AdvancedBodywork => Some(SurchargeKind::AdvancedBodywork),
            _ => None,
        }
    }

    /// Returns true if the value was not one of the known service types.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, ServiceType::Other(_))
    }
}

impl From<&str> for ServiceType {
    fn from(value: &str) -> Self {
        match value {
            "massage" => ServiceType::Massage,
            "deep-tissue" => ServiceType::DeepTissue,
            "advanced-bodywork" => ServiceType::AdvancedBodywork,
            "dry-brush" => ServiceType::DryBrush,
            other => ServiceType::Other(other.to_string()),
        }
    }
}

impl From<String> for ServiceType {
    fn from(value: String) -> Self {
        ServiceType::from(value.as_str())
    }
}

impl From<ServiceType> for String {
    fn from(value: ServiceType) -> Self {
        match value {
            ServiceType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bodywork service rendered in a session.
///
/// Older records used `type` and `duration`; both spellings are accepted.
/// `rate` is the hourly rate of an owner-practice service and is ignored for
/// Halo sessions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceLineItem {
    /// The kind of service.
    #[serde(default, alias = "type")]
    pub service_type: ServiceType,
    /// The booked duration in minutes.
    #[serde(
        default,
        alias = "duration",
        deserialize_with = "super::null_as_default"
    )]
    pub duration_minutes: u32,
    /// Hourly rate charged for the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
}

impl ServiceLineItem {
    /// Creates a service line item without an hourly rate.
    pub fn new(service_type: ServiceType, duration_minutes: u32) -> Self {
        Self {
            service_type,
            duration_minutes,
            rate: None,
        }
    }

    /// Sets the hourly rate.
    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = Some(rate);
        self
    }
}
