//! Add-on line items.
//!
//! An add-on and a service-type surcharge entered through the add-on picker
//! look the same on the wire (`id`, `name`, `price`, optional code). They are
//! told apart once, when the record is deserialized, and carried as distinct
//! variants of [`AddOnLineItem`] from then on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The service-type surcharges that can also arrive as add-ons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurchargeKind {
    /// Deep tissue / sports / lymphatic.
    DeepTissue,
    /// Advanced bodywork.
    AdvancedBodywork,
}

impl SurchargeKind {
    /// Parses a surcharge code (`deep-tissue`, `advanced-bodywork`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "deep-tissue" => Some(SurchargeKind::DeepTissue),
            "advanced-bodywork" => Some(SurchargeKind::AdvancedBodywork),
            _ => None,
        }
    }

    /// Returns the surcharge code.
    pub fn code(self) -> &'static str {
        match self {
            SurchargeKind::DeepTissue => "deep-tissue",
            SurchargeKind::AdvancedBodywork => "advanced-bodywork",
        }
    }

    /// Returns the name shown for this surcharge in the add-on picker.
    pub fn display_name(self) -> &'static str {
        match self {
            SurchargeKind::DeepTissue => "Deep Tissue / Sports / Lymphatic",
            SurchargeKind::AdvancedBodywork => "Advanced Bodywork",
        }
    }
}

/// An extra charged on top of the base service.
///
/// # Example
///
/// ```
/// use halo_payroll::models::{AddOnLineItem, SurchargeKind};
///
/// let json = r#"{"id": "dt-1", "name": "Deep Tissue", "price": "7.50", "surcharge_code": "deep-tissue"}"#;
/// let add_on: AddOnLineItem = serde_json::from_str(json).unwrap();
/// assert_eq!(add_on.surcharge_kind(), Some(SurchargeKind::DeepTissue));
///
/// let json = r#"{"name": "Cupping", "price": "12.50"}"#;
/// let add_on: AddOnLineItem = serde_json::from_str(json).unwrap();
/// assert_eq!(add_on.surcharge_kind(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AddOnWire", into = "AddOnWire")]
pub enum AddOnLineItem {
    /// A generically priced add-on (cupping, hot stones, ...).
    Generic {
        /// Identifier of the add-on entry.
        id: String,
        /// Display name.
        name: String,
        /// Price paid out to the therapist.
        price: Decimal,
    },
    /// A service-type surcharge entered through the add-on picker.
    Surcharge {
        /// Identifier of the add-on entry.
        id: String,
        /// Display name.
        name: String,
        /// Which surcharge this entry represents.
        kind: SurchargeKind,
        /// Price paid out to the therapist.
        price: Decimal,
    },
}

impl AddOnLineItem {
    /// Creates a generic add-on.
    pub fn generic(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        AddOnLineItem::Generic {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Creates a surcharge add-on.
    pub fn surcharge(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: SurchargeKind,
        price: Decimal,
    ) -> Self {
        AddOnLineItem::Surcharge {
            id: id.into(),
            name: name.into(),
            kind,
            price,
        }
    }

    /// Returns the entry identifier.
    pub fn id(&self) -> &str {
        match self {
            AddOnLineItem::Generic { id, .. } | AddOnLineItem::Surcharge { id, .. } => id,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        match self {
            AddOnLineItem::Generic { name, .. } | AddOnLineItem::Surcharge { name, .. } => name,
        }
    }

    /// Returns the price.
    pub fn price(&self) -> Decimal {
        match self {
            AddOnLineItem::Generic { price, .. } | AddOnLineItem::Surcharge { price, .. } => *price,
        }
    }

    /// Returns the surcharge kind for surcharge entries.
    pub fn surcharge_kind(&self) -> Option<SurchargeKind> {
        match self {
            AddOnLineItem::Generic { .. } => None,
            AddOnLineItem::Surcharge { kind, .. } => Some(*kind),
        }
    }
}

/// The flat wire shape shared by add-ons and surcharge entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AddOnWire {
    #[serde(default, deserialize_with = "super::null_as_default")]
    id: String,
    #[serde(default, alias = "display_name", deserialize_with = "super::null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    surcharge_code: Option<String>,
    #[serde(default, rename = "haloCode", skip_serializing)]
    halo_code: Option<String>,
}

impl AddOnWire {
    /// Returns the first non-empty code, `surcharge_code` before `haloCode`.
    fn code(&self) -> Option<&str> {
        [&self.surcharge_code, &self.halo_code]
            .into_iter()
            .filter_map(|code| code.as_deref())
            .find(|code| !code.is_empty())
    }
}

impl From<AddOnWire> for AddOnLineItem {
    fn from(wire: AddOnWire) -> Self {
        // Entries saved before the code field existed used the catalog id itself.
        let kind = match wire.code() {
            Some(code) => SurchargeKind::from_code(code),
            None => SurchargeKind::from_code(&wire.id),
        };

        match kind {
            Some(kind) => AddOnLineItem::Surcharge {
                id: wire.id,
                name: wire.name,
                kind,
                price: wire.price,
            },
            None => AddOnLineItem::Generic {
                id: wire.id,
                name: wire.name,
                price: wire.price,
            },
        }
    }
}

impl From<AddOnLineItem> for AddOnWire {
    fn from(item: AddOnLineItem) -> Self {
        match item {
            AddOnLineItem::Generic { id, name, price } => AddOnWire {
                id,
                name,
                price,
                surcharge_code: None,
                halo_code: None,
            },
            AddOnLineItem::Surcharge {
                id,
                name,
                kind,
                price,
            } => AddOnWire {
                id,
                name,
                price,
                surcharge_code: Some(kind.code().to_string()),
                halo_code: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_surcharge_code_resolves_to_surcharge_variant() {
        let json = r#"{"id": "advanced-bodywork-1700000000", "name": "Advanced Bodywork", "price": "12.50", "surcharge_code": "advanced-bodywork"}"#;
        let add_on: AddOnLineItem = serde_json::from_str(json).unwrap();

        assert_eq!(
            add_on,
            AddOnLineItem::surcharge(
                "advanced-bodywork-1700000000",
                "Advanced Bodywork",
                SurchargeKind::AdvancedBodywork,
                dec("12.50"),
            )
        );
    }

    #[test]
    fn test_catalog_code_for_generic_add_on_stays_generic() {
        let json = r#"{"id": "cupping-1", "name": "Cupping", "price": "12.50", "surcharge_code": "cupping"}"#;
        let add_on: AddOnLineItem = serde_json::from_str(json).unwrap();

        assert_eq!(add_on.surcharge_kind(), None);
        assert_eq!(add_on.price(), dec("12.50"));
    }

    #[test]
    fn test_legacy_halo_code_alias() {
        let json = r#"{"id": "dt-1", "name": "Deep Tissue", "price": "7.50", "haloCode": "deep-tissue"}"#;
        let add_on: AddOnLineItem = serde_json::from_str(json).unwrap();

        assert_eq!(add_on.surcharge_kind(), Some(SurchargeKind::DeepTissue));
    }

    #[test]
    fn test_both_code_fields_accepted() {
        let json = r#"{"id": "x-1", "name": "Deep Tissue", "price": "7.50", "surcharge_code": "deep-tissue", "haloCode": "advanced-bodywork"}"#;
        let add_on: AddOnLineItem = serde_json::from_str(json).unwrap();

        assert_eq!(add_on.surcharge_kind(), Some(SurchargeKind::DeepTissue));
    }

    #[test]
    fn test_empty_code_falls_back_to_id() {
        let json = r#"{"id": "deep-tissue", "name": "Deep Tissue", "price": "7.50", "haloCode": ""}"#;
        let add_on: AddOnLineItem = serde_json::from_str(json).unwrap();
        assert_eq!(add_on.surcharge_kind(), Some(SurchargeKind::DeepTissue));

        let json = r#"{"id": "advanced-bodywork", "price": "12.50", "surcharge_code": "", "haloCode": null}"#;
        let add_on: AddOnLineItem = serde_json::from_str(json).unwrap();
        assert_eq!(add_on.surcharge_kind(), Some(SurchargeKind::AdvancedBodywork));
    }

    #[test]
    fn test_id_used_when_code_missing() {
        let json = r#"{"id": "deep-tissue", "name": "Deep Tissue", "price": "7.50"}"#;
        let add_on: AddOnLineItem = serde_json::from_str(json).unwrap();

        assert_eq!(add_on.surcharge_kind(), Some(SurchargeKind::DeepTissue));
    }

    #[test]
    fn test_id_ignored_when_code_present() {
        let json = r#"{"id": "deep-tissue", "name": "Balance Bomb", "price": "5.00", "surcharge_code": "balance-bomb"}"#;
        let add_on: AddOnLineItem = serde_json::from_str(json).unwrap();

        assert_eq!(add_on.surcharge_kind(), None);
    }

    #[test]
    fn test_missing_price_is_zero() {
        let add_on: AddOnLineItem = serde_json::from_str(r#"{"name": "Mystery"}"#).unwrap();
        assert_eq!(add_on.price(), Decimal::ZERO);

        let add_on: AddOnLineItem =
            serde_json::from_str(r#"{"name": "Mystery", "price": null}"#).unwrap();
        assert_eq!(add_on.price(), Decimal::ZERO);
    }

    #[test]
    fn test_surcharge_serializes_with_code() {
        let add_on = AddOnLineItem::surcharge(
            "dt-1",
            SurchargeKind::DeepTissue.display_name(),
            SurchargeKind::DeepTissue,
            dec("7.50"),
        );
        let json = serde_json::to_string(&add_on).unwrap();

        assert!(json.contains("\"surcharge_code\":\"deep-tissue\""));
        assert!(json.contains("\"price\":\"7.50\""));
    }

    #[test]
    fn test_generic_serializes_without_code() {
        let add_on = AddOnLineItem::generic("c-1", "Cupping", dec("12.50"));
        let json = serde_json::to_string(&add_on).unwrap();

        assert!(!json.contains("surcharge_code"));
        assert!(json.contains("\"name\":\"Cupping\""));
    }

    #[test]
    fn test_surcharge_kind_codes() {
        assert_eq!(
            SurchargeKind::from_code("deep-tissue"),
            Some(SurchargeKind::DeepTissue)
        );
        assert_eq!(SurchargeKind::from_code("massage"), None);
        assert_eq!(SurchargeKind::AdvancedBodywork.code(), "advanced-bodywork");
    }
}
