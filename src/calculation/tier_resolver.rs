//! Duration tier resolution.
//!
//! This module maps a service duration to its base pay using the tier
//! table of the [`PricingConfig`]. Durations on a tier are paid the tier
//! payout; anything else is paid pro rata at the hourly rate of the
//! closest tier.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::{PricingConfig, PricingTier};
use crate::models::{AuditStep, ServiceLineItem};

/// How a duration was matched against the tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TierMatch {
    /// The duration is exactly a tier length.
    Exact,
    /// The duration was scaled from the closest tier.
    Nearest,
    /// The tier table is empty.
    NoTiers,
}

/// The outcome of resolving one duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierResolution {
    /// The tier used, if any.
    pub tier: Option<PricingTier>,
    /// How the tier was chosen.
    pub match_kind: TierMatch,
    /// Hourly rate of the tier used (zero without a tier).
    pub hourly_rate: Decimal,
    /// Base pay for the duration, at full precision.
    pub amount: Decimal,
}

/// The result of calculating base pay for a service, including the audit step.
#[derive(Debug, Clone)]
pub struct BasePayResult {
    /// The base pay for the service.
    pub amount: Decimal,
    /// How the duration was resolved.
    pub resolution: TierResolution,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Resolves a duration against a tier table sorted by minutes.
///
/// Exact matches return the tier payout unchanged. Otherwise the tier with
/// the smallest distance to `duration_minutes` is used; on a tie the
/// shorter tier wins. The pro-rata amount is `payout * duration / minutes`.
///
/// # Examples
///
/// ```
/// use halo_payroll::calculation::{TierMatch, resolve_tier};
/// use halo_payroll::config::PricingConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pricing = PricingConfig::halo_default();
///
/// let exact = resolve_tier(90, pricing.tiers());
/// assert_eq!(exact.match_kind, TierMatch::Exact);
/// assert_eq!(exact.amount, Decimal::from_str("70.00").unwrap());
///
/// // 75 minutes is equally far from 60 and 90; the 60-minute tier wins.
/// let tied = resolve_tier(75, pricing.tiers());
/// assert_eq!(tied.tier.unwrap().minutes, 60);
/// assert_eq!(tied.amount, Decimal::from_str("62.5").unwrap());
/// ```
pub fn resolve_tier(duration_minutes: u32, tiers: &[PricingTier]) -> TierResolution {
    if let Some(tier) = tiers.iter().find(|t| t.minutes == duration_minutes) {
        return TierResolution {
            tier: Some(*tier),
            match_kind: TierMatch::Exact,
            hourly_rate: tier.hourly_rate(),
            amount: tier.payout,
        };
    }

    let mut closest: Option<&PricingTier> = None;
    for tier in tiers {
        let is_closer = match closest {
            None => true,
            Some(best) => {
                tier.minutes.abs_diff(duration_minutes) < best.minutes.abs_diff(duration_minutes)
            }
        };
        if is_closer {
            closest = Some(tier);
        }
    }

    match closest {
        Some(tier) => TierResolution {
            tier: Some(*tier),
            match_kind: TierMatch::Nearest,
            hourly_rate: tier.hourly_rate(),
            amount: tier.payout * Decimal::from(duration_minutes) / Decimal::from(tier.minutes),
        },
        None => TierResolution {
            tier: None,
            match_kind: TierMatch::NoTiers,
            hourly_rate: Decimal::ZERO,
            amount: Decimal::ZERO,
        },
    }
}

/// Returns the base pay for a duration under `pricing`.
pub fn resolve_base_pay(duration_minutes: u32, pricing: &PricingConfig) -> Decimal {
    resolve_tier(duration_minutes, pricing.tiers()).amount
}

/// Calculates base pay for one service line.
///
/// The service type has no effect here; specialised types are paid through
/// their surcharge.
///
/// # Arguments
///
/// * `service` - The service line to price
/// * `pricing` - The pricing configuration holding the tier table
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_base_pay(
    service: &ServiceLineItem,
    pricing: &PricingConfig,
    step_number: u32,
) -> BasePayResult {
    let duration = service.duration_minutes;
    let resolution = resolve_tier(duration, pricing.tiers());

    let reasoning = match (resolution.match_kind, resolution.tier) {
        (TierMatch::Exact, Some(tier)) => format!(
            "{} minutes matches the {}-minute tier: ${}",
            duration,
            tier.minutes,
            tier.payout.normalize()
        ),
        (TierMatch::Nearest, Some(tier)) => format!(
            "{} minutes is not a tier; closest is {} minutes at ${}/hour: ${}",
            duration,
            tier.minutes,
            resolution.hourly_rate.round_dp(4).normalize(),
            resolution.amount.round_dp(4).normalize()
        ),
        _ => "No pricing tiers configured - base pay is $0".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_pay_tier".to_string(),
        rule_name: "Base Pay Tier".to_string(),
        input: serde_json::json!({
            "service_type": service.service_type.as_str(),
            "duration_minutes": duration
        }),
        output: serde_json::json!({
            "match": resolution.match_kind,
            "tier_minutes": resolution.tier.map(|t| t.minutes),
            "hourly_rate": resolution.hourly_rate.to_string(),
            "amount": resolution.amount.to_string()
        }),
        reasoning,
    };

    BasePayResult {
        amount: resolution.amount,
        resolution,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BusinessMetadata, PricingFile, ServiceSurcharges};
    use crate::models::ServiceType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn pricing() -> PricingConfig {
        PricingConfig::halo_default()
    }

    fn empty_pricing() -> PricingConfig {
        PricingConfig::new(
            BusinessMetadata {
                code: "halo".to_string(),
                name: "Halo Therapies".to_string(),
                version: "test".to_string(),
            },
            PricingFile {
                tiers: vec![],
                surcharges: ServiceSurcharges {
                    deep_tissue: dec("7.50"),
                    advanced_bodywork: dec("12.50"),
                },
                review_bonus: dec("5.00"),
            },
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_exact_tiers() {
        let pricing = pricing();
        assert_eq!(resolve_base_pay(60, &pricing), dec("50.00"));
        assert_eq!(resolve_base_pay(90, &pricing), dec("70.00"));
        assert_eq!(resolve_base_pay(120, &pricing), dec("95.00"));
    }

    #[test]
    fn test_tie_resolves_to_lower_tier() {
        let resolution = resolve_tier(75, pricing().tiers());

        assert_eq!(resolution.match_kind, TierMatch::Nearest);
        assert_eq!(resolution.tier.unwrap().minutes, 60);
        assert_eq!(resolution.hourly_rate, dec("50"));
        assert_eq!(resolution.amount, dec("62.50"));
    }

    #[test]
    fn test_105_minutes_ties_to_90_minute_tier() {
        let resolution = resolve_tier(105, pricing().tiers());

        assert_eq!(resolution.tier.unwrap().minutes, 90);
        // 70 * 105 / 90
        assert_eq!(resolution.amount.round_dp(2), dec("81.67"));
    }

    #[test]
    fn test_short_session_scaled_from_60_minute_tier() {
        assert_eq!(resolve_base_pay(30, &pricing()), dec("25"));
        assert_eq!(resolve_base_pay(45, &pricing()), dec("37.5"));
    }

    #[test]
    fn test_long_session_scaled_from_120_minute_tier() {
        let amount = resolve_base_pay(150, &pricing());
        // 95 * 150 / 120
        assert_eq!(amount, dec("118.75"));
    }

    #[test]
    fn test_zero_duration_is_zero_pay() {
        let resolution = resolve_tier(0, pricing().tiers());
        assert_eq!(resolution.match_kind, TierMatch::Nearest);
        assert_eq!(resolution.amount, Decimal::ZERO);
    }

    #[test]
    fn test_extreme_duration_does_not_panic() {
        let amount = resolve_base_pay(u32::MAX, &pricing());
        assert!(amount > Decimal::ZERO);
    }

    #[test]
    fn test_empty_tier_table_yields_zero() {
        let resolution = resolve_tier(60, empty_pricing().tiers());
        assert_eq!(resolution.match_kind, TierMatch::NoTiers);
        assert_eq!(resolution.amount, Decimal::ZERO);
        assert!(resolution.tier.is_none());
    }

    #[test]
    fn test_base_pay_ignores_service_type() {
        let pricing = pricing();
        for service_type in [
            ServiceType::Massage,
            ServiceType::DeepTissue,
            ServiceType::AdvancedBodywork,
            ServiceType::DryBrush,
            ServiceType::Other("reiki".to_string()),
        ] {
            let service = ServiceLineItem::new(service_type, 90);
            assert_eq!(calculate_base_pay(&service, &pricing, 1).amount, dec("70.00"));
        }
    }

    #[test]
    fn test_base_pay_audit_step_format() {
        let service = ServiceLineItem::new(ServiceType::Massage, 75);
        let result = calculate_base_pay(&service, &pricing(), 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "base_pay_tier");
        assert_eq!(result.audit_step.output["match"], "nearest");
        assert_eq!(result.audit_step.output["tier_minutes"], 60);
        assert!(result.audit_step.reasoning.contains("closest is 60 minutes"));
    }

    #[test]
    fn test_exact_audit_reasoning() {
        let service = ServiceLineItem::new(ServiceType::Massage, 120);
        let result = calculate_base_pay(&service, &pricing(), 1);

        assert_eq!(
            result.audit_step.reasoning,
            "120 minutes matches the 120-minute tier: $95"
        );
    }
}
