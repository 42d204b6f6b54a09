//! Calculation result models for the payroll engine.
//!
//! This module contains the [`CalculationResult`] type returned by the API,
//! wrapping a [`PayoutBreakdown`] with identifiers and an audit trace of
//! every pricing rule that was applied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayoutBreakdown;

/// A single step in the audit trace recording a pricing decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag degenerate input that was priced permissively (an
/// off-table duration, an unknown service type) rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use halo_payroll::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The result of a payout calculation as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The session the calculation is for, when the caller supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// The payout breakdown at full precision.
    pub breakdown: PayoutBreakdown,
    /// Complete audit trace of pricing decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_step(step_number: u32) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: "base_pay_tier".to_string(),
            rule_name: "Base Pay Tier".to_string(),
            input: serde_json::json!({"duration_minutes": 60}),
            output: serde_json::json!({"amount": "50"}),
            reasoning: "60 minutes matches the 60-minute tier: $50".to_string(),
        }
    }

    #[test]
    fn test_audit_step_serialization() {
        let json = serde_json::to_string(&sample_step(1)).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"base_pay_tier\""));
        assert!(json.contains("\"rule_name\":\"Base Pay Tier\""));
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "OFF_TIER_DURATION".to_string(),
            message: "75 minutes is not a priced tier".to_string(),
            severity: "low".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"OFF_TIER_DURATION\""));
        assert!(json.contains("\"severity\":\"low\""));
    }

    #[test]
    fn test_calculation_result_serialization() {
        let result = CalculationResult {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2026-02-02T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            session_id: None,
            breakdown: PayoutBreakdown {
                base_pay: dec("50"),
                grand_total: dec("50"),
                ..PayoutBreakdown::default()
            },
            audit_trace: AuditTrace {
                steps: vec![sample_step(1)],
                warnings: vec![],
                duration_us: 3,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"breakdown\":{"));
        assert!(json.contains("\"audit_trace\":{"));
        assert!(!json.contains("session_id"));

        let back: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_audit_steps_ordered() {
        let trace = AuditTrace {
            steps: vec![sample_step(1), sample_step(2), sample_step(3)],
            warnings: vec![],
            duration_us: 10,
        };

        let step_numbers: Vec<u32> = trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(step_numbers, vec![1, 2, 3]);
    }
}
