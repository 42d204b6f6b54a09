//! Property tests for the payout calculator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use halo_payroll::calculation::{
    calculate_payout, calculate_payout_traced, flatten_session_record, reconstruct_session_inputs,
    summarize_payouts,
};
use halo_payroll::config::PricingConfig;
use halo_payroll::models::{
    AddOnLineItem, Location, ServiceLineItem, ServiceType, SessionInputs, SessionKind,
    SessionRecord, SurchargeKind,
};

/// Money amounts in cents, up to $500.
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..50_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn service_type() -> impl Strategy<Value = ServiceType> {
    prop_oneof![
        Just(ServiceType::Massage),
        Just(ServiceType::DeepTissue),
        Just(ServiceType::AdvancedBodywork),
        Just(ServiceType::DryBrush),
        "[a-z]{3,8}".prop_map(ServiceType::from),
    ]
}

fn service() -> impl Strategy<Value = ServiceLineItem> {
    (service_type(), 0u32..240).prop_map(|(t, minutes)| ServiceLineItem::new(t, minutes))
}

fn add_on() -> impl Strategy<Value = AddOnLineItem> {
    (0u8..3, money()).prop_map(|(kind, price)| match kind {
        0 => AddOnLineItem::generic("cupping", "Cupping", price),
        1 => AddOnLineItem::surcharge(
            "deep-tissue",
            "Deep Tissue",
            SurchargeKind::DeepTissue,
            price,
        ),
        _ => AddOnLineItem::surcharge(
            "advanced-bodywork",
            "Advanced Bodywork",
            SurchargeKind::AdvancedBodywork,
            price,
        ),
    })
}

fn session_inputs() -> impl Strategy<Value = SessionInputs> {
    (
        prop::collection::vec(service(), 0..4),
        prop::collection::vec(add_on(), 0..6),
        money(),
        any::<bool>(),
    )
        .prop_map(
            |(services, add_ons, tip_amount, client_left_review)| SessionInputs {
                services,
                add_ons,
                tip_amount,
                client_left_review,
            },
        )
}

proptest! {
    #[test]
    fn grand_total_is_sum_of_components(inputs in session_inputs()) {
        let breakdown = calculate_payout(&inputs, &PricingConfig::halo_default());
        prop_assert_eq!(breakdown.grand_total, breakdown.components_sum());
    }

    #[test]
    fn traced_and_lean_calculations_agree(inputs in session_inputs()) {
        let pricing = PricingConfig::halo_default();
        let lean = calculate_payout(&inputs, &pricing);
        let traced = calculate_payout_traced(&inputs, &pricing);

        prop_assert_eq!(lean, traced.breakdown);
        prop_assert_eq!(
            traced.audit_trace.steps.last().map(|s| s.rule_id.as_str()),
            Some("grand_total")
        );
    }

    #[test]
    fn calculation_is_deterministic(inputs in session_inputs()) {
        let pricing = PricingConfig::halo_default();
        prop_assert_eq!(
            calculate_payout(&inputs, &pricing),
            calculate_payout(&inputs.clone(), &pricing)
        );
    }

    #[test]
    fn no_component_is_negative(inputs in session_inputs()) {
        let breakdown = calculate_payout(&inputs, &PricingConfig::halo_default());
        for amount in [
            breakdown.base_pay,
            breakdown.deep_tissue_surcharge,
            breakdown.advanced_bodywork_surcharge,
            breakdown.other_add_ons_total,
            breakdown.review_bonus,
            breakdown.tips_total,
        ] {
            prop_assert!(amount >= Decimal::ZERO);
        }
    }

    #[test]
    fn tips_pass_through_unchanged(inputs in session_inputs()) {
        let breakdown = calculate_payout(&inputs, &PricingConfig::halo_default());
        prop_assert_eq!(breakdown.tips_total, inputs.tip_amount);
    }

    #[test]
    fn summary_is_additive(sessions in prop::collection::vec(session_inputs(), 0..8)) {
        let pricing = PricingConfig::halo_default();
        let breakdowns: Vec<_> = sessions.iter().map(|s| calculate_payout(s, &pricing)).collect();

        let summary = summarize_payouts(&breakdowns);
        let expected: Decimal = breakdowns.iter().map(|b| b.grand_total).sum();

        prop_assert_eq!(summary.session_count, sessions.len());
        prop_assert_eq!(summary.totals.grand_total, expected);
        prop_assert_eq!(summary.totals.grand_total, summary.totals.components_sum());
    }

    #[test]
    fn exact_tiers_ignore_service_type(t in service_type(), tier in 0usize..3) {
        let pricing = PricingConfig::halo_default();
        let (minutes, payout) = [(60, Decimal::new(50, 0)), (90, Decimal::new(70, 0)), (120, Decimal::new(95, 0))][tier];

        let inputs = SessionInputs {
            services: vec![ServiceLineItem::new(t, minutes)],
            ..SessionInputs::default()
        };
        prop_assert_eq!(calculate_payout(&inputs, &pricing).base_pay, payout);
    }

    #[test]
    fn flattened_row_reproduces_single_service_payout(
        t in prop_oneof![Just(ServiceType::Massage), Just(ServiceType::DryBrush)],
        minutes in prop_oneof![Just(60u32), Just(90), Just(120)],
        add_ons in prop::collection::vec(add_on(), 0..4),
        tips in money(),
        review in any::<bool>(),
    ) {
        let pricing = PricingConfig::halo_default();
        let record = SessionRecord {
            id: "p1".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
            location: Location::Halo,
            services: vec![ServiceLineItem::new(t, minutes)],
            add_ons,
            tips,
            kind: SessionKind::BonusEligible { client_left_review: review },
        };

        let original = calculate_payout(&record.payout_inputs(), &pricing);
        let row = flatten_session_record(&record, &original);
        let recomputed = calculate_payout(&reconstruct_session_inputs(&row), &pricing);

        prop_assert_eq!(recomputed, original);
    }
}
