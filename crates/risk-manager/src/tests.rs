#[cfg(test)]
mod risk_manager_tests {
    use std::collections::HashMap;

    use approx::assert_relative_eq;

    use crate::*;

    fn settings() -> RiskSettings {
        RiskSettings::default()
    }

    #[test]
    fn within_limits_is_valid() {
        // Limits at default settings: 10k position, 2k risk
        let result = validate_trade_against_risk_settings(9_000.0, 1_500.0, &settings());
        assert!(result.valid);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn exactly_at_limit_is_valid() {
        let result = validate_trade_against_risk_settings(10_000.0, 2_000.0, &settings());
        assert!(result.valid);
    }

    #[test]
    fn position_size_violation_only() {
        let result = validate_trade_against_risk_settings(12_000.0, 1_000.0, &settings());
        assert!(!result.valid);
        assert_eq!(result.violations, vec!["Position size exceeds 10% limit"]);
    }

    #[test]
    fn risk_violation_only() {
        let result = validate_trade_against_risk_settings(5_000.0, 2_500.0, &settings());
        assert!(!result.valid);
        assert_eq!(result.violations, vec!["Risk per trade exceeds 2% limit"]);
    }

    #[test]
    fn both_violations_in_order() {
        let mut custom = settings();
        custom.max_risk_per_trade_percentage = 1.5;
        let result = validate_trade_against_risk_settings(50_000.0, 1_600.0, &custom);
        assert_eq!(
            result.violations,
            vec![
                "Position size exceeds 10% limit",
                "Risk per trade exceeds 1.5% limit"
            ]
        );
    }

    #[test]
    fn daily_loss_limit() {
        let s = settings();
        assert_relative_eq!(s.max_daily_loss_amount(), 5_000.0);
        assert!(check_daily_loss(4_999.0, &s).valid);
        assert!(check_daily_loss(5_000.0, &s).valid);

        let breached = check_daily_loss(5_200.0, &s);
        assert!(!breached.valid);
        assert_eq!(breached.violations, vec!["Daily loss exceeds 5% limit"]);
    }

    #[test]
    fn evaluate_trade_defaults_target() {
        let evaluation = evaluate_trade(&settings(), 100.0, 95.0, None).unwrap();

        assert_relative_eq!(evaluation.target_price, 105.0);
        assert_relative_eq!(evaluation.risk_reward_ratio, 1.0, epsilon = 1e-9);
        assert_eq!(evaluation.position.recommended_quantity, 400);
        // 400 shares at 100 is 40% of capital
        assert!(!evaluation.validation.valid);
        assert_eq!(
            evaluation.validation.violations,
            vec!["Position size exceeds 10% limit"]
        );
    }

    #[test]
    fn evaluate_trade_wide_stop_passes() {
        let evaluation = evaluate_trade(&settings(), 100.0, 80.0, Some(150.0)).unwrap();

        // 2000 / 20 = 100 shares => 10k position, exactly at the limit
        assert_eq!(evaluation.position.recommended_quantity, 100);
        assert_relative_eq!(evaluation.risk_reward_ratio, 2.5);
        assert!(evaluation.validation.valid);
    }

    #[test]
    fn evaluate_trade_propagates_invalid_input() {
        assert!(evaluate_trade(&settings(), 100.0, 100.0, None).is_err());
    }

    #[test]
    fn exposure_summary_falls_back_to_invested() {
        let positions = vec![
            PortfolioPosition {
                stock_symbol: "INFY".to_string(),
                quantity: 10.0,
                avg_buy_price: 1500.0,
                invested_amount: 15_000.0,
                current_value: Some(16_000.0),
                pnl: Some(1_000.0),
            },
            PortfolioPosition {
                stock_symbol: "HDFCBANK".to_string(),
                quantity: 5.0,
                avg_buy_price: 1800.0,
                invested_amount: 9_000.0,
                current_value: None,
                pnl: None,
            },
        ];

        let summary = summarize_exposure(&positions, &settings()).unwrap();
        assert_relative_eq!(summary.total_exposure, 25_000.0);
        assert_relative_eq!(summary.total_pnl, 1_000.0);
        assert_relative_eq!(summary.exposure_percentage, 25.0);
        assert_eq!(summary.position_count, 2);
    }

    #[test]
    fn exposure_summary_zero_value_uses_cost_basis() {
        let positions = vec![PortfolioPosition {
            stock_symbol: "YESBANK".to_string(),
            quantity: 50.0,
            avg_buy_price: 20.0,
            invested_amount: 1_000.0,
            current_value: Some(0.0),
            pnl: None,
        }];

        let summary = summarize_exposure(&positions, &settings()).unwrap();
        assert_relative_eq!(summary.total_exposure, 1_000.0);
        assert_relative_eq!(summary.exposure_percentage, 1.0);
    }

    #[test]
    fn exposure_summary_empty_portfolio() {
        let summary = summarize_exposure(&[], &settings()).unwrap();
        assert_relative_eq!(summary.total_exposure, 0.0);
        assert_eq!(summary.position_count, 0);
    }

    #[test]
    fn settings_validation() {
        assert!(settings().validate().is_ok());

        let mut bad = settings();
        bad.max_position_size_percentage = 150.0;
        assert!(bad.validate().is_err());

        let mut bad = settings();
        bad.total_capital = 0.0;
        assert!(bad.validate().is_err());

        let mut bad = settings();
        bad.volume_multiplier = -1.0;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn risk_appetite_parsing() {
        assert_eq!("aggressive".parse::<RiskAppetite>().unwrap(), RiskAppetite::Aggressive);
        assert_eq!(" CONSERVATIVE ".parse::<RiskAppetite>().unwrap(), RiskAppetite::Conservative);
        assert!("reckless".parse::<RiskAppetite>().is_err());
        assert_eq!(
            serde_json::to_string(&RiskAppetite::Moderate).unwrap(),
            "\"MODERATE\""
        );
    }

    #[test]
    fn settings_from_lookup_uses_defaults() {
        let loaded = settings_from_lookup(|_| None).unwrap();
        assert_eq!(loaded, RiskSettings::default());
    }

    #[test]
    fn settings_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TOTAL_CAPITAL", "250000"),
            ("MAX_RISK_PER_TRADE_PERCENT", "1"),
            ("AUTO_STOP_LOSS", "false"),
            ("RISK_APPETITE", "conservative"),
        ]
        .into_iter()
        .collect();

        let loaded = settings_from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_relative_eq!(loaded.total_capital, 250_000.0);
        assert_relative_eq!(loaded.max_risk_per_trade_percentage, 1.0);
        assert_relative_eq!(loaded.max_position_size_percentage, 10.0);
        assert!(!loaded.auto_stop_loss);
        assert_eq!(loaded.risk_appetite, RiskAppetite::Conservative);
    }

    #[test]
    fn settings_from_lookup_rejects_garbage() {
        let err = settings_from_lookup(|key| {
            (key == "VOLUME_MULTIPLIER").then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("VOLUME_MULTIPLIER"));

        let out_of_range = settings_from_lookup(|key| {
            (key == "MAX_DAILY_LOSS_PERCENT").then(|| "140".to_string())
        });
        assert!(out_of_range.is_err());
    }
}
