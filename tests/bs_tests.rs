
use bsm_lib::{
    call_price, d1, d2, default_configs, greeks, option_delta, option_gamma, option_rho,
    option_theta, option_vega, parity_residual, parse_option_type, put_price, MarketParams,
    OptionType, PricingConfig, PricingError,
};
use test_utils::{assert_greeks_close, load_reference_values, REFERENCE_VALUES};

fn price(params: &MarketParams, option_type: OptionType, config: &PricingConfig) -> f64 {
    match option_type {
        OptionType::Call => call_price(params, config).unwrap(),
        OptionType::Put => put_price(params, config).unwrap(),
    }
}

/// Reproduces the exact-CDF fixture with the polynomial CDF, within its
/// approximation error.
#[test]
fn test_reference_values_default_config() {
    let rows = load_reference_values(REFERENCE_VALUES).expect("Failed to load reference values");
    assert!(!rows.is_empty(), "fixture should not be empty");

    let config = default_configs::strict();
    for row in &rows {
        let params = row.params();
        let ty = row.option_type();
        let context = format!(
            "{} S={} K={} days={}",
            row.option_type, row.spot, row.strike, row.days
        );

        let p = price(&params, ty, &config);
        assert!((p - row.price).abs() < 1e-3, "{context}: price {p} vs {}", row.price);

        let g = greeks(&params, ty, &config).unwrap();
        assert_greeks_close(&g, &row.greeks(), 1e-3, &context);
    }
}

/// With the erf backend the fixture matches to near machine precision.
#[test]
fn test_reference_values_precise_config() {
    let rows = load_reference_values(REFERENCE_VALUES).expect("Failed to load reference values");
    let config = default_configs::precise();

    for row in &rows {
        let params = row.params();
        let ty = row.option_type();
        let context = format!("{} S={} K={}", row.option_type, row.spot, row.strike);

        let p = price(&params, ty, &config);
        assert!((p - row.price).abs() < 1e-6, "{context}: price {p} vs {}", row.price);

        // individual functions agree with the fixture too
        assert!((option_delta(&params, ty, &config).unwrap() - row.delta).abs() < 1e-6);
        assert!((option_gamma(&params, ty, &config).unwrap() - row.gamma).abs() < 1e-6);
        assert!((option_theta(&params, ty, &config).unwrap() - row.theta).abs() < 1e-6);
        assert!((option_vega(&params, ty, &config).unwrap() - row.vega).abs() < 1e-6);
        assert!((option_rho(&params, ty, &config).unwrap() - row.rho).abs() < 1e-6);
    }
}

#[test]
fn test_standard_atm_scenario() {
    let params = MarketParams::new(100.0, 100.0, 0.2, 0.05, 0.0, 365.0);
    let config = PricingConfig::default();

    let call = call_price(&params, &config).unwrap();
    let put = put_price(&params, &config).unwrap();
    assert!((call - 10.4506).abs() < 1e-3, "call = {call}");
    assert!((put - 5.5735).abs() < 1e-3, "put = {put}");

    let d1 = d1(&params, &config).unwrap();
    let d2 = d2(&params, &config).unwrap();
    assert!((d1 - 0.35).abs() < 1e-12);
    assert!((d1 - d2 - 0.2).abs() < 1e-12);
}

#[test]
fn test_put_call_parity() {
    let config = PricingConfig::default();
    for &(s, k, vol, r, q, days) in &[
        (100.0, 100.0, 0.2, 0.05, 0.0, 365.0),
        (80.0, 120.0, 0.6, 0.01, 0.04, 10.0),
        (150.0, 90.0, 0.1, -0.01, 0.0, 2000.0),
    ] {
        let params = MarketParams::new(s, k, vol, r, q, days);
        let residual = parity_residual(&params, &config).unwrap();
        assert!(residual.abs() < 1e-6, "residual {residual} for {params:?}");
    }
}

/// Near-zero volatility at the money: tiny but finite call value.
#[test]
fn test_near_zero_volatility_is_stable() {
    let params = MarketParams::new(100.0, 100.0, 0.0001, 0.0, 0.0, 365.0);
    let call = call_price(&params, &PricingConfig::default()).unwrap();
    assert!(call.is_finite());
    assert!(call >= 0.0 && call < 0.01, "call = {call}");
}

/// σ → 0⁺ with S > K converges to the discounted forward intrinsic value.
#[test]
fn test_vanishing_volatility_limit() {
    let params = MarketParams::new(110.0, 100.0, 1e-6, 0.05, 0.02, 365.0);
    let call = call_price(&params, &PricingConfig::default()).unwrap();
    let expected = 110.0 * (-0.02_f64).exp() - 100.0 * (-0.05_f64).exp();
    assert!((call - expected).abs() < 1e-6, "call {call} vs {expected}");
}

/// τ → 0⁺ converges to the payoff, and days = 0 evaluates it exactly.
#[test]
fn test_expiry_limit() {
    let config = PricingConfig::default();
    for &(spot, expected) in &[(110.0, 10.0), (90.0, 0.0)] {
        let near = MarketParams::new(spot, 100.0, 0.2, 0.05, 0.0, 1e-6);
        let call = call_price(&near, &config).unwrap();
        assert!((call - expected).abs() < 1e-3, "near-expiry call {call}");

        let at = MarketParams { days: 0.0, ..near };
        assert_eq!(call_price(&at, &config).unwrap(), expected);
    }
}

#[test]
fn test_delta_ranges() {
    let config = PricingConfig::default();
    for &spot in &[50.0, 90.0, 100.0, 110.0, 200.0] {
        let params = MarketParams::new(spot, 100.0, 0.3, 0.03, 0.02, 180.0);
        let cap = (-0.02_f64 * 180.0 / 365.0).exp();
        let call = option_delta(&params, OptionType::Call, &config).unwrap();
        let put = option_delta(&params, OptionType::Put, &config).unwrap();
        assert!((0.0..=cap).contains(&call), "call delta {call}");
        assert!((-cap..=0.0).contains(&put), "put delta {put}");
    }
}

#[test]
fn test_strict_policy_rejections() {
    let config = PricingConfig::default();
    let good = MarketParams::new(100.0, 100.0, 0.2, 0.05, 0.0, 365.0);

    for bad in [
        MarketParams { spot: -1.0, ..good },
        MarketParams { strike: 0.0, ..good },
        MarketParams { volatility: 0.0, ..good },
        MarketParams { days: -30.0, ..good },
    ] {
        let err = call_price(&bad, &config).unwrap_err();
        assert!(err.is_domain(), "expected domain error, got {err}");
    }

    assert!(matches!(
        parse_option_type("CALL", &config),
        Err(PricingError::InvalidOptionType { .. })
    ));
}

#[test]
fn test_reference_policy_propagates() {
    let config = default_configs::reference();
    let params = MarketParams::new(100.0, 100.0, 0.0, 0.05, 0.0, 365.0);
    // d1 = +inf, so N(d1) = N(d2) = 1 and the call is the discounted forward
    let call = call_price(&params, &config).unwrap();
    assert!((call - (100.0 - 100.0 * (-0.05_f64).exp())).abs() < 1e-9);
    assert!(option_gamma(&params, OptionType::Call, &config).unwrap().is_nan());
    assert_eq!(parse_option_type("Straddle", &config).unwrap(), OptionType::Call);
}

#[test]
fn test_config_from_toml() {
    let config = PricingConfig::from_toml_str(
        r#"
        days_per_year = 360.0
        cdf_method = "erf"
        case_sensitive_option_type = false
        "#,
    )
    .expect("valid config");

    assert_eq!(parse_option_type("put", &config).unwrap(), OptionType::Put);

    let params = MarketParams::new(100.0, 100.0, 0.2, 0.05, 0.0, 360.0);
    let call = call_price(&params, &config).unwrap();
    assert!((call - 10.45058357).abs() < 1e-6);
}
