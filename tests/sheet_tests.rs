
use bsm_lib::sheet::{
    CALLPRICE, OPTIONDELTA, OPTIONGAMMA, OPTIONRHO, OPTIONTHETA, OPTIONVEGA, PUTPRICE,
};
use test_utils::{load_reference_values, REFERENCE_VALUES};

/// Every worksheet function reproduces the fixture through the
/// positional-argument interface.
#[test]
fn test_sheet_functions_match_reference_values() {
    let rows = load_reference_values(REFERENCE_VALUES).expect("Failed to load reference values");

    for row in &rows {
        let args = (row.spot, row.strike, row.volatility, row.rate, row.dividend, row.days);
        let ty = row.option_type.as_str();

        let price = match ty {
            "Put" => PUTPRICE(args.0, args.1, args.2, args.3, args.4, args.5),
            _ => CALLPRICE(args.0, args.1, args.2, args.3, args.4, args.5),
        };
        assert!(
            (price - row.price).abs() < 1e-3,
            "{ty} K={}: {price} vs {}",
            row.strike,
            row.price
        );

        let delta = OPTIONDELTA(args.0, args.1, args.2, args.3, args.4, args.5, ty);
        let gamma = OPTIONGAMMA(args.0, args.1, args.2, args.3, args.4, args.5, ty);
        let theta = OPTIONTHETA(args.0, args.1, args.2, args.3, args.4, args.5, ty);
        let vega = OPTIONVEGA(args.0, args.1, args.2, args.3, args.4, args.5, ty);
        let rho = OPTIONRHO(args.0, args.1, args.2, args.3, args.4, args.5, ty);

        assert!((delta - row.delta).abs() < 1e-6);
        assert!((gamma - row.gamma).abs() < 1e-6);
        assert!((theta - row.theta).abs() < 1e-3);
        assert!((vega - row.vega).abs() < 1e-3);
        assert!((rho - row.rho).abs() < 1e-3);
    }
}

/// Gamma and vega ignore the option type; theta and rho depend on it.
#[test]
fn test_type_dependence() {
    let args = (100.0, 105.0, 0.25, 0.03, 0.01, 90.0);
    let g_call = OPTIONGAMMA(args.0, args.1, args.2, args.3, args.4, args.5, "Call");
    let g_put = OPTIONGAMMA(args.0, args.1, args.2, args.3, args.4, args.5, "Put");
    assert_eq!(g_call, g_put);

    let v_call = OPTIONVEGA(args.0, args.1, args.2, args.3, args.4, args.5, "Call");
    let v_put = OPTIONVEGA(args.0, args.1, args.2, args.3, args.4, args.5, "Put");
    assert_eq!(v_call, v_put);

    let r_call = OPTIONRHO(args.0, args.1, args.2, args.3, args.4, args.5, "Call");
    let r_put = OPTIONRHO(args.0, args.1, args.2, args.3, args.4, args.5, "Put");
    assert!(r_call > 0.0 && r_put < 0.0);

    let t_call = OPTIONTHETA(args.0, args.1, args.2, args.3, args.4, args.5, "Call");
    let t_put = OPTIONTHETA(args.0, args.1, args.2, args.3, args.4, args.5, "Put");
    assert_ne!(t_call, t_put);
}

/// The worksheet layer keeps reference semantics: no validation.
#[test]
fn test_sheet_does_not_validate() {
    // negative strike: ln of a negative ratio is NaN
    assert!(CALLPRICE(100.0, -100.0, 0.2, 0.05, 0.0, 365.0).is_nan());
    // negative days: sqrt of a negative time is NaN
    assert!(PUTPRICE(100.0, 100.0, 0.2, 0.05, 0.0, -10.0).is_nan());
    // lower-case "put" is not "Put", so it is priced as a call
    let as_call = OPTIONRHO(100.0, 100.0, 0.2, 0.05, 0.0, 365.0, "put");
    assert!(as_call > 0.0);
}
