use bsm_lib::{call_price, default_configs, parse_option_type, MarketParams, PricingConfig};

fn main() {
    let at_expiry = MarketParams::new(105.0, 100.0, 0.2, 0.05, 0.0, 0.0);
    let zero_vol = MarketParams::new(100.0, 100.0, 0.0, 0.05, 0.0, 365.0);

    println!("bsm-lib Default Configuration Examples\n");

    let presets: [(&str, PricingConfig); 3] = [
        ("Strict (hardened defaults)", default_configs::strict()),
        ("Reference (spreadsheet-compatible)", default_configs::reference()),
        ("Precise (libm erf)", default_configs::precise()),
    ];

    for (i, (name, config)) in presets.iter().enumerate() {
        println!("{}. {}:", i + 1, name);
        println!("   Days per year: {}", config.days_per_year);
        println!("   CDF method: {:?}", config.cdf_method);
        println!("   Validation: {:?}", config.validation);
        println!("   Theta: {:?}", config.theta_convention);

        match call_price(&at_expiry, config) {
            Ok(price) => println!("   Call at expiry: {:.4}", price),
            Err(e) => println!("   Call at expiry: error: {}", e),
        }
        match call_price(&zero_vol, config) {
            Ok(price) => println!("   Call with zero vol: {:.4}", price),
            Err(e) => println!("   Call with zero vol: error: {}", e),
        }
        match parse_option_type("call", config) {
            Ok(ty) => println!("   \"call\" parses as: {}\n", ty),
            Err(e) => println!("   \"call\" parses as: error: {}\n", e),
        }
    }

    println!("Loading a config from TOML...");
    let source = r#"
        days_per_year = 360.0
        theta_convention = "per_day"
    "#;
    match PricingConfig::from_toml_str(source) {
        Ok(config) => println!("   {:?}", config),
        Err(e) => println!("   failed: {}", e),
    }
}
