// demos/pricing_demo.rs

//! Demonstration of single-option pricing, Greeks and batch pricing
//!
//! This example shows how to:
//! 1. Price one option through the typed API
//! 2. Compute its Greeks
//! 3. Evaluate the same option through the spreadsheet functions
//! 4. Price a batch of quotes, including a malformed row

use anyhow::Result;
use bsm_lib::sheet::{CALLPRICE, OPTIONDELTA};
use bsm_lib::{
    call_price, default_configs, greeks, price_quotes, put_price, BlackScholesModel,
    FixedParameters, MarketParams, OptionQuote, OptionType,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    println!("Black-Scholes-Merton Pricing Demo");
    println!("=================================");

    let params = MarketParams::new(100.0, 100.0, 0.2, 0.05, 0.0, 365.0);
    let config = default_configs::strict();

    println!("\nStep 1: Pricing a 1y ATM option...");
    let call = call_price(&params, &config)?;
    let put = put_price(&params, &config)?;
    println!("  Call: {:.4}", call);
    println!("  Put:  {:.4}", put);

    println!("\nStep 2: Greeks");
    for ty in [OptionType::Call, OptionType::Put] {
        let g = greeks(&params, ty, &config)?;
        println!(
            "  {:<4} delta={:+.4} gamma={:.4} theta={:+.4} vega={:.4} rho={:+.4}",
            ty.to_string(), g.delta, g.gamma, g.theta, g.vega, g.rho
        );
    }

    println!("\nStep 3: Spreadsheet functions");
    println!(
        "  =CALLPRICE(100, 100, 0.2, 0.05, 0, 365)          -> {:.4}",
        CALLPRICE(100.0, 100.0, 0.2, 0.05, 0.0, 365.0)
    );
    println!(
        "  =OPTIONDELTA(100, 100, 0.2, 0.05, 0, 365, \"Put\") -> {:.4}",
        OPTIONDELTA(100.0, 100.0, 0.2, 0.05, 0.0, 365.0, "Put")
    );

    println!("\nStep 4: Batch pricing...");
    let model = BlackScholesModel::new(config)?;
    let quotes = create_demo_quotes();
    let fixed_params = FixedParameters { r: 0.05, q: 0.01 };
    let results = price_quotes(&model, &quotes, fixed_params);

    println!(
        "{:<6} {:<8} {:<10} {:<10} {}",
        "Type", "Strike", "Price", "Delta", "Error"
    );
    println!("{}", "-".repeat(50));
    for result in &results {
        println!(
            "{:<6} {:<8.1} {:<10} {:<10} {}",
            result.option_type,
            result.strike_price,
            result.model_price.map_or("-".to_string(), |p| format!("{p:.4}")),
            result.greeks.map_or("-".to_string(), |g| format!("{:+.4}", g.delta)),
            result.error.as_deref().unwrap_or("")
        );
    }

    let priced = results.iter().filter(|r| r.is_ok()).count();
    println!("\n  Priced {} of {} quotes", priced, results.len());

    Ok(())
}

/// Create a small option chain around spot 100
fn create_demo_quotes() -> Vec<OptionQuote> {
    let underlying_price = 100.0;
    let days_to_exp = 90.0;

    let option_data = vec![
        (90.0, 0.24, "Put"),
        (95.0, 0.22, "Put"),
        (100.0, 0.20, "Call"),
        (100.0, 0.20, "Put"),
        (105.0, 0.19, "Call"),
        (110.0, 0.19, "Call"),
        (115.0, 0.20, "Straddle"), // rejected under the strict policy
    ];

    option_data
        .into_iter()
        .map(|(strike, volatility, option_type)| OptionQuote {
            option_type: option_type.to_string(),
            strike_price: strike,
            underlying_price,
            volatility,
            days_to_exp,
        })
        .collect()
}
