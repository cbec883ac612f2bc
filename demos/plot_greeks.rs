// Example: plot_greeks.rs
// Plots call/put prices and deltas against spot for a fixed strike and writes
// them to greeks.svg.
//
// Usage:
//     cargo run --example plot_greeks -- [strike] [volatility] [days]

use std::env;
use std::error::Error;

use bsm_lib::{greeks, BlackScholesModel, MarketParams, OptionType, PricingConfig};
use plotters::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let strike: f64 = args.get(1).map(|s| s.parse()).transpose()?.unwrap_or(100.0);
    let volatility: f64 = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(0.25);
    let days: f64 = args.get(3).map(|s| s.parse()).transpose()?.unwrap_or(90.0);

    let config = PricingConfig::default();
    let model = BlackScholesModel::new(config.clone())?;
    let base = MarketParams::new(strike, strike, volatility, 0.03, 0.0, days);

    let spot_min = strike * 0.5;
    let spot_max = strike * 1.5;
    let steps = 200;

    let mut call_line = Vec::with_capacity(steps + 1);
    let mut put_line = Vec::with_capacity(steps + 1);
    let mut call_delta = Vec::with_capacity(steps + 1);
    let mut put_delta = Vec::with_capacity(steps + 1);

    for i in 0..=steps {
        let spot = spot_min + (spot_max - spot_min) * (i as f64) / (steps as f64);
        let params = base.with_spot(spot);
        call_line.push((spot, model.call_price(&params)?));
        put_line.push((spot, model.put_price(&params)?));
        call_delta.push((spot, greeks(&params, OptionType::Call, &config)?.delta));
        put_delta.push((spot, greeks(&params, OptionType::Put, &config)?.delta));
    }

    let y_max = call_line
        .iter()
        .chain(put_line.iter())
        .map(|(_, p)| *p)
        .fold(0.0_f64, f64::max)
        * 1.05;

    let root = SVGBackend::new("greeks.svg", (1280, 1024)).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically(512);

    let mut price_chart = ChartBuilder::on(&upper)
        .margin(20)
        .caption(
            format!("Black-Scholes prices | K={strike}, vol={volatility}, {days}d"),
            ("sans-serif", 28),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(spot_min..spot_max, 0.0..y_max)?;
    price_chart
        .configure_mesh()
        .x_desc("Spot")
        .y_desc("Price")
        .draw()?;
    price_chart
        .draw_series(LineSeries::new(call_line, RED))?
        .label("Call")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    price_chart
        .draw_series(LineSeries::new(put_line, BLUE))?
        .label("Put")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    price_chart.configure_series_labels().border_style(BLACK).draw()?;

    let mut delta_chart = ChartBuilder::on(&lower)
        .margin(20)
        .caption("Delta", ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(spot_min..spot_max, -1.05..1.05)?;
    delta_chart
        .configure_mesh()
        .x_desc("Spot")
        .y_desc("Delta")
        .draw()?;
    delta_chart.draw_series(LineSeries::new(call_delta, RED))?;
    delta_chart.draw_series(LineSeries::new(put_delta, BLUE))?;

    root.present()?;
    println!("Chart saved to greeks.svg");
    Ok(())
}
