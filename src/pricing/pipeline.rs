use crate::error::Result;
use crate::market_params::MarketParams;
use crate::models::traits::PricingModel;
use crate::pricing::types::{FixedParameters, Greeks, OptionQuote, PricingResult};

/// Price and risk one quote. Option type resolution and input validation
/// follow the model's policy.
pub fn price_quote(
    model: &dyn PricingModel,
    quote: &OptionQuote,
    fixed_params: FixedParameters,
) -> Result<(f64, Greeks)> {
    let option_type = model.resolve_option_type(&quote.option_type)?;
    let params = MarketParams::new(
        quote.underlying_price,
        quote.strike_price,
        quote.volatility,
        fixed_params.r,
        fixed_params.q,
        quote.days_to_exp,
    );

    let price = model.price(&params, option_type)?;
    let greeks = model.greeks(&params, option_type)?;
    Ok((price, greeks))
}

/// Price a batch of quotes sharing the same rates.
///
/// A row that fails is reported in its [`PricingResult::error`] and does not
/// stop the rest of the batch. Results are sorted by strike price in
/// ascending order.
pub fn price_quotes(
    model: &dyn PricingModel,
    quotes: &[OptionQuote],
    fixed_params: FixedParameters,
) -> Vec<PricingResult> {
    tracing::debug!(
        model = model.model_name(),
        rows = quotes.len(),
        r = fixed_params.r,
        q = fixed_params.q,
        "pricing batch"
    );

    let mut results = Vec::with_capacity(quotes.len());
    let mut failures = 0usize;

    for quote in quotes {
        let (model_price, greeks, error) = match price_quote(model, quote, fixed_params) {
            Ok((price, greeks)) => {
                if !price.is_finite() {
                    tracing::warn!(
                        strike = quote.strike_price,
                        days = quote.days_to_exp,
                        price,
                        "non-finite model price"
                    );
                }
                (Some(price), Some(greeks), None)
            }
            Err(e) => {
                failures += 1;
                tracing::debug!(strike = quote.strike_price, error = %e, "row rejected");
                (None, None, Some(e.to_string()))
            }
        };

        results.push(PricingResult {
            option_type: quote.option_type.clone(),
            strike_price: quote.strike_price,
            underlying_price: quote.underlying_price,
            days_to_exp: quote.days_to_exp,
            model_price,
            greeks,
            error,
        });
    }

    // total order: a NaN strike (always an error row) lands after the finite ones
    results.sort_by(|a, b| a.strike_price.total_cmp(&b.strike_price));

    tracing::debug!(rows = results.len(), failures, "batch priced");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bs::bs_model::BlackScholesModel;
    use crate::pricing::config::PricingConfig;

    fn quote(option_type: &str, strike: f64) -> OptionQuote {
        OptionQuote {
            option_type: option_type.to_string(),
            strike_price: strike,
            underlying_price: 100.0,
            volatility: 0.2,
            days_to_exp: 365.0,
        }
    }

    #[test]
    fn batch_sorts_by_strike_and_keeps_going_after_errors() {
        let model = BlackScholesModel::default();
        let quotes = vec![
            quote("Put", 110.0),
            quote("Straddle", 105.0),
            quote("Call", 90.0),
            quote("Call", -1.0),
        ];
        let fixed = FixedParameters { r: 0.05, q: 0.0 };
        let results = price_quotes(&model, &quotes, fixed);

        let strikes: Vec<f64> = results.iter().map(|r| r.strike_price).collect();
        assert_eq!(strikes, vec![-1.0, 90.0, 105.0, 110.0]);

        assert!(!results[0].is_ok());
        assert!(results[0].error.as_deref().unwrap().contains("strike"));
        assert!(results[1].is_ok());
        assert!(results[2].error.as_deref().unwrap().contains("Straddle"));
        assert!(results[3].model_price.unwrap() > 10.0 - 1e-9);
    }

    #[test]
    fn nan_strike_does_not_break_ordering() {
        let model = BlackScholesModel::default();
        let quotes = vec![
            quote("Call", 110.0),
            quote("Call", f64::NAN),
            quote("Put", 90.0),
            quote("Call", 100.0),
        ];
        let results = price_quotes(&model, &quotes, FixedParameters::default());

        let finite: Vec<f64> = results
            .iter()
            .map(|r| r.strike_price)
            .filter(|k| k.is_finite())
            .collect();
        assert_eq!(finite, vec![90.0, 100.0, 110.0]);

        let last = results.last().unwrap();
        assert!(last.strike_price.is_nan());
        assert!(last.error.as_deref().unwrap().contains("strike"));
    }

    #[test]
    fn price_quote_matches_model() {
        let model = BlackScholesModel::default();
        let fixed = FixedParameters { r: 0.05, q: 0.0 };
        let (price, greeks) = price_quote(&model, &quote("Call", 100.0), fixed).unwrap();
        assert!((price - 10.4506).abs() < 1e-3);
        assert!(greeks.delta > 0.5 && greeks.delta < 1.0);
    }

    #[test]
    fn reference_policy_prices_unknown_type_as_call() {
        let model = BlackScholesModel::new(PricingConfig::reference()).unwrap();
        let fixed = FixedParameters { r: 0.05, q: 0.0 };
        let (weird, _) = price_quote(&model, &quote("call", 100.0), fixed).unwrap();
        let (call, _) = price_quote(&model, &quote("Call", 100.0), fixed).unwrap();
        assert_eq!(weird, call);
    }
}
