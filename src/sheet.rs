//! Spreadsheet custom functions.
//!
//! Each function takes its arguments in worksheet order (price, strike,
//! volatility, interest, dividend, days[, optionType]) and returns a plain
//! `f64`, the way a cell formula would. Nothing is validated: zero
//! volatility or zero days yield NaN/∞ through ordinary float arithmetic,
//! and any option type other than `"Put"` is treated as a call. Use
//! [`BlackScholesModel`] with a strict [`PricingConfig`](crate::PricingConfig)
//! for checked results.

#![allow(non_snake_case)]

use crate::market_params::MarketParams;
use crate::models::bs::bs_model::BlackScholesModel;
use crate::models::traits::PricingModel;

fn evaluate<F>(params: MarketParams, f: F) -> f64
where
    F: FnOnce(&BlackScholesModel, &MarketParams) -> crate::Result<f64>,
{
    // the reference model never rejects inputs
    f(&BlackScholesModel::reference(), &params).unwrap_or(f64::NAN)
}

fn evaluate_typed<F>(params: MarketParams, option_type: &str, f: F) -> f64
where
    F: FnOnce(&BlackScholesModel, &MarketParams, crate::OptionType) -> crate::Result<f64>,
{
    let model = BlackScholesModel::reference();
    model
        .resolve_option_type(option_type)
        .and_then(|ty| f(&model, &params, ty))
        .unwrap_or(f64::NAN)
}

pub fn CALLPRICE(
    price: f64,
    strike: f64,
    volatility: f64,
    interest: f64,
    dividend: f64,
    days: f64,
) -> f64 {
    let params = MarketParams::new(price, strike, volatility, interest, dividend, days);
    evaluate(params, |m, p| m.call_price(p))
}

pub fn PUTPRICE(
    price: f64,
    strike: f64,
    volatility: f64,
    interest: f64,
    dividend: f64,
    days: f64,
) -> f64 {
    let params = MarketParams::new(price, strike, volatility, interest, dividend, days);
    evaluate(params, |m, p| m.put_price(p))
}

pub fn OPTIONDELTA(
    price: f64,
    strike: f64,
    volatility: f64,
    interest: f64,
    dividend: f64,
    days: f64,
    option_type: &str,
) -> f64 {
    let params = MarketParams::new(price, strike, volatility, interest, dividend, days);
    evaluate_typed(params, option_type, |m, p, ty| m.delta(p, ty))
}

/// The option type is accepted for a uniform signature; gamma ignores it.
pub fn OPTIONGAMMA(
    price: f64,
    strike: f64,
    volatility: f64,
    interest: f64,
    dividend: f64,
    days: f64,
    option_type: &str,
) -> f64 {
    let params = MarketParams::new(price, strike, volatility, interest, dividend, days);
    evaluate_typed(params, option_type, |m, p, _| m.gamma(p))
}

/// Annualized theta.
pub fn OPTIONTHETA(
    price: f64,
    strike: f64,
    volatility: f64,
    interest: f64,
    dividend: f64,
    days: f64,
    option_type: &str,
) -> f64 {
    let params = MarketParams::new(price, strike, volatility, interest, dividend, days);
    evaluate_typed(params, option_type, |m, p, ty| m.theta(p, ty))
}

/// The option type is accepted for a uniform signature; vega ignores it.
pub fn OPTIONVEGA(
    price: f64,
    strike: f64,
    volatility: f64,
    interest: f64,
    dividend: f64,
    days: f64,
    option_type: &str,
) -> f64 {
    let params = MarketParams::new(price, strike, volatility, interest, dividend, days);
    evaluate_typed(params, option_type, |m, p, _| m.vega(p))
}

pub fn OPTIONRHO(
    price: f64,
    strike: f64,
    volatility: f64,
    interest: f64,
    dividend: f64,
    days: f64,
    option_type: &str,
) -> f64 {
    let params = MarketParams::new(price, strike, volatility, interest, dividend, days);
    evaluate_typed(params, option_type, |m, p, ty| m.rho(p, ty))
}
