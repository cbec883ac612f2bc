pub mod bs;
pub mod normal;

/// Common traits used by pricing models
pub mod traits {
    use crate::error::Result;
    use crate::market_params::MarketParams;
    use crate::pricing::types::{Greeks, OptionType};

    /// A model that prices a single European option and its sensitivities
    pub trait PricingModel: Send + Sync {
        fn model_name(&self) -> &str;

        /// Resolve a spreadsheet-style option type string under the model's policy.
        fn resolve_option_type(&self, value: &str) -> Result<OptionType>;

        fn price(&self, params: &MarketParams, option_type: OptionType) -> Result<f64>;

        fn greeks(&self, params: &MarketParams, option_type: OptionType) -> Result<Greeks>;
    }
}
