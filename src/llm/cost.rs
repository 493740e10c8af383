//! Token cost estimation in decimal arithmetic

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::LlmCostConfig;

const TOKENS_PER_UNIT: u64 = 1000;
const INTERMEDIATE_SCALE: u32 = 10;
const RESULT_SCALE: u32 = 6;

/// Estimate the cost of one call from its token counts and per-1k prices.
///
/// Returns zero when either price is unset. Each term is rounded half-up to
/// 10 fractional digits, the sum half-up to 6. Products beyond the `Decimal`
/// range saturate at `Decimal::MAX` instead of failing.
#[must_use]
pub fn estimate_cost(
    input_tokens: u64,
    output_tokens: u64,
    input_per_1k: Option<Decimal>,
    output_per_1k: Option<Decimal>,
) -> Decimal {
    let (Some(input_price), Some(output_price)) = (input_per_1k, output_per_1k) else {
        return Decimal::ZERO;
    };

    let input = per_thousand(input_price, input_tokens);
    let output = per_thousand(output_price, output_tokens);

    let mut total = input
        .saturating_add(output)
        .round_dp_with_strategy(RESULT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    total.rescale(RESULT_SCALE);
    total.max(Decimal::ZERO)
}

fn per_thousand(price: Decimal, tokens: u64) -> Decimal {
    (price.saturating_mul(Decimal::from(tokens)) / Decimal::from(TOKENS_PER_UNIT))
        .round_dp_with_strategy(INTERMEDIATE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Cost estimator bound to the configured unit prices
#[derive(Debug, Clone, Default)]
pub struct CostEstimator {
    input_per_1k: Option<Decimal>,
    output_per_1k: Option<Decimal>,
}

impl CostEstimator {
    #[must_use]
    pub fn new(input_per_1k: Option<Decimal>, output_per_1k: Option<Decimal>) -> Self {
        Self {
            input_per_1k,
            output_per_1k,
        }
    }

    #[must_use]
    pub fn from_config(config: &LlmCostConfig) -> Self {
        Self::new(config.input_per_1k, config.output_per_1k)
    }

    /// Estimated USD cost for a call with the given token counts
    #[must_use]
    pub fn estimate_usd(&self, input_tokens: u64, output_tokens: u64) -> Decimal {
        estimate_cost(
            input_tokens,
            output_tokens,
            self.input_per_1k,
            self.output_per_1k,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_estimate_reference_prices() {
        let cost = estimate_cost(1000, 500, Some(dec!(0.01)), Some(dec!(0.02)));
        assert_eq!(cost, dec!(0.02));
        assert_eq!(cost.to_string(), "0.020000");
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(dec!(0.01)), None)]
    #[case(None, Some(dec!(0.02)))]
    fn test_estimate_without_prices_is_zero(
        #[case] input: Option<Decimal>,
        #[case] output: Option<Decimal>,
    ) {
        assert_eq!(estimate_cost(123_456, 654_321, input, output), Decimal::ZERO);
    }

    #[test]
    fn test_estimate_rounds_half_up_to_six_digits() {
        // 0.0015 * 1 / 1000 = 0.0000015 -> 0.000002
        let cost = estimate_cost(1, 0, Some(dec!(0.0015)), Some(dec!(0)));
        assert_eq!(cost.to_string(), "0.000002");

        // 0.0014 * 1 / 1000 = 0.0000014 -> 0.000001
        let cost = estimate_cost(1, 0, Some(dec!(0.0014)), Some(dec!(0)));
        assert_eq!(cost.to_string(), "0.000001");
    }

    #[test]
    fn test_estimate_zero_tokens() {
        let cost = estimate_cost(0, 0, Some(dec!(0.15)), Some(dec!(0.6)));
        assert_eq!(cost, Decimal::ZERO);
        assert_eq!(cost.to_string(), "0.000000");
    }

    #[test]
    fn test_estimate_saturates_instead_of_overflowing() {
        let cost = estimate_cost(
            u64::MAX,
            u64::MAX,
            Some(dec!(10000000000)),
            Some(dec!(1)),
        );
        assert!(cost > Decimal::from(u64::MAX));
        assert!(cost <= Decimal::MAX);
    }

    #[test]
    fn test_estimator_uses_configured_prices() {
        let estimator = CostEstimator::new(Some(dec!(0.00015)), Some(dec!(0.0006)));
        assert_eq!(estimator.estimate_usd(2000, 1000), dec!(0.0009));
        assert_eq!(CostEstimator::default().estimate_usd(2000, 1000), Decimal::ZERO);
    }
}
