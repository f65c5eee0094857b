use analysis_core::{ensure_non_negative, EngineError, MarketBias, Result};
use serde::{Deserialize, Serialize};

const BULLISH_ADVANCE_RATIO: f64 = 0.6;
const BEARISH_ADVANCE_RATIO: f64 = 0.4;
const CONFIRMING_VOLUME_RATIO: f64 = 1.2;
const NEUTRAL_STRENGTH: f64 = 50.0;
const MAX_STRENGTH: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketBiasResult {
    pub bias: MarketBias,
    /// 0 to 100
    pub strength: f64,
}

/// Directional lean of a market from breadth and participation.
///
/// Breadth has to clear 60/40 in either direction and volume has to run
/// above 1.2x its average; anything else is neutral at strength 50.
pub fn assess_market_bias(
    advancing_stocks: f64,
    declining_stocks: f64,
    volume_ratio: f64,
) -> Result<MarketBiasResult> {
    ensure_non_negative("advancing stocks", advancing_stocks)?;
    ensure_non_negative("declining stocks", declining_stocks)?;

    let total = advancing_stocks + declining_stocks;
    if total == 0.0 {
        return Err(EngineError::invalid("advancing and declining counts cannot both be zero"));
    }
    let advance_ratio = advancing_stocks / total;

    let result = if advance_ratio > BULLISH_ADVANCE_RATIO && volume_ratio > CONFIRMING_VOLUME_RATIO
    {
        MarketBiasResult {
            bias: MarketBias::Bullish,
            strength: MAX_STRENGTH
                .min(NEUTRAL_STRENGTH + (advance_ratio - BULLISH_ADVANCE_RATIO) * 100.0),
        }
    } else if advance_ratio < BEARISH_ADVANCE_RATIO && volume_ratio > CONFIRMING_VOLUME_RATIO {
        MarketBiasResult {
            bias: MarketBias::Bearish,
            strength: MAX_STRENGTH
                .min(NEUTRAL_STRENGTH + (BEARISH_ADVANCE_RATIO - advance_ratio) * 100.0),
        }
    } else {
        MarketBiasResult {
            bias: MarketBias::Neutral,
            strength: NEUTRAL_STRENGTH,
        }
    };

    tracing::debug!(
        advance_ratio,
        volume_ratio,
        bias = result.bias.to_label(),
        strength = result.strength,
        "Market bias assessed"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bullish_breadth() {
        let result = assess_market_bias(700.0, 300.0, 1.5).unwrap();
        assert_eq!(result.bias, MarketBias::Bullish);
        assert_relative_eq!(result.strength, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bearish_breadth_mirrors() {
        let result = assess_market_bias(250.0, 750.0, 1.3).unwrap();
        assert_eq!(result.bias, MarketBias::Bearish);
        assert_relative_eq!(result.strength, 65.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unanimous_breadth_strength() {
        // Unanimous breadth tops out at 90, under the 95 cap
        let all_up = assess_market_bias(500.0, 0.0, 2.0).unwrap();
        assert_relative_eq!(all_up.strength, 90.0, epsilon = 1e-9);

        let all_down = assess_market_bias(0.0, 500.0, 2.0).unwrap();
        assert_eq!(all_down.bias, MarketBias::Bearish);
        assert_relative_eq!(all_down.strength, 90.0, epsilon = 1e-9);
        assert!(all_down.strength <= MAX_STRENGTH);
    }

    #[test]
    fn test_weak_volume_is_neutral() {
        let result = assess_market_bias(800.0, 200.0, 1.1).unwrap();
        assert_eq!(result.bias, MarketBias::Neutral);
        assert_relative_eq!(result.strength, 50.0);
    }

    #[test]
    fn test_balanced_breadth_is_neutral() {
        let result = assess_market_bias(520.0, 480.0, 2.5).unwrap();
        assert_eq!(result.bias, MarketBias::Neutral);
    }

    #[test]
    fn test_empty_breadth_rejected() {
        assert!(assess_market_bias(0.0, 0.0, 1.5).is_err());
        assert!(assess_market_bias(-5.0, 10.0, 1.5).is_err());
    }
}
