use std::fmt;
use std::str::FromStr;

use analysis_core::{ensure_positive, EngineError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskAppetite {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskAppetite {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskAppetite::Conservative => "CONSERVATIVE",
            RiskAppetite::Moderate => "MODERATE",
            RiskAppetite::Aggressive => "AGGRESSIVE",
        }
    }
}

impl fmt::Display for RiskAppetite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskAppetite {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CONSERVATIVE" => Ok(RiskAppetite::Conservative),
            "MODERATE" => Ok(RiskAppetite::Moderate),
            "AGGRESSIVE" => Ok(RiskAppetite::Aggressive),
            other => Err(EngineError::invalid(format!(
                "unknown risk appetite '{}'",
                other
            ))),
        }
    }
}

/// A trader's risk configuration. Percentages are expressed as 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSettings {
    pub total_capital: f64,
    pub max_position_size_percentage: f64,
    pub max_risk_per_trade_percentage: f64,
    pub max_daily_loss_percentage: f64,
    pub volume_multiplier: f64,
    pub auto_stop_loss: bool,
    #[serde(default)]
    pub risk_appetite: RiskAppetite,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            total_capital: 100_000.0,
            max_position_size_percentage: 10.0,
            max_risk_per_trade_percentage: 2.0,
            max_daily_loss_percentage: 5.0,
            volume_multiplier: 1.5,
            auto_stop_loss: true,
            risk_appetite: RiskAppetite::Moderate,
        }
    }
}

impl RiskSettings {
    /// Check the configuration itself before any trade is measured against it
    pub fn validate(&self) -> Result<(), EngineError> {
        ensure_positive("total_capital", self.total_capital)?;
        ensure_positive("volume_multiplier", self.volume_multiplier)?;

        let percentages = [
            ("max_position_size_percentage", self.max_position_size_percentage),
            ("max_risk_per_trade_percentage", self.max_risk_per_trade_percentage),
            ("max_daily_loss_percentage", self.max_daily_loss_percentage),
        ];
        for (name, value) in percentages {
            if !(0.0..=100.0).contains(&value) {
                return Err(EngineError::invalid(format!(
                    "{} must be between 0 and 100, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn max_position_size(&self) -> f64 {
        self.total_capital * (self.max_position_size_percentage / 100.0)
    }

    pub fn max_risk_per_trade(&self) -> f64 {
        self.total_capital * (self.max_risk_per_trade_percentage / 100.0)
    }

    pub fn max_daily_loss_amount(&self) -> f64 {
        self.total_capital * (self.max_daily_loss_percentage / 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSizeCalculation {
    pub capital: f64,
    pub risk_percentage: f64,
    pub entry_price: f64,
    pub stop_loss: f64,
    /// Whole shares, rounded down
    pub recommended_quantity: i64,
    /// Risk budget for the trade: capital x risk_percentage / 100
    pub capital_at_risk: f64,
    pub position_value: f64,
}

impl PositionSizeCalculation {
    pub fn risk_per_share(&self) -> f64 {
        (self.entry_price - self.stop_loss).abs()
    }

    /// Loss actually taken if the stop is hit with the recommended quantity.
    /// Never exceeds `capital_at_risk`.
    pub fn realized_risk(&self) -> f64 {
        self.recommended_quantity as f64 * self.risk_per_share()
    }
}

/// Outcome of a policy check. Violations are data, not errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<String>,
}

impl ValidationResult {
    pub fn from_violations(violations: Vec<String>) -> Self {
        Self {
            valid: violations.is_empty(),
            violations,
        }
    }
}

/// Full risk-calculator output for one proposed trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeEvaluation {
    pub position: PositionSizeCalculation,
    pub target_price: f64,
    pub risk_reward_ratio: f64,
    pub validation: ValidationResult,
}

/// An open holding as supplied by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPosition {
    pub stock_symbol: String,
    pub quantity: f64,
    pub avg_buy_price: f64,
    pub invested_amount: f64,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub pnl: Option<f64>,
}

impl PortfolioPosition {
    /// Market value when known and non-zero, otherwise the cost basis
    pub fn exposure(&self) -> f64 {
        self.current_value
            .filter(|v| *v != 0.0)
            .unwrap_or(self.invested_amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureSummary {
    pub total_exposure: f64,
    pub total_pnl: f64,
    /// Exposure as a percentage of total capital
    pub exposure_percentage: f64,
    pub position_count: usize,
}
