use analysis_core::{AgentDecision, Result, Trend, TrapType};
use risk_manager::{
    ExposureSummary, PortfolioPosition, PositionSizeCalculation, RiskSettings, TradeEvaluation,
    ValidationResult,
};
use technical_analysis::{CprResult, MarketBiasResult, TrapAssessment};

use crate::reasoning::{compose_reasoning, TradeSignals};
use crate::ranker::prioritize_decisions;

/// Single entry point for the trading risk and decision engine.
///
/// Holds no state: every method takes its full configuration as arguments,
/// so one value can be shared freely across threads and requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentOrchestrator;

impl AgentOrchestrator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_position_size(
        &self,
        capital: f64,
        risk_percentage: f64,
        entry_price: f64,
        stop_loss: f64,
    ) -> Result<PositionSizeCalculation> {
        risk_manager::calculate_position_size(capital, risk_percentage, entry_price, stop_loss)
    }

    pub fn calculate_risk_reward(&self, entry: f64, stop_loss: f64, target: f64) -> Result<f64> {
        risk_manager::calculate_risk_reward(entry, stop_loss, target)
    }

    /// Trap check with an explicit volume multiplier
    /// (`technical_analysis::DEFAULT_VOLUME_MULTIPLIER` is the usual 1.5)
    pub fn detect_institutional_trap(
        &self,
        current_volume: f64,
        avg_volume: f64,
        price_change: f64,
        volume_multiplier: f64,
    ) -> Result<TrapAssessment> {
        technical_analysis::detect_institutional_trap(
            current_volume,
            avg_volume,
            price_change,
            volume_multiplier,
        )
    }

    /// Trap check using the trader's configured volume multiplier
    pub fn detect_trap_with_settings(
        &self,
        current_volume: f64,
        avg_volume: f64,
        price_change: f64,
        settings: &RiskSettings,
    ) -> Result<TrapAssessment> {
        technical_analysis::detect_institutional_trap(
            current_volume,
            avg_volume,
            price_change,
            settings.volume_multiplier,
        )
    }

    pub fn assess_trap_type(
        &self,
        price_change: f64,
        volume_ratio: f64,
        trend: Trend,
    ) -> Option<TrapType> {
        technical_analysis::assess_trap_type(price_change, volume_ratio, trend)
    }

    pub fn calculate_cpr(&self, high: f64, low: f64, close: f64) -> CprResult {
        technical_analysis::calculate_cpr(high, low, close)
    }

    pub fn assess_market_bias(
        &self,
        advancing_stocks: f64,
        declining_stocks: f64,
        volume_ratio: f64,
    ) -> Result<MarketBiasResult> {
        technical_analysis::assess_market_bias(advancing_stocks, declining_stocks, volume_ratio)
    }

    pub fn generate_trade_reasoning(&self, signals: &TradeSignals) -> String {
        compose_reasoning(signals)
    }

    /// Returns a new ordering of the same decisions
    pub fn prioritize_decisions(&self, decisions: Vec<AgentDecision>) -> Vec<AgentDecision> {
        prioritize_decisions(decisions)
    }

    pub fn validate_trade_against_risk_settings(
        &self,
        position_value: f64,
        capital_at_risk: f64,
        settings: &RiskSettings,
    ) -> ValidationResult {
        risk_manager::validate_trade_against_risk_settings(
            position_value,
            capital_at_risk,
            settings,
        )
    }

    pub fn evaluate_trade(
        &self,
        settings: &RiskSettings,
        entry_price: f64,
        stop_loss: f64,
        target_price: Option<f64>,
    ) -> Result<TradeEvaluation> {
        risk_manager::evaluate_trade(settings, entry_price, stop_loss, target_price)
    }

    pub fn check_daily_loss(
        &self,
        realized_loss: f64,
        settings: &RiskSettings,
    ) -> ValidationResult {
        risk_manager::check_daily_loss(realized_loss, settings)
    }

    pub fn summarize_exposure(
        &self,
        positions: &[PortfolioPosition],
        settings: &RiskSettings,
    ) -> Result<ExposureSummary> {
        risk_manager::summarize_exposure(positions, settings)
    }
}
