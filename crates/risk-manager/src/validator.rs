use analysis_core::{ensure_positive, Result};

use crate::models::*;
use crate::sizing::{calculate_position_size, calculate_risk_reward};

/// Target used by the risk calculator when the trader leaves it blank (+5%)
pub const DEFAULT_TARGET_MULTIPLIER: f64 = 1.05;

/// Check a proposed position against the configured limits.
///
/// At most two violations, in fixed order: position size, then risk per
/// trade. Limits are inclusive, so a trade exactly at the limit passes.
pub fn validate_trade_against_risk_settings(
    position_value: f64,
    capital_at_risk: f64,
    settings: &RiskSettings,
) -> ValidationResult {
    let mut violations = Vec::new();

    if position_value > settings.max_position_size() {
        violations.push(format!(
            "Position size exceeds {}% limit",
            settings.max_position_size_percentage
        ));
    }

    if capital_at_risk > settings.max_risk_per_trade() {
        violations.push(format!(
            "Risk per trade exceeds {}% limit",
            settings.max_risk_per_trade_percentage
        ));
    }

    if !violations.is_empty() {
        tracing::info!(
            position_value,
            capital_at_risk,
            violations = violations.len(),
            "Trade breaches risk settings"
        );
    }

    ValidationResult::from_violations(violations)
}

/// Check the day's realized loss (a positive amount) against the daily limit
pub fn check_daily_loss(realized_loss: f64, settings: &RiskSettings) -> ValidationResult {
    let mut violations = Vec::new();

    if realized_loss > settings.max_daily_loss_amount() {
        tracing::info!(
            realized_loss,
            limit = settings.max_daily_loss_amount(),
            "Daily loss limit breached"
        );
        violations.push(format!(
            "Daily loss exceeds {}% limit",
            settings.max_daily_loss_percentage
        ));
    }

    ValidationResult::from_violations(violations)
}

/// Run the full risk calculator for one trade idea: size it with the
/// settings' per-trade risk, score reward against risk, then validate.
pub fn evaluate_trade(
    settings: &RiskSettings,
    entry_price: f64,
    stop_loss: f64,
    target_price: Option<f64>,
) -> Result<TradeEvaluation> {
    let target_price = target_price.unwrap_or(entry_price * DEFAULT_TARGET_MULTIPLIER);

    let position = calculate_position_size(
        settings.total_capital,
        settings.max_risk_per_trade_percentage,
        entry_price,
        stop_loss,
    )?;
    let risk_reward_ratio = calculate_risk_reward(entry_price, stop_loss, target_price)?;
    let validation = validate_trade_against_risk_settings(
        position.position_value,
        position.capital_at_risk,
        settings,
    );

    Ok(TradeEvaluation {
        position,
        target_price,
        risk_reward_ratio,
        validation,
    })
}

/// Aggregate open holdings into exposure and P&L totals
pub fn summarize_exposure(
    positions: &[PortfolioPosition],
    settings: &RiskSettings,
) -> Result<ExposureSummary> {
    ensure_positive("total_capital", settings.total_capital)?;

    let total_exposure: f64 = positions.iter().map(PortfolioPosition::exposure).sum();
    let total_pnl: f64 = positions.iter().map(|p| p.pnl.unwrap_or(0.0)).sum();

    Ok(ExposureSummary {
        total_exposure,
        total_pnl,
        exposure_percentage: (total_exposure / settings.total_capital) * 100.0,
        position_count: positions.len(),
    })
}
