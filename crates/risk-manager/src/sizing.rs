use analysis_core::{ensure_positive, EngineError, Result};

use crate::models::PositionSizeCalculation;

/// Size a position so that hitting the stop loses at most
/// `capital * risk_percentage / 100`.
///
/// Quantity is floored to whole shares, so the realized risk never exceeds
/// the budget. Works for both long (stop below entry) and short (stop above
/// entry) setups.
pub fn calculate_position_size(
    capital: f64,
    risk_percentage: f64,
    entry_price: f64,
    stop_loss: f64,
) -> Result<PositionSizeCalculation> {
    ensure_positive("capital", capital)?;
    ensure_positive("entry price", entry_price)?;
    ensure_positive("stop loss", stop_loss)?;
    if !(risk_percentage > 0.0 && risk_percentage <= 100.0) {
        return Err(EngineError::invalid(format!(
            "risk percentage must be in (0, 100], got {}",
            risk_percentage
        )));
    }

    let risk_per_share = (entry_price - stop_loss).abs();
    if risk_per_share == 0.0 {
        return Err(EngineError::invalid("entry price and stop loss must differ"));
    }

    let capital_at_risk = capital * (risk_percentage / 100.0);
    let recommended_quantity = (capital_at_risk / risk_per_share).floor() as i64;
    let position_value = recommended_quantity as f64 * entry_price;

    tracing::debug!(
        capital,
        risk_percentage,
        entry_price,
        stop_loss,
        recommended_quantity,
        "Position sized"
    );

    Ok(PositionSizeCalculation {
        capital,
        risk_percentage,
        entry_price,
        stop_loss,
        recommended_quantity,
        capital_at_risk,
        position_value,
    })
}

/// Reward-to-risk multiple of a trade: |target - entry| / |entry - stop|
pub fn calculate_risk_reward(entry: f64, stop_loss: f64, target: f64) -> Result<f64> {
    ensure_positive("entry price", entry)?;
    ensure_positive("stop loss", stop_loss)?;
    ensure_positive("target price", target)?;

    let risk = (entry - stop_loss).abs();
    if risk == 0.0 {
        return Err(EngineError::invalid("entry price and stop loss must differ"));
    }
    let reward = (target - entry).abs();

    Ok(reward / risk)
}
