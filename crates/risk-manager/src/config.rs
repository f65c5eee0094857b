use anyhow::{Context, Result};
use std::env;

use crate::models::{RiskAppetite, RiskSettings};

/// Load risk settings from the environment (and `.env` if present).
///
/// Every variable is optional; unset ones fall back to `RiskSettings::default()`.
pub fn settings_from_env() -> Result<RiskSettings> {
    dotenvy::dotenv().ok();
    settings_from_lookup(|key| env::var(key).ok())
}

/// Build settings from any key lookup. Used by `settings_from_env` and by
/// hosts that keep configuration somewhere other than the process env.
pub fn settings_from_lookup<F>(lookup: F) -> Result<RiskSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = RiskSettings::default();

    let settings = RiskSettings {
        total_capital: parse_or(&lookup, "TOTAL_CAPITAL", defaults.total_capital)?,
        max_position_size_percentage: parse_or(
            &lookup,
            "MAX_POSITION_SIZE_PERCENT",
            defaults.max_position_size_percentage,
        )?,
        max_risk_per_trade_percentage: parse_or(
            &lookup,
            "MAX_RISK_PER_TRADE_PERCENT",
            defaults.max_risk_per_trade_percentage,
        )?,
        max_daily_loss_percentage: parse_or(
            &lookup,
            "MAX_DAILY_LOSS_PERCENT",
            defaults.max_daily_loss_percentage,
        )?,
        volume_multiplier: parse_or(&lookup, "VOLUME_MULTIPLIER", defaults.volume_multiplier)?,
        auto_stop_loss: parse_or(&lookup, "AUTO_STOP_LOSS", defaults.auto_stop_loss)?,
        risk_appetite: match lookup("RISK_APPETITE") {
            Some(raw) => raw
                .parse::<RiskAppetite>()
                .context("RISK_APPETITE is invalid")?,
            None => defaults.risk_appetite,
        },
    };

    settings.validate().context("Risk settings out of range")?;

    tracing::info!(
        total_capital = settings.total_capital,
        risk_appetite = %settings.risk_appetite,
        "Risk settings loaded"
    );

    Ok(settings)
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid value, got '{}'", key, raw)),
        None => Ok(default),
    }
}
