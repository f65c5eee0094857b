pub mod config;
pub mod models;
pub mod sizing;
pub mod validator;
#[cfg(test)]
mod tests;

pub use config::{settings_from_env, settings_from_lookup};
pub use models::*;
pub use sizing::{calculate_position_size, calculate_risk_reward};
pub use validator::{
    check_daily_loss, evaluate_trade, summarize_exposure, validate_trade_against_risk_settings,
    DEFAULT_TARGET_MULTIPLIER,
};
