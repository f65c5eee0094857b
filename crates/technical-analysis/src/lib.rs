//! Market-structure signals: volume traps, central pivot range and breadth bias.
//!
//! Everything here is a pure function of caller-supplied numbers.

pub mod bias;
pub mod pivot;
pub mod traps;

pub use bias::{assess_market_bias, MarketBiasResult};
pub use pivot::{calculate_cpr, CprResult, NARROW_CPR_THRESHOLD};
pub use traps::{
    assess_trap_type, detect_institutional_trap, TrapAssessment, DEFAULT_VOLUME_MULTIPLIER,
};
