use serde::{Deserialize, Serialize};

/// Range-to-close ratio under which a CPR counts as narrow
pub const NARROW_CPR_THRESHOLD: f64 = 0.01;

/// Central pivot range built from the prior session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CprResult {
    pub pivot: f64,
    /// Bottom central pivot
    pub bc: f64,
    /// Top central pivot
    pub tc: f64,
    /// `tc - bc`. Negative when the close sits below the session midpoint.
    pub range: f64,
    pub is_narrow: bool,
}

/// Compute the central pivot range from a session's high, low and close.
///
/// A narrow range (under 1% of close) tends to precede a breakout session.
/// A zero or negative close never yields a narrow flag.
pub fn calculate_cpr(high: f64, low: f64, close: f64) -> CprResult {
    let pivot = (high + low + close) / 3.0;
    let bc = (high + low) / 2.0;
    let tc = 2.0 * pivot - bc;
    let range = tc - bc;

    CprResult {
        pivot,
        bc,
        tc,
        range,
        is_narrow: close > 0.0 && range / close < NARROW_CPR_THRESHOLD,
    }
}
