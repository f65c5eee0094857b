use analysis_core::{ensure_non_negative, ensure_positive, Result, Trend, TrapType};
use serde::{Deserialize, Serialize};

/// Volume multiple below which a move is treated as unconfirmed
pub const DEFAULT_VOLUME_MULTIPLIER: f64 = 1.5;

/// Ratio below which volume counts as abnormally thin
const EXTREME_LOW_VOLUME_RATIO: f64 = 0.5;
/// Percent move that counts as extreme on thin volume
const EXTREME_PRICE_MOVE: f64 = 5.0;
/// Percent move that needs volume confirmation
const SIGNIFICANT_PRICE_MOVE: f64 = 3.0;

const CLASSIFY_VOLUME_RATIO: f64 = 1.5;
const INSTITUTIONAL_VOLUME_RATIO: f64 = 0.7;
const INSTITUTIONAL_PRICE_MOVE: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapAssessment {
    pub is_trap: bool,
    /// 0 to 100
    pub confidence: u8,
    pub reason: String,
    pub volume_ratio: f64,
}

/// Flag a price move that volume does not back up.
///
/// `price_change` is a percentage. Two tiers, strongest first:
/// - volume under 0.5x average with a move beyond 5%: confidence 90
/// - volume under `volume_multiplier` with a move beyond 3%: confidence 75
pub fn detect_institutional_trap(
    current_volume: f64,
    avg_volume: f64,
    price_change: f64,
    volume_multiplier: f64,
) -> Result<TrapAssessment> {
    ensure_non_negative("current volume", current_volume)?;
    ensure_positive("average volume", avg_volume)?;
    ensure_positive("volume multiplier", volume_multiplier)?;

    let volume_ratio = current_volume / avg_volume;
    let magnitude = price_change.abs();

    let assessment = if volume_ratio < EXTREME_LOW_VOLUME_RATIO && magnitude > EXTREME_PRICE_MOVE {
        TrapAssessment {
            is_trap: true,
            confidence: 90,
            reason: format!(
                "Extreme price movement ({:.2}%) on abnormally low volume ({:.2}x). High probability of manipulation.",
                price_change, volume_ratio
            ),
            volume_ratio,
        }
    } else if volume_ratio < volume_multiplier && magnitude > SIGNIFICANT_PRICE_MOVE {
        TrapAssessment {
            is_trap: true,
            confidence: 75,
            reason: format!(
                "Price moved {:.2}% on {:.2}x average volume. Low volume spike indicates potential institutional trap.",
                price_change, volume_ratio
            ),
            volume_ratio,
        }
    } else {
        TrapAssessment {
            is_trap: false,
            confidence: 0,
            reason: "Volume confirms price action. No trap detected.".to_string(),
            volume_ratio,
        }
    };

    if assessment.is_trap {
        tracing::debug!(
            volume_ratio,
            price_change,
            confidence = assessment.confidence,
            "Unconfirmed move flagged as trap"
        );
    }

    Ok(assessment)
}

/// Name the kind of trap a move looks like, if any.
///
/// Any ratio under 1.5x is classified first, so the institutional branch
/// (ratio under 0.7x) is shadowed by it.
pub fn assess_trap_type(price_change: f64, volume_ratio: f64, trend: Trend) -> Option<TrapType> {
    if volume_ratio < CLASSIFY_VOLUME_RATIO {
        if price_change > SIGNIFICANT_PRICE_MOVE && trend != Trend::Uptrend {
            return Some(TrapType::BullTrap);
        }
        if price_change < -SIGNIFICANT_PRICE_MOVE && trend != Trend::Downtrend {
            return Some(TrapType::BearTrap);
        }
        return Some(TrapType::VolumeTrap);
    }

    if volume_ratio < INSTITUTIONAL_VOLUME_RATIO && price_change.abs() > INSTITUTIONAL_PRICE_MOVE {
        return Some(TrapType::InstitutionalTrap);
    }

    None
}
