//! Decision Ranking Module
//!
//! Orders pending agent decisions so the strongest ideas are reviewed first.

use analysis_core::AgentDecision;

/// Composite score: confidence x risk/reward.
///
/// Missing, zero or NaN confidence counts as 0; missing, zero or NaN ratio
/// counts as 1. A NaN score counts as 0 so that ordering stays total.
pub fn decision_score(decision: &AgentDecision) -> f64 {
    let confidence = decision
        .confidence_score
        .filter(|c| !c.is_nan())
        .unwrap_or(0.0);
    let ratio = decision
        .risk_reward_ratio
        .filter(|r| *r != 0.0 && !r.is_nan())
        .unwrap_or(1.0);
    let score = confidence * ratio;
    if score.is_nan() {
        0.0
    } else {
        // folds -0.0 into 0.0
        score + 0.0
    }
}

/// Sort decisions by score, highest first. Equal scores keep input order.
pub fn prioritize_decisions(mut decisions: Vec<AgentDecision>) -> Vec<AgentDecision> {
    // sort_by is stable
    decisions.sort_by(|a, b| decision_score(b).total_cmp(&decision_score(a)));

    tracing::debug!(count = decisions.len(), "Decisions prioritized");
    decisions
}
