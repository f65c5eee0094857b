//! Trade Reasoning Module
//!
//! Turns signal flags into a short justification for a trade decision.
//! Each signal kind owns one rule in a table; adding a signal means adding
//! a variant and a rule, nothing else changes.

use serde::{Deserialize, Serialize};

/// Risk/reward multiple a trade must beat to be called out as favorable
pub const FAVORABLE_RISK_REWARD: f64 = 2.0;

/// Technical context gathered by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSignals {
    pub volume_confirmation: bool,
    pub trend_alignment: bool,
    /// Free-form support/resistance note; empty means none
    #[serde(default)]
    pub support_resistance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSignals {
    pub sector: String,
    #[serde(default)]
    pub market_cap: f64,
    pub institutional_interest: bool,
}

/// Everything the composer may mention about one decision
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeSignals {
    pub technicals: TechnicalSignals,
    #[serde(default)]
    pub fundamentals: Option<FundamentalSignals>,
    #[serde(default)]
    pub risk_reward_ratio: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasoningSignal {
    VolumeConfirmation,
    TrendAlignment,
    SupportResistance,
    InstitutionalInterest,
    FavorableRiskReward,
}

/// Maps one signal to its sentence fragment, or `None` when it does not apply
#[derive(Clone, Copy)]
pub struct ReasoningRule {
    pub signal: ReasoningSignal,
    pub sentence: fn(&TradeSignals) -> Option<String>,
}

fn volume_confirmation(s: &TradeSignals) -> Option<String> {
    s.technicals
        .volume_confirmation
        .then(|| "Strong volume confirmation validates the move".to_string())
}

fn trend_alignment(s: &TradeSignals) -> Option<String> {
    s.technicals
        .trend_alignment
        .then(|| "Trade aligns with prevailing trend".to_string())
}

fn support_resistance(s: &TradeSignals) -> Option<String> {
    let note = s.technicals.support_resistance.trim();
    (!note.is_empty()).then(|| note.to_string())
}

fn institutional_interest(s: &TradeSignals) -> Option<String> {
    s.fundamentals
        .as_ref()
        .filter(|f| f.institutional_interest)
        .map(|f| format!("Institutional interest detected in {} sector", f.sector))
}

fn favorable_risk_reward(s: &TradeSignals) -> Option<String> {
    s.risk_reward_ratio
        .filter(|ratio| *ratio > FAVORABLE_RISK_REWARD)
        .map(|ratio| format!("Favorable risk-reward ratio of {:.2}:1", ratio))
}

/// Rules in output order
pub const DEFAULT_RULES: [ReasoningRule; 5] = [
    ReasoningRule {
        signal: ReasoningSignal::VolumeConfirmation,
        sentence: volume_confirmation,
    },
    ReasoningRule {
        signal: ReasoningSignal::TrendAlignment,
        sentence: trend_alignment,
    },
    ReasoningRule {
        signal: ReasoningSignal::SupportResistance,
        sentence: support_resistance,
    },
    ReasoningRule {
        signal: ReasoningSignal::InstitutionalInterest,
        sentence: institutional_interest,
    },
    ReasoningRule {
        signal: ReasoningSignal::FavorableRiskReward,
        sentence: favorable_risk_reward,
    },
];

/// Fragments for every signal that fired, in rule order
pub fn explain(signals: &TradeSignals) -> Vec<(ReasoningSignal, String)> {
    DEFAULT_RULES
        .iter()
        .filter_map(|rule| (rule.sentence)(signals).map(|text| (rule.signal, text)))
        .collect()
}

/// Join fired fragments into one period-terminated paragraph.
///
/// Returns an empty string when no signal fired.
pub fn compose_reasoning(signals: &TradeSignals) -> String {
    let parts: Vec<String> = explain(signals).into_iter().map(|(_, text)| text).collect();
    if parts.is_empty() {
        return String::new();
    }
    format!("{}.", parts.join(". "))
}
