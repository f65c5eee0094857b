use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which agent produced a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentType {
    MacroAnalyst,
    CashMarketSpecialist,
    StrategyLogic,
    PatternRecognition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionType {
    Buy,
    Sell,
    Hold,
    Alert,
    Warning,
}

/// Lifecycle of a decision. Producers create it `Pending`; approval and
/// execution happen outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Executed,
    Expired,
}

/// A trade idea emitted by an agent and awaiting review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDecision {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub agent_type: AgentType,
    pub stock_symbol: String,
    pub decision_type: DecisionType,
    #[serde(default)]
    pub reasoning: String,
    /// 0 to 100
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub suggested_price: Option<f64>,
    #[serde(default)]
    pub suggested_quantity: Option<i64>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub target_price: Option<f64>,
    #[serde(default)]
    pub risk_reward_ratio: Option<f64>,
    #[serde(default)]
    pub status: DecisionStatus,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub executed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AgentDecision {
    /// New pending decision with no scores attached
    pub fn pending(
        id: impl Into<String>,
        agent_type: AgentType,
        stock_symbol: impl Into<String>,
        decision_type: DecisionType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            user_id: None,
            agent_type,
            stock_symbol: stock_symbol.into(),
            decision_type,
            reasoning: String::new(),
            confidence_score: None,
            suggested_price: None,
            suggested_quantity: None,
            stop_loss: None,
            target_price: None,
            risk_reward_ratio: None,
            status: DecisionStatus::Pending,
            approved_by: None,
            approved_at: None,
            executed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_confidence(mut self, confidence_score: f64) -> Self {
        self.confidence_score = Some(confidence_score);
        self
    }

    pub fn with_risk_reward(mut self, ratio: f64) -> Self {
        self.risk_reward_ratio = Some(ratio);
        self
    }
}

/// Prevailing price trend supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Uptrend,
    Downtrend,
    Sideways,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketBias {
    Bullish,
    Bearish,
    Neutral,
}

impl MarketBias {
    pub fn to_label(&self) -> &'static str {
        match self {
            MarketBias::Bullish => "Bullish",
            MarketBias::Bearish => "Bearish",
            MarketBias::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrapType {
    BullTrap,
    BearTrap,
    VolumeTrap,
    InstitutionalTrap,
}
