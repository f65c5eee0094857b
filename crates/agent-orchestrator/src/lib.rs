//! Agent Orchestrator
//!
//! Stateless facade over the risk and decision engine: position sizing,
//! risk/reward, trap detection, pivots, market bias, trade reasoning,
//! decision ranking and risk-limit validation.

pub mod orchestrator;
pub mod ranker;
pub mod reasoning;


pub use orchestrator::AgentOrchestrator;
pub use ranker::{decision_score, prioritize_decisions};
pub use reasoning::{
    compose_reasoning, explain, FundamentalSignals, ReasoningRule, ReasoningSignal,
    TechnicalSignals, TradeSignals, DEFAULT_RULES, FAVORABLE_RISK_REWARD,
};

pub use analysis_core::{
    AgentDecision, AgentType, DecisionStatus, DecisionType, EngineError, MarketBias, Trend,
    TrapType,
};
pub use risk_manager::{
    ExposureSummary, PortfolioPosition, PositionSizeCalculation, RiskAppetite, RiskSettings,
    TradeEvaluation, ValidationResult,
};
pub use technical_analysis::{
    CprResult, MarketBiasResult, TrapAssessment, DEFAULT_VOLUME_MULTIPLIER,
};
