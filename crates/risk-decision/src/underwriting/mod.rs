//! Business loan underwriting: request intake, factor scoring, the decision ladder and the
//! HTTP surface that exposes it.
//!
//! Scoring is a pure function of the validated application and the evaluation date. The
//! service layer adds identifiers and timestamps; the router owns validation and
//! correlation-id handling so the engine never sees unvalidated input.

pub mod correlation;
pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use correlation::{propagate_correlation_id, CORRELATION_HEADER};
pub use domain::{
    Business, Client, CorrelationId, DecisionId, DecisionResult, FactorBreakdown, Loan, Money,
    Owner, RiskApplication, RiskDecision,
};
pub use evaluation::{RiskAssessment, RiskEngine, RiskError};
pub use intake::{IntakeGuard, RiskDecisionRequest, ValidationErrors};
pub use router::{risk_decision_router, risk_decision_routes, HealthResponse};
pub use service::RiskDecisionService;
