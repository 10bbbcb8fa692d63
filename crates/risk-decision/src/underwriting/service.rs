use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::domain::{CorrelationId, DecisionId, DecisionResult, RiskApplication};
use super::evaluation::{RiskEngine, RiskError};

/// Service wrapping the engine with identifiers, timestamps and audit logging.
#[derive(Debug, Clone, Default)]
pub struct RiskDecisionService {
    engine: RiskEngine,
}

impl RiskDecisionService {
    pub fn new(engine: RiskEngine) -> Self {
        Self { engine }
    }

    /// Evaluate an application against the current clock.
    pub fn evaluate(
        &self,
        application: &RiskApplication,
        correlation_id: CorrelationId,
    ) -> Result<DecisionResult, RiskError> {
        self.evaluate_at(application, correlation_id, Utc::now())
    }

    /// Evaluate an application as of `now`. Ages are measured up to the UTC date of `now`.
    pub fn evaluate_at(
        &self,
        application: &RiskApplication,
        correlation_id: CorrelationId,
        now: DateTime<Utc>,
    ) -> Result<DecisionResult, RiskError> {
        let customer_id = application.client.customer_id.as_str();
        info!(
            customer_id,
            correlation_id = %correlation_id,
            "evaluating risk decision"
        );

        let assessment = match self.engine.score(application, now.date_naive()) {
            Ok(assessment) => assessment,
            Err(err) => {
                warn!(customer_id, correlation_id = %correlation_id, error = %err, "application could not be scored");
                return Err(err);
            }
        };

        info!(
            score = assessment.risk_score,
            decision = %assessment.decision,
            correlation_id = %correlation_id,
            "risk decision complete"
        );

        Ok(DecisionResult {
            decision_id: DecisionId::generate(),
            risk_decision: assessment.decision,
            risk_score: assessment.risk_score,
            evaluated_factors: assessment.factors,
            reasons: assessment.reasons,
            created_at: now,
            correlation_id,
        })
    }
}
