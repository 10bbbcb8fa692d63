mod policy;
mod reasons;
mod rules;

pub use reasons::{
    ELEVATED_RATIO_REASON, HIGH_TURNOVER_REASON, LOW_TURNOVER_REASON, SEVERE_RATIO_REASON,
    UNDER_21_REASON, UNDER_25_REASON, YOUNG_COMPANY_REASON,
};
pub use rules::{loan_to_turnover_ratio, whole_years_between};

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{FactorBreakdown, RiskApplication, RiskDecision};
use policy::{decide_outcome, MAX_RISK_SCORE};

/// Failures the scoring rules themselves can detect.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RiskError {
    #[error("annual turnover of {amount} cannot be used to compute a loan-to-turnover ratio")]
    UnscorableInput { amount: f64 },
    #[error("application lists no owners")]
    MissingOwners,
}

/// Stateless evaluator applying the underwriting rule tables to an application.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEngine;

impl RiskEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score an application as of `today`. Either every factor is computed or none is.
    pub fn score(
        &self,
        application: &RiskApplication,
        today: NaiveDate,
    ) -> Result<RiskAssessment, RiskError> {
        let ratio = rules::loan_to_turnover_ratio(&application.loan, &application.business)?;
        let youngest = application
            .youngest_owner()
            .ok_or(RiskError::MissingOwners)?;

        let factors = FactorBreakdown {
            company_age_points: rules::company_age_points(&application.business, today),
            turnover_points: rules::turnover_points(&application.business),
            owner_age_points: rules::owner_age_points(youngest, today),
            loan_to_turnover_points: rules::loan_to_turnover_points(ratio),
        };

        let risk_score = cap_score(factors.total());
        let decision = decide_outcome(risk_score, ratio);
        let reasons = reasons::build_reasons(&factors);

        Ok(RiskAssessment {
            factors,
            risk_score,
            loan_to_turnover_ratio: ratio,
            decision,
            reasons,
        })
    }
}

fn cap_score(total: u16) -> u8 {
    u8::try_from(total.min(u16::from(MAX_RISK_SCORE))).unwrap_or(MAX_RISK_SCORE)
}

/// Deterministic portion of an evaluation: identical input always yields an identical assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub factors: FactorBreakdown,
    pub risk_score: u8,
    pub loan_to_turnover_ratio: f64,
    pub decision: RiskDecision,
    pub reasons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_capped_at_one_hundred() {
        assert_eq!(cap_score(130), 100);
        assert_eq!(cap_score(100), 100);
        assert_eq!(cap_score(15), 15);
        assert_eq!(cap_score(0), 0);
    }
}
