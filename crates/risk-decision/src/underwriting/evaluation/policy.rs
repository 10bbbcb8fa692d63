use super::super::domain::RiskDecision;
use super::rules::{LOW_RATIO, SEVERE_RATIO};

pub(crate) const MAX_RISK_SCORE: u8 = 100;
pub(crate) const APPROVE_MAX_SCORE: u8 = 33;
pub(crate) const REFER_MAX_SCORE: u8 = 66;

/// Priority ladder mapping the capped score and ratio to a verdict. First match wins.
pub(crate) fn decide_outcome(risk_score: u8, loan_to_turnover_ratio: f64) -> RiskDecision {
    if loan_to_turnover_ratio > SEVERE_RATIO {
        return RiskDecision::Decline;
    }

    if risk_score <= APPROVE_MAX_SCORE && loan_to_turnover_ratio < LOW_RATIO {
        RiskDecision::Approve
    } else if risk_score > APPROVE_MAX_SCORE && risk_score <= REFER_MAX_SCORE {
        RiskDecision::Refer
    } else if risk_score > REFER_MAX_SCORE {
        RiskDecision::Decline
    } else {
        // low score with a ratio between 0.10 and 0.20
        RiskDecision::Refer
    }
}
