use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque token propagated unchanged through a request/response pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    /// Use the caller supplied value as received, or mint a fresh one when it is absent
    /// or blank.
    pub fn from_header(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if !value.trim().is_empty() => Self(value.to_string()),
            _ => Self::generate(),
        }
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for a single evaluation. Carries no meaning beyond uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionId(pub String);

impl DecisionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Applicant identity used for correlation only; never scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub customer_id: String,
    pub country_of_application: String,
}

/// Monetary amount with its display currency. No conversion is ever applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub legal_name: String,
    pub country_of_incorporation: String,
    pub date_of_incorporation: NaiveDate,
    pub annual_turnover: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub requested_amount: f64,
}

/// Validated application aggregate handed to the engine.
///
/// Only [`IntakeGuard`](super::intake::IntakeGuard) builds these from HTTP input, so the
/// owner list is non-empty and every amount is finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskApplication {
    pub client: Client,
    pub business: Business,
    pub owners: Vec<Owner>,
    pub loan: Loan,
}

impl RiskApplication {
    /// The owner with the most recent date of birth. Ties resolve to the first listed.
    pub fn youngest_owner(&self) -> Option<&Owner> {
        self.owners
            .iter()
            .reduce(|youngest, owner| {
                if owner.date_of_birth > youngest.date_of_birth {
                    owner
                } else {
                    youngest
                }
            })
    }
}

/// Points contributed by each scored dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBreakdown {
    pub company_age_points: u8,
    pub turnover_points: u8,
    pub owner_age_points: u8,
    pub loan_to_turnover_points: u8,
}

impl FactorBreakdown {
    /// Uncapped sum of the four factors.
    pub fn total(&self) -> u16 {
        u16::from(self.company_age_points)
            + u16::from(self.turnover_points)
            + u16::from(self.owner_age_points)
            + u16::from(self.loan_to_turnover_points)
    }
}

/// Final underwriting verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskDecision {
    Approve,
    Refer,
    Decline,
}

impl RiskDecision {
    pub const fn label(self) -> &'static str {
        match self {
            RiskDecision::Approve => "APPROVE",
            RiskDecision::Refer => "REFER",
            RiskDecision::Decline => "DECLINE",
        }
    }
}

impl fmt::Display for RiskDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Response aggregate for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResult {
    pub decision_id: DecisionId,
    pub risk_decision: RiskDecision,
    pub risk_score: u8,
    pub evaluated_factors: FactorBreakdown,
    pub reasons: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub correlation_id: CorrelationId,
}
