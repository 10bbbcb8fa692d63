use chrono::Utc;
use clap::Args;
use risk_decision::error::AppError;
use risk_decision::underwriting::{
    CorrelationId, DecisionResult, IntakeGuard, RiskDecisionRequest, RiskDecisionService,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Path to a JSON application in the same shape the HTTP API accepts
    #[arg(long)]
    pub(crate) request: PathBuf,
    /// Correlation id to stamp on the decision (generated when omitted)
    #[arg(long)]
    pub(crate) correlation_id: Option<String>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let result = evaluate_file(&args.request, args.correlation_id.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub(crate) fn evaluate_file(
    path: &Path,
    correlation_id: Option<&str>,
) -> Result<DecisionResult, AppError> {
    let raw = fs::read_to_string(path)?;
    let request: RiskDecisionRequest = serde_json::from_str(&raw)?;

    let now = Utc::now();
    let application = IntakeGuard::new().application_from_request(request, now.date_naive())?;
    let service = RiskDecisionService::default();
    let result =
        service.evaluate_at(&application, CorrelationId::from_header(correlation_id), now)?;

    Ok(result)
}
