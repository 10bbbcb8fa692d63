use serde_json::json;

use super::common::*;
use crate::underwriting::intake::{IntakeGuard, RiskDecisionRequest};

fn validate(value: serde_json::Value) -> Result<crate::underwriting::RiskApplication, Vec<String>> {
    let request: RiskDecisionRequest = serde_json::from_value(value).expect("payload parses");
    IntakeGuard::new()
        .application_from_request(request, today())
        .map_err(|errors| errors.into_errors())
}

#[test]
fn valid_request_becomes_application() {
    let application = IntakeGuard::new()
        .application_from_request(valid_request(), today())
        .expect("request is valid");

    assert_eq!(application.client.customer_id, "CUST-001");
    assert_eq!(application.business.annual_turnover.amount, 250_000.0);
    assert_eq!(application.business.annual_turnover.currency, "GBP");
    assert_eq!(application.owners.len(), 1);
    assert_eq!(application.owners[0].date_of_birth, date(1990, 5, 20));
    assert_eq!(application.loan.requested_amount, 20_000.0);
}

#[test]
fn missing_sections_are_each_reported() {
    let errors = validate(json!({})).expect_err("empty payload rejected");
    assert_eq!(
        errors,
        vec![
            "client: Client details are required",
            "business: Business details are required",
            "owners: At least one owner is required",
            "loan: Loan details are required",
        ]
    );
}

#[test]
fn empty_owner_list_is_rejected() {
    let mut payload = valid_request_json();
    payload["owners"] = json!([]);

    let errors = validate(payload).expect_err("owners required");
    assert_eq!(errors, vec!["owners: At least one owner is required"]);
}

#[test]
fn iso_codes_must_be_upper_case_letters() {
    let mut payload = valid_request_json();
    payload["client"]["countryOfApplication"] = json!("gb");
    payload["business"]["annualTurnover"]["currency"] = json!("GBPX");

    let errors = validate(payload).expect_err("codes rejected");
    assert!(errors.contains(
        &"client.countryOfApplication: Country of application must be a 2-letter ISO code (e.g. GB)"
            .to_string()
    ));
    assert!(errors.contains(
        &"business.annualTurnover.currency: Currency must be a 3-letter ISO code (e.g. GBP)"
            .to_string()
    ));
}

#[test]
fn blank_text_fields_are_required() {
    let mut payload = valid_request_json();
    payload["client"]["customerId"] = json!("  ");
    payload["business"]["legalName"] = json!("");
    payload["owners"][0]["fullName"] = json!(null);

    let errors = validate(payload).expect_err("blank text rejected");
    assert_eq!(
        errors,
        vec![
            "client.customerId: Customer ID is required",
            "business.legalName: Legal name is required",
            "owners[0].fullName: Owner full name is required",
        ]
    );
}

#[test]
fn negative_amounts_are_rejected() {
    let mut payload = valid_request_json();
    payload["business"]["annualTurnover"]["amount"] = json!(-1.0);
    payload["loan"]["requestedAmount"] = json!(-50.0);

    let errors = validate(payload).expect_err("negative amounts rejected");
    assert_eq!(
        errors,
        vec![
            "business.annualTurnover.amount: Amount must be zero or positive",
            "loan.requestedAmount: Requested amount must be zero or positive",
        ]
    );
}

#[test]
fn zero_turnover_passes_intake() {
    let mut payload = valid_request_json();
    payload["business"]["annualTurnover"]["amount"] = json!(0);

    let application = validate(payload).expect("zero is a valid amount");
    assert_eq!(application.business.annual_turnover.amount, 0.0);
}

#[test]
fn future_and_malformed_dates_are_rejected() {
    let mut payload = valid_request_json();
    payload["business"]["dateOfIncorporation"] = json!("2026-10-18");
    payload["owners"] = json!([
        { "fullName": "Jane Smith", "dateOfBirth": "1990-05-20" },
        { "fullName": "John Smith", "dateOfBirth": "20/05/1990" }
    ]);

    let errors = validate(payload).expect_err("dates rejected");
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[0],
        "business.dateOfIncorporation: Date of incorporation must not be in the future"
    );
    assert_eq!(
        errors[1],
        "owners[1].dateOfBirth: Owner date of birth must be a date in YYYY-MM-DD format"
    );
}

#[test]
fn dates_equal_to_today_are_accepted() {
    let mut payload = valid_request_json();
    payload["business"]["dateOfIncorporation"] = json!("2026-10-17");

    let application = validate(payload).expect("today is allowed");
    assert_eq!(application.business.date_of_incorporation, today());
}

#[test]
fn country_of_incorporation_is_free_text_but_required() {
    let mut payload = valid_request_json();
    payload["business"]["countryOfIncorporation"] = json!("United Kingdom");
    assert!(validate(payload.clone()).is_ok());

    payload["business"]
        .as_object_mut()
        .expect("business object")
        .remove("countryOfIncorporation");
    let errors = validate(payload).expect_err("country required");
    assert_eq!(
        errors,
        vec!["business.countryOfIncorporation: Country of incorporation is required"]
    );
}

#[test]
fn validation_errors_report_fields_without_values() {
    let mut payload = valid_request_json();
    payload["client"]["countryOfApplication"] = json!("gb");
    payload["owners"][0]["dateOfBirth"] = json!("not-a-date");

    let request: RiskDecisionRequest = serde_json::from_value(payload).expect("payload parses");
    let errors = IntakeGuard::new()
        .application_from_request(request, today())
        .expect_err("request rejected");

    assert_eq!(
        errors.fields(),
        vec!["client.countryOfApplication", "owners[0].dateOfBirth"]
    );
    let rendered = errors.to_string();
    assert!(rendered.starts_with("validation failed: client.countryOfApplication: "));
    assert!(!rendered.contains("not-a-date"));
}
