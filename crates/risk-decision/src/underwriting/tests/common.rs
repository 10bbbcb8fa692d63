use axum::body::to_bytes;
use axum::response::Response;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::{json, Value};

use crate::underwriting::domain::{Business, Client, Loan, Money, Owner, RiskApplication};
use crate::underwriting::intake::RiskDecisionRequest;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date")
}

pub(super) fn evaluation_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0)
        .single()
        .expect("valid instant")
}

pub(super) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub(super) fn owner(name: &str, dob: NaiveDate) -> Owner {
    Owner {
        full_name: name.to_string(),
        date_of_birth: dob,
    }
}

/// Six-year-old company, 250k turnover, one 34 year old owner.
pub(super) fn application(turnover: f64, requested: f64) -> RiskApplication {
    RiskApplication {
        client: Client {
            customer_id: "CUST-001".to_string(),
            country_of_application: "GB".to_string(),
        },
        business: Business {
            legal_name: "Acme Ltd".to_string(),
            country_of_incorporation: "UK".to_string(),
            date_of_incorporation: date(2020, 10, 17),
            annual_turnover: Money {
                amount: turnover,
                currency: "GBP".to_string(),
            },
        },
        owners: vec![owner("Jane Smith", date(1992, 5, 20))],
        loan: Loan {
            requested_amount: requested,
        },
    }
}

/// One-year-old company, 50k turnover, a 19 year old owner asking for 40k.
pub(super) fn high_risk_application() -> RiskApplication {
    let mut application = application(50_000.0, 40_000.0);
    application.business.date_of_incorporation = date(2025, 10, 17);
    application.owners = vec![
        owner("Senior Partner", date(1970, 1, 1)),
        owner("Junior Partner", date(2007, 3, 3)),
    ];
    application
}

pub(super) fn valid_request_json() -> Value {
    json!({
        "client": { "customerId": "CUST-001", "countryOfApplication": "GB" },
        "business": {
            "legalName": "Acme Ltd",
            "countryOfIncorporation": "UK",
            "dateOfIncorporation": "2020-01-15",
            "annualTurnover": { "amount": 250000.00, "currency": "GBP" }
        },
        "owners": [{ "fullName": "Jane Smith", "dateOfBirth": "1990-05-20" }],
        "loan": { "requestedAmount": 20000.00 }
    })
}

pub(super) fn valid_request() -> RiskDecisionRequest {
    serde_json::from_value(valid_request_json()).expect("fixture deserializes")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
