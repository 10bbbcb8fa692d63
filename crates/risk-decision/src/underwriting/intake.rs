use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{Business, Client, Loan, Money, Owner, RiskApplication};

/// Inbound payload exactly as the caller sent it. Every field is optional here so that
/// missing data is reported field by field instead of as a single parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskDecisionRequest {
    #[serde(default)]
    pub client: Option<ClientPayload>,
    #[serde(default)]
    pub business: Option<BusinessPayload>,
    #[serde(default)]
    pub owners: Option<Vec<OwnerPayload>>,
    #[serde(default)]
    pub loan: Option<LoanPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub country_of_application: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPayload {
    #[serde(default)]
    pub legal_name: Option<String>,
    #[serde(default)]
    pub country_of_incorporation: Option<String>,
    #[serde(default)]
    pub date_of_incorporation: Option<String>,
    #[serde(default)]
    pub annual_turnover: Option<MoneyPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoneyPayload {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerPayload {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayload {
    #[serde(default)]
    pub requested_amount: Option<f64>,
}

/// Every field-level problem found in a request, formatted as `path: message`.
/// Messages never echo submitted values.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {}", .errors.join("; "))]
pub struct ValidationErrors {
    errors: Vec<String>,
}

impl ValidationErrors {
    pub fn single(field: &str, message: impl fmt::Display) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &str, message: impl fmt::Display) {
        self.errors.push(format!("{field}: {message}"));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Field paths that failed, without their messages.
    pub fn fields(&self) -> Vec<&str> {
        self.errors
            .iter()
            .map(|entry| entry.split_once(": ").map_or(entry.as_str(), |(field, _)| field))
            .collect()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Converts raw requests into validated applications the engine can trust.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn new() -> Self {
        Self
    }

    /// Validate `request`; dates must not fall after `today`.
    pub fn application_from_request(
        &self,
        request: RiskDecisionRequest,
        today: NaiveDate,
    ) -> Result<RiskApplication, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let client = match request.client {
            Some(client) => validate_client(client, &mut errors),
            None => {
                errors.push("client", "Client details are required");
                None
            }
        };

        let business = match request.business {
            Some(business) => validate_business(business, today, &mut errors),
            None => {
                errors.push("business", "Business details are required");
                None
            }
        };

        let owners = match request.owners {
            Some(owners) if !owners.is_empty() => {
                let validated: Vec<Option<Owner>> = owners
                    .into_iter()
                    .enumerate()
                    .map(|(index, owner)| validate_owner(index, owner, today, &mut errors))
                    .collect();
                validated.into_iter().collect::<Option<Vec<Owner>>>()
            }
            _ => {
                errors.push("owners", "At least one owner is required");
                None
            }
        };

        let loan = match request.loan {
            Some(loan) => validate_amount(
                "loan.requestedAmount",
                "Requested amount",
                loan.requested_amount,
                &mut errors,
            )
            .map(|requested_amount| Loan { requested_amount }),
            None => {
                errors.push("loan", "Loan details are required");
                None
            }
        };

        match (client, business, owners, loan) {
            (Some(client), Some(business), Some(owners), Some(loan)) if errors.is_empty() => {
                Ok(RiskApplication {
                    client,
                    business,
                    owners,
                    loan,
                })
            }
            _ => Err(errors),
        }
    }
}

fn validate_client(client: ClientPayload, errors: &mut ValidationErrors) -> Option<Client> {
    let customer_id = required_text(
        "client.customerId",
        "Customer ID is required",
        client.customer_id,
        errors,
    );

    let country = required_text(
        "client.countryOfApplication",
        "Country of application is required",
        client.country_of_application,
        errors,
    )
    .and_then(|code| {
        if is_iso_code(&code, 2) {
            Some(code)
        } else {
            errors.push(
                "client.countryOfApplication",
                "Country of application must be a 2-letter ISO code (e.g. GB)",
            );
            None
        }
    });

    Some(Client {
        customer_id: customer_id?,
        country_of_application: country?,
    })
}

fn validate_business(
    business: BusinessPayload,
    today: NaiveDate,
    errors: &mut ValidationErrors,
) -> Option<Business> {
    let legal_name = required_text(
        "business.legalName",
        "Legal name is required",
        business.legal_name,
        errors,
    );

    let country_of_incorporation = match business.country_of_incorporation {
        Some(country) => Some(country),
        None => {
            errors.push(
                "business.countryOfIncorporation",
                "Country of incorporation is required",
            );
            None
        }
    };

    let date_of_incorporation = past_or_present_date(
        "business.dateOfIncorporation",
        "Date of incorporation",
        business.date_of_incorporation,
        today,
        errors,
    );

    let annual_turnover = match business.annual_turnover {
        Some(turnover) => validate_money("business.annualTurnover", turnover, errors),
        None => {
            errors.push("business.annualTurnover", "Annual turnover is required");
            None
        }
    };

    Some(Business {
        legal_name: legal_name?,
        country_of_incorporation: country_of_incorporation?,
        date_of_incorporation: date_of_incorporation?,
        annual_turnover: annual_turnover?,
    })
}

fn validate_money(
    path: &str,
    money: MoneyPayload,
    errors: &mut ValidationErrors,
) -> Option<Money> {
    let amount = validate_amount(&format!("{path}.amount"), "Amount", money.amount, errors);

    let currency_path = format!("{path}.currency");
    let currency = required_text(&currency_path, "Currency is required", money.currency, errors)
        .and_then(|code| {
            if is_iso_code(&code, 3) {
                Some(code)
            } else {
                errors.push(
                    &currency_path,
                    "Currency must be a 3-letter ISO code (e.g. GBP)",
                );
                None
            }
        });

    Some(Money {
        amount: amount?,
        currency: currency?,
    })
}

fn validate_owner(
    index: usize,
    owner: OwnerPayload,
    today: NaiveDate,
    errors: &mut ValidationErrors,
) -> Option<Owner> {
    let full_name = required_text(
        &format!("owners[{index}].fullName"),
        "Owner full name is required",
        owner.full_name,
        errors,
    );

    let date_of_birth = past_or_present_date(
        &format!("owners[{index}].dateOfBirth"),
        "Owner date of birth",
        owner.date_of_birth,
        today,
        errors,
    );

    Some(Owner {
        full_name: full_name?,
        date_of_birth: date_of_birth?,
    })
}

fn required_text(
    path: &str,
    message: &str,
    value: Option<String>,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            errors.push(path, message);
            None
        }
    }
}

fn validate_amount(
    path: &str,
    label: &str,
    value: Option<f64>,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    match value {
        Some(amount) if amount.is_finite() && amount >= 0.0 => Some(amount),
        Some(_) => {
            errors.push(path, format!("{label} must be zero or positive"));
            None
        }
        None => {
            errors.push(path, format!("{label} is required"));
            None
        }
    }
}

fn past_or_present_date(
    path: &str,
    label: &str,
    value: Option<String>,
    today: NaiveDate,
    errors: &mut ValidationErrors,
) -> Option<NaiveDate> {
    let Some(raw) = value else {
        errors.push(path, format!("{label} is required"));
        return None;
    };

    match parse_date(&raw) {
        Ok(date) if date <= today => Some(date),
        Ok(_) => {
            errors.push(path, format!("{label} must not be in the future"));
            None
        }
        Err(_) => {
            errors.push(path, format!("{label} must be a date in YYYY-MM-DD format"));
            None
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
}

fn is_iso_code(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|byte| byte.is_ascii_uppercase())
}
