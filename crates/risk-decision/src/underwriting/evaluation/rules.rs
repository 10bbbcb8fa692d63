use chrono::NaiveDate;

use super::super::domain::{Business, Loan, Owner};
use super::RiskError;

pub(crate) const ESTABLISHED_COMPANY_YEARS: u32 = 3;
pub(crate) const YOUNG_COMPANY_POINTS: u8 = 40;

pub(crate) const LOW_TURNOVER_CEILING: f64 = 100_000.0;
pub(crate) const HIGH_TURNOVER_FLOOR: f64 = 5_000_000.0;
pub(crate) const LOW_TURNOVER_POINTS: u8 = 30;
pub(crate) const MID_TURNOVER_POINTS: u8 = 10;
pub(crate) const HIGH_TURNOVER_POINTS: u8 = 25;

pub(crate) const UNDER_21_AGE: u32 = 21;
pub(crate) const UNDER_25_AGE: u32 = 25;
pub(crate) const UNDER_21_POINTS: u8 = 30;
pub(crate) const UNDER_25_POINTS: u8 = 15;
pub(crate) const SETTLED_OWNER_POINTS: u8 = 5;

pub(crate) const SEVERE_RATIO: f64 = 0.20;
pub(crate) const ELEVATED_RATIO: f64 = 0.15;
pub(crate) const LOW_RATIO: f64 = 0.10;
pub(crate) const SEVERE_RATIO_POINTS: u8 = 30;
pub(crate) const ELEVATED_RATIO_POINTS: u8 = 10;

/// Whole calendar years elapsed from `from` to `to`. A date in the future counts as zero.
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> u32 {
    to.years_since(from).unwrap_or(0)
}

pub(crate) fn company_age_points(business: &Business, today: NaiveDate) -> u8 {
    let age = whole_years_between(business.date_of_incorporation, today);
    if age < ESTABLISHED_COMPANY_YEARS {
        YOUNG_COMPANY_POINTS
    } else {
        0
    }
}

pub(crate) fn turnover_points(business: &Business) -> u8 {
    let amount = business.annual_turnover.amount;
    if amount < LOW_TURNOVER_CEILING {
        LOW_TURNOVER_POINTS
    } else if amount <= HIGH_TURNOVER_FLOOR {
        MID_TURNOVER_POINTS
    } else {
        HIGH_TURNOVER_POINTS
    }
}

/// Scores the youngest owner. Ages under 18 land in the under-21 band.
pub(crate) fn owner_age_points(youngest: &Owner, today: NaiveDate) -> u8 {
    let age = whole_years_between(youngest.date_of_birth, today);
    if age < UNDER_21_AGE {
        UNDER_21_POINTS
    } else if age < UNDER_25_AGE {
        UNDER_25_POINTS
    } else {
        SETTLED_OWNER_POINTS
    }
}

/// Requested amount divided by annual turnover.
pub fn loan_to_turnover_ratio(loan: &Loan, business: &Business) -> Result<f64, RiskError> {
    let turnover = business.annual_turnover.amount;
    if turnover == 0.0 || !turnover.is_finite() {
        return Err(RiskError::UnscorableInput { amount: turnover });
    }

    let ratio = loan.requested_amount / turnover;
    if ratio.is_finite() {
        Ok(ratio)
    } else {
        Err(RiskError::UnscorableInput { amount: turnover })
    }
}

/// Highest matching band only. Ratios from 0.10 to 0.15 inclusive score nothing.
pub(crate) fn loan_to_turnover_points(ratio: f64) -> u8 {
    if ratio > SEVERE_RATIO {
        SEVERE_RATIO_POINTS
    } else if ratio > ELEVATED_RATIO {
        ELEVATED_RATIO_POINTS
    } else {
        0
    }
}
