use super::super::domain::FactorBreakdown;
use super::rules::{
    ELEVATED_RATIO_POINTS, HIGH_TURNOVER_POINTS, LOW_TURNOVER_POINTS, SEVERE_RATIO_POINTS,
    UNDER_21_POINTS, UNDER_25_POINTS,
};

pub const YOUNG_COMPANY_REASON: &str = "Company is less than 3 years old";
pub const LOW_TURNOVER_REASON: &str = "Annual turnover below 100k";
pub const HIGH_TURNOVER_REASON: &str = "Annual turnover exceeds 5,000,000";
pub const UNDER_21_REASON: &str = "Youngest owner is under 21";
pub const UNDER_25_REASON: &str = "Youngest owner is under 25";
pub const SEVERE_RATIO_REASON: &str = "Loan-to-turnover ratio exceeds 20%";
pub const ELEVATED_RATIO_REASON: &str = "Loan-to-turnover ratio exceeds 15%";

/// Explanations derived from factor points alone, in factor order.
pub(crate) fn build_reasons(factors: &FactorBreakdown) -> Vec<String> {
    let company = (factors.company_age_points > 0).then_some(YOUNG_COMPANY_REASON);

    let turnover = if factors.turnover_points >= LOW_TURNOVER_POINTS {
        Some(LOW_TURNOVER_REASON)
    } else if factors.turnover_points >= HIGH_TURNOVER_POINTS {
        Some(HIGH_TURNOVER_REASON)
    } else {
        None
    };

    let owner = if factors.owner_age_points >= UNDER_21_POINTS {
        Some(UNDER_21_REASON)
    } else if factors.owner_age_points >= UNDER_25_POINTS {
        Some(UNDER_25_REASON)
    } else {
        None
    };

    let ratio = if factors.loan_to_turnover_points >= SEVERE_RATIO_POINTS {
        Some(SEVERE_RATIO_REASON)
    } else if factors.loan_to_turnover_points >= ELEVATED_RATIO_POINTS {
        Some(ELEVATED_RATIO_REASON)
    } else {
        None
    };

    [company, turnover, owner, ratio]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_points_produce_no_reasons() {
        assert!(build_reasons(&FactorBreakdown::default()).is_empty());
    }

    #[test]
    fn baseline_points_are_not_explained() {
        let factors = FactorBreakdown {
            company_age_points: 0,
            turnover_points: 10,
            owner_age_points: 5,
            loan_to_turnover_points: 0,
        };
        assert!(build_reasons(&factors).is_empty());
    }

    #[test]
    fn reasons_follow_factor_order() {
        let factors = FactorBreakdown {
            company_age_points: 40,
            turnover_points: 30,
            owner_age_points: 30,
            loan_to_turnover_points: 30,
        };
        assert_eq!(
            build_reasons(&factors),
            vec![
                YOUNG_COMPANY_REASON,
                LOW_TURNOVER_REASON,
                UNDER_21_REASON,
                SEVERE_RATIO_REASON,
            ]
        );
    }

    #[test]
    fn middle_bands_pick_the_softer_wording() {
        let factors = FactorBreakdown {
            company_age_points: 0,
            turnover_points: 25,
            owner_age_points: 15,
            loan_to_turnover_points: 10,
        };
        assert_eq!(
            build_reasons(&factors),
            vec![
                HIGH_TURNOVER_REASON,
                UNDER_25_REASON,
                ELEVATED_RATIO_REASON,
            ]
        );
    }
}
