//! 401(k) balance projection to retirement age
//!
//! The existing balance compounds annually at the expected return while the
//! combined employee-plus-employer monthly flow compounds monthly, the same
//! split the compound interest calculator uses for lump sum versus deposits.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{format_currency, format_years};
use crate::report::Report;
use crate::tvm::{annuity_future_value, compound_growth};
use crate::validate::Validator;

/// Inputs for a 401(k) projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementRequest {
    /// Current age in whole years
    pub current_age: u32,
    /// Target retirement age; must exceed the current age
    pub retirement_age: u32,
    /// Existing 401(k) balance
    #[serde(default)]
    pub current_balance: f64,
    /// Employee deferral per month
    pub monthly_contribution: f64,
    /// Employer match as a percentage of the employee deferral
    pub employer_match_percent: f64,
    /// Expected annual return on the percentage scale; zero is legal
    pub expected_return_percent: f64,
}

/// Projection summary at retirement age.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementResult {
    pub years_to_retirement: u32,
    pub current_balance: f64,
    /// Monthly employee deferral, echoed for display
    pub employee_contribution: f64,
    /// Monthly employer match in dollars
    pub employer_contribution: f64,
    pub total_monthly_contribution: f64,
    /// Starting balance plus every monthly flow paid in
    pub total_contributions: f64,
    /// Projected balance minus what was paid in
    pub investment_growth: f64,
    pub final_balance: f64,
}

/// Project a 401(k) balance from today until retirement.
pub fn calculate_retirement(request: &RetirementRequest) -> Result<RetirementResult> {
    let mut v = Validator::new();
    v.ensure(
        "current_age",
        request.current_age > 0,
        "must be greater than zero",
    )
    .ensure(
        "retirement_age",
        request.retirement_age > request.current_age,
        "must be greater than the current age",
    )
    .non_negative("current_balance", request.current_balance)
    .positive("monthly_contribution", request.monthly_contribution)
    .percentage("employer_match_percent", request.employer_match_percent)
    .percentage("expected_return_percent", request.expected_return_percent);
    v.finish()?;

    let years = request.retirement_age - request.current_age;
    let months = f64::from(years) * 12.0;
    let annual_rate = request.expected_return_percent / 100.0;

    let employee_contribution = request.monthly_contribution;
    let employer_contribution =
        request.monthly_contribution * request.employer_match_percent / 100.0;
    let total_monthly_contribution = employee_contribution + employer_contribution;

    let balance_growth = compound_growth(request.current_balance, annual_rate, f64::from(years));
    let contribution_growth =
        annuity_future_value(total_monthly_contribution, annual_rate / 12.0, months);
    let final_balance = balance_growth + contribution_growth;
    let total_contributions = request.current_balance + total_monthly_contribution * months;

    Ok(RetirementResult {
        years_to_retirement: years,
        current_balance: request.current_balance,
        employee_contribution,
        employer_contribution,
        total_monthly_contribution,
        total_contributions,
        investment_growth: final_balance - total_contributions,
        final_balance,
    })
}

impl RetirementResult {
    /// Report rows in display order.
    #[must_use]
    pub fn report(&self) -> Report {
        let mut report = Report::new("401(k) Projection");
        report.push(
            "Years to Retirement",
            format_years(f64::from(self.years_to_retirement)),
        );
        report.push("Current Balance", format_currency(self.current_balance));
        report.push(
            "Monthly Employee Contribution",
            format_currency(self.employee_contribution),
        );
        report.push(
            "Monthly Employer Match",
            format_currency(self.employer_contribution),
        );
        report.push(
            "Total Monthly Contribution",
            format_currency(self.total_monthly_contribution),
        );
        report.push(
            "Total Contributions",
            format_currency(self.total_contributions),
        );
        report.push(
            "Investment Growth",
            format_currency(self.investment_growth),
        );
        report.push("Final 401(k) Balance", format_currency(self.final_balance));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_year_projection() {
        // One year at 12%: balance grows to $1,120 and twelve $100 deposits
        // at 1% monthly grow to 100 * (1.01^12 - 1)/0.01 = $1,268.25
        let result = calculate_retirement(&RetirementRequest {
            current_age: 40,
            retirement_age: 41,
            current_balance: 1_000.0,
            monthly_contribution: 100.0,
            employer_match_percent: 0.0,
            expected_return_percent: 12.0,
        })
        .unwrap();

        assert_eq!(result.years_to_retirement, 1);
        assert!(
            (result.final_balance - 2_388.25).abs() < 0.01,
            "Expected 2388.25, got {}",
            result.final_balance
        );
        assert_eq!(result.total_contributions, 2_200.0);
        assert!((result.investment_growth - 188.25).abs() < 0.01);
    }

    #[test]
    fn test_career_projection_with_match() {
        // Age 30 to 65, $50,000 balance, $500/month with 50% match at 7%:
        // balance leg ~$533,829, contribution leg ~$1,350,791
        let result = calculate_retirement(&RetirementRequest {
            current_age: 30,
            retirement_age: 65,
            current_balance: 50_000.0,
            monthly_contribution: 500.0,
            employer_match_percent: 50.0,
            expected_return_percent: 7.0,
        })
        .unwrap();

        assert_eq!(result.years_to_retirement, 35);
        assert_eq!(result.employer_contribution, 250.0);
        assert_eq!(result.total_monthly_contribution, 750.0);
        assert_eq!(result.total_contributions, 365_000.0);
        assert!(
            (result.final_balance - 1_884_619.0).abs() < 5.0,
            "Expected ~1884619, got {}",
            result.final_balance
        );
        assert!(
            (result.investment_growth - (result.final_balance - 365_000.0)).abs() < 1e-6
        );
    }

    #[test]
    fn test_zero_return_sums_contributions() {
        // 0% is a legal expected return; nothing compounds
        let result = calculate_retirement(&RetirementRequest {
            current_age: 50,
            retirement_age: 60,
            current_balance: 10_000.0,
            monthly_contribution: 200.0,
            employer_match_percent: 25.0,
            expected_return_percent: 0.0,
        })
        .unwrap();

        // 10,000 + 250 * 120 months
        assert_eq!(result.final_balance, 40_000.0);
        assert_eq!(result.investment_growth, 0.0);
    }

    #[test]
    fn test_zero_balance_is_legal() {
        let result = calculate_retirement(&RetirementRequest {
            current_age: 25,
            retirement_age: 30,
            current_balance: 0.0,
            monthly_contribution: 100.0,
            employer_match_percent: 0.0,
            expected_return_percent: 6.0,
        })
        .unwrap();

        assert!(result.final_balance > 0.0);
        assert_eq!(result.total_contributions, 6_000.0);
    }

    #[test]
    fn test_rejects_retirement_age_not_after_current() {
        let errors = calculate_retirement(&RetirementRequest {
            current_age: 65,
            retirement_age: 65,
            current_balance: 0.0,
            monthly_contribution: 100.0,
            employer_match_percent: 0.0,
            expected_return_percent: 6.0,
        })
        .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.0[0].field(), Some("retirement_age"));
    }

    #[test]
    fn test_rejects_zero_contribution() {
        let errors = calculate_retirement(&RetirementRequest {
            current_age: 30,
            retirement_age: 65,
            current_balance: 1_000.0,
            monthly_contribution: 0.0,
            employer_match_percent: 50.0,
            expected_return_percent: 7.0,
        })
        .unwrap_err();

        assert_eq!(errors.0[0].field(), Some("monthly_contribution"));
    }
}
