//! Compound growth of a principal with optional monthly contributions
//!
//! The lump sum compounds at the requested frequency while contributions
//! compound monthly, matching how savings accounts typically credit deposits.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{format_currency, format_percentage};
use crate::report::Report;
use crate::tvm::{annuity_future_value, compound_growth, effective_annual_rate};
use crate::validate::Validator;

/// Inputs for a compound interest projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestRequest {
    /// Starting lump sum
    pub principal: f64,
    /// Annual rate on the percentage scale; must be strictly positive
    pub annual_rate_percent: f64,
    /// Compounding periods per year for the lump sum (1, 2, 4, 12, 365)
    pub periods_per_year: u32,
    /// Investment horizon in years
    pub years: f64,
    /// Level monthly deposit, compounded monthly
    #[serde(default)]
    pub monthly_contribution: f64,
}

/// Growth summary for a compound interest projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub principal: f64,
    pub monthly_contribution: f64,
    /// Principal plus every deposit made over the horizon
    pub total_contributions: f64,
    pub future_value: f64,
    /// Growth in excess of what was paid in
    pub total_interest: f64,
    /// Annualized rate implied by the overall growth, as a fraction
    pub effective_annual_rate: f64,
}

/// Project the future value of a principal with monthly contributions.
pub fn calculate_compound_interest(
    request: &CompoundInterestRequest,
) -> Result<CompoundInterestResult> {
    let mut v = Validator::new();
    v.positive("principal", request.principal)
        .percentage("annual_rate_percent", request.annual_rate_percent)
        .ensure(
            "annual_rate_percent",
            request.annual_rate_percent != 0.0,
            "must be greater than zero",
        )
        .ensure(
            "periods_per_year",
            request.periods_per_year >= 1,
            "must be at least 1",
        )
        .positive("years", request.years)
        .non_negative("monthly_contribution", request.monthly_contribution);
    v.finish()?;

    let annual_rate = request.annual_rate_percent / 100.0;
    let period_rate = annual_rate / f64::from(request.periods_per_year);
    let total_periods = request.years * f64::from(request.periods_per_year);
    let months = request.years * 12.0;

    let lump_growth = compound_growth(request.principal, period_rate, total_periods);
    let contribution_growth =
        annuity_future_value(request.monthly_contribution, annual_rate / 12.0, months);
    let future_value = lump_growth + contribution_growth;

    let total_contributions = request.principal + request.monthly_contribution * months;
    let effective_rate = effective_annual_rate(future_value, total_contributions, request.years)?;

    Ok(CompoundInterestResult {
        principal: request.principal,
        monthly_contribution: request.monthly_contribution,
        total_contributions,
        future_value,
        total_interest: future_value - total_contributions,
        effective_annual_rate: effective_rate,
    })
}

impl CompoundInterestResult {
    /// Report rows in display order.
    #[must_use]
    pub fn report(&self) -> Report {
        let mut report = Report::new("Compound Interest");
        report.push("Initial Principal", format_currency(self.principal));
        report.push(
            "Monthly Contributions",
            format_currency(self.monthly_contribution),
        );
        report.push(
            "Total Contributions",
            format_currency(self.total_contributions),
        );
        report.push("Future Value", format_currency(self.future_value));
        report.push("Total Interest Earned", format_currency(self.total_interest));
        report.push(
            "Effective Annual Rate",
            format_percentage(self.effective_annual_rate),
        );
        report
    }
}
