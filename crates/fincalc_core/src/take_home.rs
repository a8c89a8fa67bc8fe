//! Annual take-home pay after flat-rate payroll deductions
//!
//! Federal and state income tax are flat rates supplied by the caller; FICA
//! rates are fixed constants. No brackets, caps, or filing statuses.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::format_currency;
use crate::report::Report;
use crate::validate::Validator;

/// Social Security (OASDI) employee payroll rate.
pub const SOCIAL_SECURITY_RATE: f64 = 0.062;

/// Medicare employee payroll rate.
pub const MEDICARE_RATE: f64 = 0.0145;

/// Inputs for a take-home pay estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TakeHomeRequest {
    /// Gross annual salary; zero is legal and yields an all-zero result
    pub gross_salary: f64,
    /// Effective federal income tax rate on the percentage scale
    pub federal_rate_percent: f64,
    /// Effective state income tax rate on the percentage scale
    pub state_rate_percent: f64,
}

/// Deduction breakdown for one year of salary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeHomeResult {
    pub gross_salary: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    pub social_security_tax: f64,
    pub medicare_tax: f64,
    pub total_deductions: f64,
    pub take_home_pay: f64,
    pub monthly_take_home: f64,
}

/// Compute annual and monthly take-home pay.
pub fn calculate_take_home(request: &TakeHomeRequest) -> Result<TakeHomeResult> {
    let mut v = Validator::new();
    v.non_negative("gross_salary", request.gross_salary)
        .percentage("federal_rate_percent", request.federal_rate_percent)
        .percentage("state_rate_percent", request.state_rate_percent);
    v.finish()?;

    let gross = request.gross_salary;
    let federal_tax = gross * request.federal_rate_percent / 100.0;
    let state_tax = gross * request.state_rate_percent / 100.0;
    let social_security_tax = gross * SOCIAL_SECURITY_RATE;
    let medicare_tax = gross * MEDICARE_RATE;
    let total_deductions = federal_tax + state_tax + social_security_tax + medicare_tax;
    let take_home_pay = gross - total_deductions;

    Ok(TakeHomeResult {
        gross_salary: gross,
        federal_tax,
        state_tax,
        social_security_tax,
        medicare_tax,
        total_deductions,
        take_home_pay,
        monthly_take_home: take_home_pay / 12.0,
    })
}

impl TakeHomeResult {
    /// Report rows in display order.
    #[must_use]
    pub fn report(&self) -> Report {
        let mut report = Report::new("Take-Home Pay");
        report.push("Gross Annual Salary", format_currency(self.gross_salary));
        report.push("Federal Tax", format_currency(self.federal_tax));
        report.push("State Tax", format_currency(self.state_tax));
        report.push("Social Security", format_currency(self.social_security_tax));
        report.push("Medicare", format_currency(self.medicare_tax));
        report.push("Total Deductions", format_currency(self.total_deductions));
        report.push("Take-Home Pay", format_currency(self.take_home_pay));
        report.push("Monthly Take-Home", format_currency(self.monthly_take_home));
        report
    }
}
