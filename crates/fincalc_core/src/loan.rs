//! Fixed-rate personal loan amortization

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::format_currency;
use crate::report::Report;
use crate::tvm::amortized_payment;
use crate::validate::Validator;

/// Inputs for a fully amortized fixed-rate loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Amount borrowed
    pub principal: f64,
    /// Annual interest rate on the percentage scale (`6.0` = 6%)
    pub annual_rate_percent: f64,
    /// Repayment term in years
    pub term_years: f64,
}

/// Amortization summary for a personal loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResult {
    /// Level monthly payment
    pub monthly_payment: f64,
    /// Sum of all payments over the term
    pub total_payment: f64,
    /// Interest portion of the total payment
    pub total_interest: f64,
    /// Amount borrowed, echoed for display
    pub principal: f64,
}

/// Compute the monthly payment and lifetime cost of a loan.
///
/// A 0% rate is legal and degenerates to straight-line repayment.
pub fn calculate_loan(request: &LoanRequest) -> Result<LoanResult> {
    let mut v = Validator::new();
    v.positive("principal", request.principal)
        .percentage("annual_rate_percent", request.annual_rate_percent)
        .positive("term_years", request.term_years);
    v.finish()?;

    let monthly_rate = request.annual_rate_percent / 100.0 / 12.0;
    let payments = request.term_years * 12.0;
    let monthly_payment = amortized_payment(request.principal, monthly_rate, payments);
    let total_payment = monthly_payment * payments;

    Ok(LoanResult {
        monthly_payment,
        total_payment,
        total_interest: total_payment - request.principal,
        principal: request.principal,
    })
}

impl LoanResult {
    /// Report rows in display order.
    #[must_use]
    pub fn report(&self) -> Report {
        let mut report = Report::new("Personal Loan");
        report.push("Monthly Payment", format_currency(self.monthly_payment));
        report.push("Total Payment", format_currency(self.total_payment));
        report.push("Total Interest", format_currency(self.total_interest));
        report.push("Principal Amount", format_currency(self.principal));
        report
    }
}
