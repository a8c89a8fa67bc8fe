//! Mortgage amortization with a down payment

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::format_currency;
use crate::report::Report;
use crate::tvm::amortized_payment;
use crate::validate::Validator;

/// Inputs for a fixed-rate mortgage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageRequest {
    /// Purchase price of the home
    pub home_price: f64,
    /// Cash paid up front; must stay below the home price
    #[serde(default)]
    pub down_payment: f64,
    /// Annual interest rate on the percentage scale
    pub annual_rate_percent: f64,
    /// Repayment term in years
    pub term_years: f64,
}

/// Amortization summary for a mortgage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageResult {
    /// Level monthly payment on the financed amount
    pub monthly_payment: f64,
    /// Financed amount: home price less down payment
    pub principal: f64,
    /// Down payment, echoed for display
    pub down_payment: f64,
    /// Down payment as a percentage of the home price
    pub down_payment_percent: f64,
    /// Interest paid over the full term
    pub total_interest: f64,
    /// All payments plus the down payment
    pub total_cost: f64,
}

/// Compute the monthly payment and lifetime cost of a mortgage.
///
/// A $0 down payment finances the full price; a 100% down payment is
/// rejected because nothing would remain to amortize.
pub fn calculate_mortgage(request: &MortgageRequest) -> Result<MortgageResult> {
    let mut v = Validator::new();
    v.positive("home_price", request.home_price)
        .non_negative("down_payment", request.down_payment)
        .percentage("annual_rate_percent", request.annual_rate_percent)
        .positive("term_years", request.term_years);
    if request.home_price.is_finite() && request.down_payment.is_finite() {
        v.ensure(
            "down_payment",
            request.down_payment < request.home_price,
            "must be less than the home price",
        );
    }
    v.finish()?;

    let principal = request.home_price - request.down_payment;
    let monthly_rate = request.annual_rate_percent / 100.0 / 12.0;
    let payments = request.term_years * 12.0;
    let monthly_payment = amortized_payment(principal, monthly_rate, payments);
    let total_payment = monthly_payment * payments;

    Ok(MortgageResult {
        monthly_payment,
        principal,
        down_payment: request.down_payment,
        down_payment_percent: request.down_payment / request.home_price * 100.0,
        total_interest: total_payment - principal,
        total_cost: total_payment + request.down_payment,
    })
}

impl MortgageResult {
    /// Report rows in display order.
    #[must_use]
    pub fn report(&self) -> Report {
        let mut report = Report::new("Mortgage");
        report.push("Monthly Payment", format_currency(self.monthly_payment));
        report.push("Principal Amount", format_currency(self.principal));
        report.push(
            "Down Payment",
            format!(
                "{} ({:.1}%)",
                format_currency(self.down_payment),
                self.down_payment_percent
            ),
        );
        report.push("Total Interest", format_currency(self.total_interest));
        report.push("Total Cost", format_currency(self.total_cost));
        report
    }
}
