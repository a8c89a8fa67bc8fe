//! Future cost of today's money under steady inflation

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{format_currency, format_percentage, format_years};
use crate::report::Report;
use crate::tvm::compound_growth;
use crate::validate::Validator;

/// Inputs for an inflation adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationRequest {
    /// Amount in today's dollars
    pub current_value: f64,
    /// Annual inflation rate on the percentage scale; must be strictly positive
    pub inflation_rate_percent: f64,
    /// Years into the future
    pub years: f64,
}

/// Inflation summary over the requested horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationResult {
    pub current_value: f64,
    pub inflation_rate_percent: f64,
    pub years: f64,
    /// Cost of the same purchase at the end of the horizon
    pub future_value: f64,
    pub total_inflation: f64,
    /// Share of future purchasing power lost, on the percentage scale
    pub purchasing_power_loss_percent: f64,
}

/// Compute what today's amount will cost after years of inflation.
pub fn calculate_inflation(request: &InflationRequest) -> Result<InflationResult> {
    let mut v = Validator::new();
    v.positive("current_value", request.current_value)
        .percentage("inflation_rate_percent", request.inflation_rate_percent)
        .ensure(
            "inflation_rate_percent",
            request.inflation_rate_percent != 0.0,
            "must be greater than zero",
        )
        .positive("years", request.years);
    v.finish()?;

    let rate = request.inflation_rate_percent / 100.0;
    let future_value = compound_growth(request.current_value, rate, request.years);
    let total_inflation = future_value - request.current_value;

    Ok(InflationResult {
        current_value: request.current_value,
        inflation_rate_percent: request.inflation_rate_percent,
        years: request.years,
        future_value,
        total_inflation,
        purchasing_power_loss_percent: total_inflation / future_value * 100.0,
    })
}

impl InflationResult {
    /// Report rows in display order.
    #[must_use]
    pub fn report(&self) -> Report {
        let mut report = Report::new("Inflation");
        report.push("Current Value", format_currency(self.current_value));
        report.push(
            "Inflation Rate",
            format_percentage(self.inflation_rate_percent / 100.0),
        );
        report.push("Time Period", format_years(self.years));
        report.push("Future Value", format_currency(self.future_value));
        report.push("Total Inflation", format_currency(self.total_inflation));
        report.push(
            "Purchasing Power Loss",
            format!("{:.1}%", self.purchasing_power_loss_percent),
        );
        report
    }
}
