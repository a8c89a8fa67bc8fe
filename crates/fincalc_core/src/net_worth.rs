//! Net worth from categorized assets and liabilities

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::format_currency;
use crate::report::Report;
use crate::validate::Validator;

/// Asset and liability categories. Every field defaults to zero, so a caller
/// only fills in the categories that apply.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetWorthRequest {
    pub cash: f64,
    pub investments: f64,
    pub real_estate: f64,
    pub other_assets: f64,
    pub mortgage_debt: f64,
    pub credit_card_debt: f64,
    pub other_loans: f64,
    pub other_debts: f64,
}

/// Net worth statement with every category echoed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetWorthResult {
    pub total_assets: f64,
    pub total_liabilities: f64,
    /// Assets minus liabilities; negative when debts dominate
    pub net_worth: f64,
    pub cash: f64,
    pub investments: f64,
    pub real_estate: f64,
    pub other_assets: f64,
    pub mortgage_debt: f64,
    pub credit_card_debt: f64,
    pub other_loans: f64,
    pub other_debts: f64,
}

/// Sum assets and liabilities into a net worth statement.
///
/// Categories are amounts owned or owed, so each must be non-negative; the
/// net worth itself may still be negative.
pub fn calculate_net_worth(request: &NetWorthRequest) -> Result<NetWorthResult> {
    let mut v = Validator::new();
    v.non_negative("cash", request.cash)
        .non_negative("investments", request.investments)
        .non_negative("real_estate", request.real_estate)
        .non_negative("other_assets", request.other_assets)
        .non_negative("mortgage_debt", request.mortgage_debt)
        .non_negative("credit_card_debt", request.credit_card_debt)
        .non_negative("other_loans", request.other_loans)
        .non_negative("other_debts", request.other_debts);
    v.finish()?;

    let total_assets =
        request.cash + request.investments + request.real_estate + request.other_assets;
    let total_liabilities = request.mortgage_debt
        + request.credit_card_debt
        + request.other_loans
        + request.other_debts;

    Ok(NetWorthResult {
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
        cash: request.cash,
        investments: request.investments,
        real_estate: request.real_estate,
        other_assets: request.other_assets,
        mortgage_debt: request.mortgage_debt,
        credit_card_debt: request.credit_card_debt,
        other_loans: request.other_loans,
        other_debts: request.other_debts,
    })
}

impl NetWorthResult {
    /// Report rows in display order. Loans and miscellaneous debts display
    /// as a single `Other Debts` row even though the record keeps them apart.
    #[must_use]
    pub fn report(&self) -> Report {
        let mut report = Report::new("Net Worth");
        report.push("Total Assets", format_currency(self.total_assets));
        report.push("Cash & Savings", format_currency(self.cash));
        report.push("Investments", format_currency(self.investments));
        report.push("Real Estate", format_currency(self.real_estate));
        report.push("Other Assets", format_currency(self.other_assets));
        report.push(
            "Total Liabilities",
            format_currency(self.total_liabilities),
        );
        report.push("Mortgage Debt", format_currency(self.mortgage_debt));
        report.push("Credit Card Debt", format_currency(self.credit_card_debt));
        report.push(
            "Other Debts",
            format_currency(self.other_loans + self.other_debts),
        );
        report.push("Net Worth", format_currency(self.net_worth));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_household_statement() {
        let result = calculate_net_worth(&NetWorthRequest {
            cash: 15_000.0,
            investments: 85_000.0,
            real_estate: 320_000.0,
            other_assets: 10_000.0,
            mortgage_debt: 240_000.0,
            credit_card_debt: 4_500.0,
            other_loans: 12_000.0,
            other_debts: 1_500.0,
        })
        .unwrap();

        assert_eq!(result.total_assets, 430_000.0);
        assert_eq!(result.total_liabilities, 258_000.0);
        assert_eq!(result.net_worth, 172_000.0);
    }

    #[test]
    fn test_empty_statement_is_zero() {
        let result = calculate_net_worth(&NetWorthRequest::default()).unwrap();

        assert_eq!(result.total_assets, 0.0);
        assert_eq!(result.total_liabilities, 0.0);
        assert_eq!(result.net_worth, 0.0);
    }

    #[test]
    fn test_net_worth_may_be_negative() {
        let result = calculate_net_worth(&NetWorthRequest {
            cash: 2_000.0,
            credit_card_debt: 9_000.0,
            ..NetWorthRequest::default()
        })
        .unwrap();

        assert_eq!(result.net_worth, -7_000.0);
    }

    #[test]
    fn test_rejects_negative_categories() {
        // Debts are amounts owed, entered as positive numbers
        let errors = calculate_net_worth(&NetWorthRequest {
            cash: -100.0,
            credit_card_debt: -50.0,
            ..NetWorthRequest::default()
        })
        .unwrap_err();

        let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec![Some("cash"), Some("credit_card_debt")]);
    }

    #[test]
    fn test_report_merges_loans_into_other_debts() {
        let result = calculate_net_worth(&NetWorthRequest {
            other_loans: 12_000.0,
            other_debts: 1_500.0,
            ..NetWorthRequest::default()
        })
        .unwrap();

        let report = result.report();
        let other_debts = report
            .rows
            .iter()
            .find(|row| row.label == "Other Debts")
            .unwrap();
        assert_eq!(other_debts.value, "$13,500.00");
    }
}
