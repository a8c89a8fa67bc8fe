//! Command-line interface definitions
//!
//! One subcommand per calculator, one flag per request field. Conversions
//! into the core request records live next to the argument structs so the
//! dispatch code stays free of field mapping.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fincalc_core::{
    CompoundInterestRequest, InflationRequest, LoanRequest, MortgageRequest, NetWorthRequest,
    RetirementRequest, TakeHomeRequest,
};

#[derive(Parser, Debug)]
#[command(name = "fincalc")]
#[command(about = "Closed-form financial calculators for the command line")]
#[command(version)]
pub struct Cli {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    /// Print the result as pretty JSON instead of a formatted report
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Monthly payment and lifetime cost of a fixed-rate loan
    Loan(LoanArgs),
    /// Mortgage payment with a down payment breakdown
    Mortgage(MortgageArgs),
    /// Annual take-home pay after flat-rate deductions
    TakeHome(TakeHomeArgs),
    /// Compound growth of a principal with monthly contributions
    Compound(CompoundArgs),
    /// 401(k) balance projection to retirement age
    Retirement(RetirementArgs),
    /// Future cost of today's money under inflation
    Inflation(InflationArgs),
    /// Net worth from categorized assets and liabilities
    NetWorth(NetWorthArgs),
    /// Run every entry in a JSON batch file
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
pub struct LoanArgs {
    /// Amount borrowed
    #[arg(long)]
    pub amount: f64,

    /// Annual interest rate as a percentage
    #[arg(long)]
    pub rate: f64,

    /// Repayment term in years
    #[arg(long)]
    pub term: f64,
}

impl From<LoanArgs> for LoanRequest {
    fn from(args: LoanArgs) -> Self {
        Self {
            principal: args.amount,
            annual_rate_percent: args.rate,
            term_years: args.term,
        }
    }
}

#[derive(Args, Debug)]
pub struct MortgageArgs {
    /// Purchase price of the home
    #[arg(long)]
    pub home_price: f64,

    /// Cash paid up front
    #[arg(long, default_value_t = 0.0)]
    pub down_payment: f64,

    /// Annual interest rate as a percentage
    #[arg(long)]
    pub rate: f64,

    /// Repayment term in years
    #[arg(long)]
    pub term: f64,
}

impl From<MortgageArgs> for MortgageRequest {
    fn from(args: MortgageArgs) -> Self {
        Self {
            home_price: args.home_price,
            down_payment: args.down_payment,
            annual_rate_percent: args.rate,
            term_years: args.term,
        }
    }
}

#[derive(Args, Debug)]
pub struct TakeHomeArgs {
    /// Gross annual salary
    #[arg(long)]
    pub gross_salary: f64,

    /// Effective federal income tax rate as a percentage
    #[arg(long)]
    pub federal_rate: f64,

    /// Effective state income tax rate as a percentage
    #[arg(long)]
    pub state_rate: f64,
}

impl From<TakeHomeArgs> for TakeHomeRequest {
    fn from(args: TakeHomeArgs) -> Self {
        Self {
            gross_salary: args.gross_salary,
            federal_rate_percent: args.federal_rate,
            state_rate_percent: args.state_rate,
        }
    }
}

#[derive(Args, Debug)]
pub struct CompoundArgs {
    /// Starting lump sum
    #[arg(long)]
    pub principal: f64,

    /// Annual interest rate as a percentage
    #[arg(long)]
    pub rate: f64,

    /// Compounding periods per year (1, 2, 4, 12, 365)
    #[arg(long, default_value_t = 12)]
    pub frequency: u32,

    /// Investment horizon in years
    #[arg(long)]
    pub years: f64,

    /// Monthly deposit on top of the principal
    #[arg(long, default_value_t = 0.0)]
    pub contribution: f64,
}

impl From<CompoundArgs> for CompoundInterestRequest {
    fn from(args: CompoundArgs) -> Self {
        Self {
            principal: args.principal,
            annual_rate_percent: args.rate,
            periods_per_year: args.frequency,
            years: args.years,
            monthly_contribution: args.contribution,
        }
    }
}

#[derive(Args, Debug)]
pub struct RetirementArgs {
    /// Current age in whole years
    #[arg(long)]
    pub current_age: u32,

    /// Target retirement age
    #[arg(long)]
    pub retirement_age: u32,

    /// Existing 401(k) balance
    #[arg(long, default_value_t = 0.0)]
    pub balance: f64,

    /// Employee deferral per month
    #[arg(long)]
    pub contribution: f64,

    /// Employer match as a percentage of the deferral
    #[arg(long)]
    pub employer_match: f64,

    /// Expected annual return as a percentage
    #[arg(long)]
    pub expected_return: f64,
}

impl From<RetirementArgs> for RetirementRequest {
    fn from(args: RetirementArgs) -> Self {
        Self {
            current_age: args.current_age,
            retirement_age: args.retirement_age,
            current_balance: args.balance,
            monthly_contribution: args.contribution,
            employer_match_percent: args.employer_match,
            expected_return_percent: args.expected_return,
        }
    }
}

#[derive(Args, Debug)]
pub struct InflationArgs {
    /// Amount in today's dollars
    #[arg(long)]
    pub value: f64,

    /// Annual inflation rate as a percentage
    #[arg(long)]
    pub rate: f64,

    /// Years into the future
    #[arg(long)]
    pub years: f64,
}

impl From<InflationArgs> for InflationRequest {
    fn from(args: InflationArgs) -> Self {
        Self {
            current_value: args.value,
            inflation_rate_percent: args.rate,
            years: args.years,
        }
    }
}

#[derive(Args, Debug)]
pub struct NetWorthArgs {
    /// Cash and savings accounts
    #[arg(long, default_value_t = 0.0)]
    pub cash: f64,

    /// Brokerage and retirement investments
    #[arg(long, default_value_t = 0.0)]
    pub investments: f64,

    /// Real estate at market value
    #[arg(long, default_value_t = 0.0)]
    pub real_estate: f64,

    /// Vehicles, collectibles, and everything else owned
    #[arg(long, default_value_t = 0.0)]
    pub other_assets: f64,

    /// Outstanding mortgage balance
    #[arg(long, default_value_t = 0.0)]
    pub mortgage_debt: f64,

    /// Credit card balances
    #[arg(long, default_value_t = 0.0)]
    pub credit_card_debt: f64,

    /// Student, auto, and personal loans
    #[arg(long, default_value_t = 0.0)]
    pub other_loans: f64,

    /// Everything else owed
    #[arg(long, default_value_t = 0.0)]
    pub other_debts: f64,
}

impl From<NetWorthArgs> for NetWorthRequest {
    fn from(args: NetWorthArgs) -> Self {
        Self {
            cash: args.cash,
            investments: args.investments,
            real_estate: args.real_estate,
            other_assets: args.other_assets,
            mortgage_debt: args.mortgage_debt,
            credit_card_debt: args.credit_card_debt,
            other_loans: args.other_loans,
            other_debts: args.other_debts,
        }
    }
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Path to a JSON array of calculator entries
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_loan_args_map_to_request() {
        let cli = Cli::parse_from([
            "fincalc", "loan", "--amount", "20000", "--rate", "6", "--term", "5",
        ]);

        match cli.command {
            Command::Loan(args) => {
                let request = LoanRequest::from(args);
                assert_eq!(request.principal, 20_000.0);
                assert_eq!(request.annual_rate_percent, 6.0);
                assert_eq!(request.term_years, 5.0);
            }
            other => panic!("parsed wrong command: {other:?}"),
        }
    }

    #[test]
    fn test_optional_flags_default_to_zero() {
        let cli = Cli::parse_from([
            "fincalc",
            "mortgage",
            "--home-price",
            "250000",
            "--rate",
            "6",
            "--term",
            "30",
        ]);

        match cli.command {
            Command::Mortgage(args) => assert_eq!(args.down_payment, 0.0),
            other => panic!("parsed wrong command: {other:?}"),
        }
    }

    #[test]
    fn test_compound_frequency_defaults_to_monthly() {
        let cli = Cli::parse_from([
            "fincalc",
            "compound",
            "--principal",
            "10000",
            "--rate",
            "5",
            "--years",
            "10",
        ]);

        match cli.command {
            Command::Compound(args) => assert_eq!(args.frequency, 12),
            other => panic!("parsed wrong command: {other:?}"),
        }
    }

    #[test]
    fn test_json_flag_is_global() {
        let cli = Cli::parse_from([
            "fincalc", "loan", "--amount", "1000", "--rate", "5", "--term", "1", "--json",
        ]);
        assert!(cli.json);
    }
}
