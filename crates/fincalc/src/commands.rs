//! Subcommand dispatch: build the request, run the calculator, render

use serde::Serialize;
use tracing::{debug, warn};

use fincalc_core::{
    CompoundInterestRequest, InflationRequest, LoanRequest, MortgageRequest, NetWorthRequest,
    Report, ResultSink, RetirementRequest, TakeHomeRequest, calculate_compound_interest,
    calculate_inflation, calculate_loan, calculate_mortgage, calculate_net_worth,
    calculate_retirement, calculate_take_home,
};

use crate::batch;
use crate::cli::{Cli, Command};
use crate::sink::TerminalSink;

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let json = cli.json;
    match cli.command {
        Command::Loan(args) => {
            let request = LoanRequest::from(args);
            debug!(?request, "running loan calculator");
            let result = check(calculate_loan(&request))?;
            emit(&result, result.report(), json)
        }
        Command::Mortgage(args) => {
            let request = MortgageRequest::from(args);
            debug!(?request, "running mortgage calculator");
            let result = check(calculate_mortgage(&request))?;
            emit(&result, result.report(), json)
        }
        Command::TakeHome(args) => {
            let request = TakeHomeRequest::from(args);
            debug!(?request, "running take-home calculator");
            let result = check(calculate_take_home(&request))?;
            emit(&result, result.report(), json)
        }
        Command::Compound(args) => {
            let request = CompoundInterestRequest::from(args);
            debug!(?request, "running compound interest calculator");
            let result = check(calculate_compound_interest(&request))?;
            emit(&result, result.report(), json)
        }
        Command::Retirement(args) => {
            let request = RetirementRequest::from(args);
            debug!(?request, "running retirement calculator");
            let result = check(calculate_retirement(&request))?;
            emit(&result, result.report(), json)
        }
        Command::Inflation(args) => {
            let request = InflationRequest::from(args);
            debug!(?request, "running inflation calculator");
            let result = check(calculate_inflation(&request))?;
            emit(&result, result.report(), json)
        }
        Command::NetWorth(args) => {
            let request = NetWorthRequest::from(args);
            debug!(?request, "running net worth calculator");
            let result = check(calculate_net_worth(&request))?;
            emit(&result, result.report(), json)
        }
        Command::Batch(args) => batch::run(&args.file, json),
    }
}

/// Surface a validation batch in the logs before handing it to the
/// process-level error report.
fn check<T>(result: fincalc_core::Result<T>) -> color_eyre::Result<T> {
    result.map_err(|errors| {
        warn!("{errors}");
        color_eyre::Report::new(errors)
    })
}

fn emit<T: Serialize>(result: &T, report: Report, json: bool) -> color_eyre::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        TerminalSink::new().present(&report);
    }
    Ok(())
}
