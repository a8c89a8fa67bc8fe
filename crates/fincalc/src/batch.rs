//! Batch execution of calculator entries from a JSON file
//!
//! Input is a JSON array of objects tagged with a `calculator` name; the
//! remaining keys are the request fields of that calculator. Fields are
//! pulled from the raw JSON so that absent keys report `MissingField` and
//! non-numeric values report `NotANumber`, batched per entry exactly like
//! the domain checks. Entries succeed or fail independently.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{WrapErr, bail};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use fincalc_core::{
    CompoundInterestRequest, InflationRequest, LoanRequest, MortgageRequest, NetWorthRequest,
    Report, Result as CoreResult, ResultSink, RetirementRequest, TakeHomeRequest, ValidationError,
    ValidationErrors, calculate_compound_interest, calculate_inflation, calculate_loan,
    calculate_mortgage, calculate_net_worth, calculate_retirement, calculate_take_home,
};

use crate::sink::TerminalSink;

pub fn run(path: &Path, json: bool) -> color_eyre::Result<()> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot read batch file {}", path.display()))?;
    let entries: Vec<Value> = serde_json::from_str(&text)
        .wrap_err("batch file must be a JSON array of calculator entries")?;

    debug!("loaded {} batch entries from {}", entries.len(), path.display());

    let mut sink = TerminalSink::new();
    let mut outputs = Vec::new();
    let mut failures = 0usize;

    for (index, entry) in entries.iter().enumerate() {
        match run_entry(entry) {
            Ok(outcome) => {
                if json {
                    outputs.push(serde_json::json!({
                        "calculator": outcome.calculator,
                        "result": outcome.result,
                    }));
                } else {
                    sink.present(&outcome.report);
                }
            }
            Err(errors) => {
                failures += 1;
                warn!("batch entry {index} failed: {errors}");
                eprintln!("entry {index}: {errors}");
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
    }
    if failures > 0 {
        bail!("{failures} of {} batch entries failed", entries.len());
    }
    Ok(())
}

/// A finished entry: its tag, the serialized result, and the rendered rows.
#[derive(Debug)]
struct EntryOutcome {
    calculator: &'static str,
    result: Value,
    report: Report,
}

fn outcome<T: Serialize>(calculator: &'static str, result: &T, report: Report) -> EntryOutcome {
    EntryOutcome {
        calculator,
        result: serde_json::to_value(result).unwrap_or(Value::Null),
        report,
    }
}

fn run_entry(entry: &Value) -> CoreResult<EntryOutcome> {
    let Some(fields) = entry.as_object() else {
        return Err(ValidationError::OutOfDomain {
            field: "entry",
            message: "must be a JSON object",
        }
        .into());
    };
    let Some(calculator) = fields.get("calculator").and_then(Value::as_str) else {
        return Err(ValidationError::MissingField { field: "calculator" }.into());
    };

    match calculator {
        "loan" => {
            let mut r = FieldReader::new(fields);
            let request = LoanRequest {
                principal: r.num("principal"),
                annual_rate_percent: r.num("annual_rate_percent"),
                term_years: r.num("term_years"),
            };
            r.finish()?;
            let result = calculate_loan(&request)?;
            Ok(outcome("loan", &result, result.report()))
        }
        "mortgage" => {
            let mut r = FieldReader::new(fields);
            let request = MortgageRequest {
                home_price: r.num("home_price"),
                down_payment: r.num_or_zero("down_payment"),
                annual_rate_percent: r.num("annual_rate_percent"),
                term_years: r.num("term_years"),
            };
            r.finish()?;
            let result = calculate_mortgage(&request)?;
            Ok(outcome("mortgage", &result, result.report()))
        }
        "take_home" => {
            let mut r = FieldReader::new(fields);
            let request = TakeHomeRequest {
                gross_salary: r.num("gross_salary"),
                federal_rate_percent: r.num("federal_rate_percent"),
                state_rate_percent: r.num("state_rate_percent"),
            };
            r.finish()?;
            let result = calculate_take_home(&request)?;
            Ok(outcome("take_home", &result, result.report()))
        }
        "compound" => {
            let mut r = FieldReader::new(fields);
            let request = CompoundInterestRequest {
                principal: r.num("principal"),
                annual_rate_percent: r.num("annual_rate_percent"),
                periods_per_year: r.integer("periods_per_year"),
                years: r.num("years"),
                monthly_contribution: r.num_or_zero("monthly_contribution"),
            };
            r.finish()?;
            let result = calculate_compound_interest(&request)?;
            Ok(outcome("compound", &result, result.report()))
        }
        "retirement" => {
            let mut r = FieldReader::new(fields);
            let request = RetirementRequest {
                current_age: r.integer("current_age"),
                retirement_age: r.integer("retirement_age"),
                current_balance: r.num_or_zero("current_balance"),
                monthly_contribution: r.num("monthly_contribution"),
                employer_match_percent: r.num("employer_match_percent"),
                expected_return_percent: r.num("expected_return_percent"),
            };
            r.finish()?;
            let result = calculate_retirement(&request)?;
            Ok(outcome("retirement", &result, result.report()))
        }
        "inflation" => {
            let mut r = FieldReader::new(fields);
            let request = InflationRequest {
                current_value: r.num("current_value"),
                inflation_rate_percent: r.num("inflation_rate_percent"),
                years: r.num("years"),
            };
            r.finish()?;
            let result = calculate_inflation(&request)?;
            Ok(outcome("inflation", &result, result.report()))
        }
        "net_worth" => {
            let mut r = FieldReader::new(fields);
            let request = NetWorthRequest {
                cash: r.num_or_zero("cash"),
                investments: r.num_or_zero("investments"),
                real_estate: r.num_or_zero("real_estate"),
                other_assets: r.num_or_zero("other_assets"),
                mortgage_debt: r.num_or_zero("mortgage_debt"),
                credit_card_debt: r.num_or_zero("credit_card_debt"),
                other_loans: r.num_or_zero("other_loans"),
                other_debts: r.num_or_zero("other_debts"),
            };
            r.finish()?;
            let result = calculate_net_worth(&request)?;
            Ok(outcome("net_worth", &result, result.report()))
        }
        _ => Err(ValidationError::OutOfDomain {
            field: "calculator",
            message: "is not a recognized calculator",
        }
        .into()),
    }
}

/// Pulls typed fields out of one raw entry, collecting extraction failures
/// the same way the calculators collect domain failures.
struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    errors: Vec<ValidationError>,
}

impl<'a> FieldReader<'a> {
    fn new(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields,
            errors: Vec::new(),
        }
    }

    /// Required numeric field. Failures yield NaN, which never reaches a
    /// calculator because `finish` errors out first.
    fn num(&mut self, key: &'static str) -> f64 {
        match self.fields.get(key) {
            None | Some(Value::Null) => {
                self.errors.push(ValidationError::MissingField { field: key });
                f64::NAN
            }
            Some(value) => match value.as_f64() {
                Some(number) => number,
                None => {
                    self.errors.push(ValidationError::NotANumber { field: key });
                    f64::NAN
                }
            },
        }
    }

    /// Optional numeric field, zero when absent or null.
    fn num_or_zero(&mut self, key: &'static str) -> f64 {
        match self.fields.get(key) {
            None | Some(Value::Null) => 0.0,
            Some(value) => match value.as_f64() {
                Some(number) => number,
                None => {
                    self.errors.push(ValidationError::NotANumber { field: key });
                    f64::NAN
                }
            },
        }
    }

    /// Required unsigned integer field (ages, period counts).
    fn integer(&mut self, key: &'static str) -> u32 {
        match self.fields.get(key) {
            None | Some(Value::Null) => {
                self.errors.push(ValidationError::MissingField { field: key });
                0
            }
            Some(value) => match value.as_u64().map(u32::try_from) {
                Some(Ok(number)) => number,
                _ => {
                    self.errors.push(match value.as_f64() {
                        Some(_) => ValidationError::OutOfDomain {
                            field: key,
                            message: "must be a non-negative whole number",
                        },
                        None => ValidationError::NotANumber { field: key },
                    });
                    0
                }
            },
        }
    }

    fn finish(self) -> CoreResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}
