//! Closed-form time-value-of-money formulas shared by the calculators
//!
//! Rates arrive here as periodic fractions (an annual 6% paid monthly is
//! `0.06 / 12`), never on the percentage scale. The zero-rate degeneracies
//! are branched explicitly rather than letting the general formulas divide
//! by zero.

use crate::error::{Result, ValidationError};

/// Payment per period that fully amortizes `principal` over `periods`
/// payments at `periodic_rate`.
///
/// At a zero rate the loan degenerates to straight-line repayment,
/// `principal / periods`.
#[inline]
#[must_use]
pub fn amortized_payment(principal: f64, periodic_rate: f64, periods: f64) -> f64 {
    if periodic_rate == 0.0 {
        return principal / periods;
    }
    let growth = (1.0 + periodic_rate).powf(periods);
    principal * (periodic_rate * growth) / (growth - 1.0)
}

/// Future value of an ordinary annuity: a level `contribution` at the end of
/// each of `periods` periods, compounding at `periodic_rate`.
///
/// At a zero rate this is the plain sum `contribution * periods`.
#[inline]
#[must_use]
pub fn annuity_future_value(contribution: f64, periodic_rate: f64, periods: f64) -> f64 {
    if periodic_rate == 0.0 {
        return contribution * periods;
    }
    contribution * (((1.0 + periodic_rate).powf(periods) - 1.0) / periodic_rate)
}

/// Lump-sum growth of `principal` over `periods` periods at `periodic_rate`.
#[inline]
#[must_use]
pub fn compound_growth(principal: f64, periodic_rate: f64, periods: f64) -> f64 {
    principal * (1.0 + periodic_rate).powf(periods)
}

/// Annualized rate implied by growing `total_contributions` into
/// `future_value` over `years`.
///
/// Returned as a fraction (`0.0512` for 5.12%). Refuses non-positive
/// contributions, where the root is mathematically undefined.
pub fn effective_annual_rate(future_value: f64, total_contributions: f64, years: f64) -> Result<f64> {
    if total_contributions <= 0.0 {
        return Err(ValidationError::DegenerateComputation {
            message: "effective annual rate is undefined without positive contributions",
        }
        .into());
    }
    Ok((future_value / total_contributions).powf(1.0 / years) - 1.0)
}
