//! Closed-form personal finance calculators
//!
//! This crate provides pure, synchronous calculators for everyday money
//! questions. It supports:
//! - Personal loan and mortgage amortization
//! - Take-home pay after flat-rate payroll deductions
//! - Compound interest with monthly contributions
//! - 401(k) projection with an employer match
//! - Inflation adjustment and purchasing power loss
//! - Net worth from categorized assets and liabilities
//!
//! Every calculator takes a typed request, validates the whole thing up front
//! (collecting every failing field, not just the first), and returns a typed
//! result that can describe itself as labeled report rows.
//!
//! ```ignore
//! use fincalc_core::{LoanRequest, calculate_loan};
//!
//! let result = calculate_loan(&LoanRequest {
//!     principal: 20_000.0,
//!     annual_rate_percent: 6.0,
//!     term_years: 5.0,
//! })?;
//! assert!((result.monthly_payment - 386.66).abs() < 0.01);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Shared infrastructure
// ============================================================================

pub mod error;
pub mod format;
pub mod report;
pub mod tvm;
pub mod validate;

// ============================================================================
// Calculator modules
// ============================================================================

pub mod compound;
pub mod inflation;
pub mod loan;
pub mod mortgage;
pub mod net_worth;
pub mod retirement;
pub mod take_home;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use compound::{CompoundInterestRequest, CompoundInterestResult, calculate_compound_interest};
pub use error::{Result, ValidationError, ValidationErrors};
pub use inflation::{InflationRequest, InflationResult, calculate_inflation};
pub use loan::{LoanRequest, LoanResult, calculate_loan};
pub use mortgage::{MortgageRequest, MortgageResult, calculate_mortgage};
pub use net_worth::{NetWorthRequest, NetWorthResult, calculate_net_worth};
pub use report::{Report, ResultRow, ResultSink};
pub use retirement::{RetirementRequest, RetirementResult, calculate_retirement};
pub use take_home::{TakeHomeRequest, TakeHomeResult, calculate_take_home};
