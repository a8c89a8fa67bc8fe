//! Input validation predicates and the per-request batch accumulator.
//!
//! Every calculator checks all of its fields up front through a [`Validator`]
//! and only runs arithmetic once the whole request is clean. Zero is judged
//! per field against each field's own domain, never by truthiness: a 0% rate
//! or a $0 salary passes wherever zero is mathematically meaningful.

use crate::error::{ValidationError, ValidationErrors};

/// Finite and strictly greater than zero.
#[inline]
#[must_use]
pub fn is_positive_number(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Finite and zero or greater.
#[inline]
#[must_use]
pub fn is_non_negative_number(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Finite and inside the inclusive percentage range `0..=100`.
#[inline]
#[must_use]
pub fn is_percentage_in_range(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

/// Non-finite inputs report as `NotANumber`, finite ones as `OutOfDomain`.
fn classify(field: &'static str, value: f64, message: &'static str) -> ValidationError {
    if value.is_finite() {
        ValidationError::OutOfDomain { field, message }
    } else {
        ValidationError::NotANumber { field }
    }
}

/// Collects field failures across a whole request.
///
/// Records at most one failure per field (the first check to fail wins) and
/// preserves check order, so error output follows the field order of the
/// request itself.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationError>,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, err: ValidationError) {
        match err.field() {
            Some(field) if self.errors.iter().any(|e| e.field() == Some(field)) => {}
            _ => self.errors.push(err),
        }
    }

    /// Amounts that must be present and non-zero: principals, terms, salaries.
    pub fn positive(&mut self, field: &'static str, value: f64) -> &mut Self {
        if !is_positive_number(value) {
            self.record(classify(field, value, "must be greater than zero"));
        }
        self
    }

    /// Amounts where zero is meaningful: balances, contributions, debts.
    pub fn non_negative(&mut self, field: &'static str, value: f64) -> &mut Self {
        if !is_non_negative_number(value) {
            self.record(classify(field, value, "must not be negative"));
        }
        self
    }

    /// Rates entered on the percentage scale, `6.5` meaning 6.5%.
    pub fn percentage(&mut self, field: &'static str, value: f64) -> &mut Self {
        if !is_percentage_in_range(value) {
            self.record(classify(field, value, "must be between 0 and 100"));
        }
        self
    }

    /// Relational constraint on a field that already parsed as numeric.
    pub fn ensure(&mut self, field: &'static str, ok: bool, message: &'static str) -> &mut Self {
        if !ok {
            self.record(ValidationError::OutOfDomain { field, message });
        }
        self
    }

    /// Presence check for raw input. Reports `MissingField` and yields NaN,
    /// which later domain checks on the same field swallow silently.
    pub fn require(&mut self, field: &'static str, value: Option<f64>) -> f64 {
        match value {
            Some(v) => v,
            None => {
                self.record(ValidationError::MissingField { field });
                f64::NAN
            }
        }
    }

    /// `Ok(())` when every check passed, otherwise the full batch.
    pub fn finish(self) -> crate::error::Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_predicate() {
        assert!(is_positive_number(0.01));
        assert!(is_positive_number(1e12));
        assert!(!is_positive_number(0.0));
        assert!(!is_positive_number(-5.0));
        assert!(!is_positive_number(f64::NAN));
        assert!(!is_positive_number(f64::INFINITY));
    }

    #[test]
    fn test_non_negative_predicate() {
        assert!(is_non_negative_number(0.0));
        assert!(is_non_negative_number(-0.0));
        assert!(is_non_negative_number(250.0));
        assert!(!is_non_negative_number(-0.01));
        assert!(!is_non_negative_number(f64::NEG_INFINITY));
        assert!(!is_non_negative_number(f64::NAN));
    }

    #[test]
    fn test_percentage_predicate() {
        assert!(is_percentage_in_range(0.0));
        assert!(is_percentage_in_range(100.0));
        assert!(is_percentage_in_range(6.5));
        assert!(!is_percentage_in_range(-0.1));
        assert!(!is_percentage_in_range(100.1));
        assert!(!is_percentage_in_range(f64::NAN));
    }

    #[test]
    fn test_validator_collects_in_check_order() {
        let mut v = Validator::new();
        v.positive("principal", -100.0)
            .percentage("rate", 250.0)
            .positive("term", 5.0);
        let errors = v.finish().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.0[0].field(), Some("principal"));
        assert_eq!(errors.0[1].field(), Some("rate"));
    }

    #[test]
    fn test_validator_keeps_first_failure_per_field() {
        let mut v = Validator::new();
        v.positive("rate", -1.0).percentage("rate", -1.0);
        let errors = v.finish().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.0[0],
            ValidationError::OutOfDomain {
                field: "rate",
                message: "must be greater than zero"
            }
        );
    }

    #[test]
    fn test_validator_classifies_nan_separately() {
        let mut v = Validator::new();
        v.positive("amount", f64::NAN);
        let errors = v.finish().unwrap_err();

        assert_eq!(errors.0[0], ValidationError::NotANumber { field: "amount" });
    }

    #[test]
    fn test_require_reports_missing_and_poisons_later_checks() {
        let mut v = Validator::new();
        let value = v.require("salary", None);
        v.positive("salary", value);
        let errors = v.finish().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.0[0], ValidationError::MissingField { field: "salary" });
    }

    #[test]
    fn test_clean_request_passes() {
        let mut v = Validator::new();
        v.positive("principal", 20_000.0)
            .percentage("rate", 0.0)
            .non_negative("balance", 0.0);
        assert!(v.finish().is_ok());
    }
}
