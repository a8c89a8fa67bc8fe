//! Display formatting for report values
//!
//! en-US conventions throughout: `$` prefix, comma thousands grouping, two
//! decimal places. Rounding is half-away-from-zero and happens once per
//! value, on the total cent count, so `$19.999` renders as `$20.00`.

/// Add thousands separators to a non-negative whole number.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

/// Format a currency value: `$1,234.56`, negatives as `-$1,234.56`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let total_cents = (value.abs() * 100.0).round() as i64;
    let dollars = total_cents / 100;
    let cents = total_cents % 100;

    // Values that round to zero lose their sign
    let sign = if value < 0.0 && total_cents != 0 { "-" } else { "" };
    format!("{sign}${}.{cents:02}", group_thousands(dollars))
}

/// Format a plain number with grouping and two decimals, no symbol.
#[must_use]
pub fn format_number(value: f64) -> String {
    let total_hundredths = (value.abs() * 100.0).round() as i64;
    let whole = total_hundredths / 100;
    let fraction = total_hundredths % 100;

    let sign = if value < 0.0 && total_hundredths != 0 { "-" } else { "" };
    format!("{sign}{}.{fraction:02}", group_thousands(whole))
}

/// Format a rate fraction as a percentage: `0.05116` renders as `5.12%`.
#[must_use]
pub fn format_percentage(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Format a year span, trimming a zero fraction: `30 years`, `2.5 years`.
#[must_use]
pub fn format_years(years: f64) -> String {
    if years.fract() == 0.0 {
        format!("{} years", years as i64)
    } else {
        format!("{years} years")
    }
}
