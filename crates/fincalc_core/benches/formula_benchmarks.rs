//! Criterion benchmarks for fincalc_core
//!
//! Run with: cargo bench -p fincalc_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fincalc_core::compound::{CompoundInterestRequest, calculate_compound_interest};
use fincalc_core::format::format_currency;
use fincalc_core::loan::{LoanRequest, calculate_loan};
use fincalc_core::retirement::{RetirementRequest, calculate_retirement};
use fincalc_core::tvm::amortized_payment;

fn create_loan_request(term_years: f64) -> LoanRequest {
    LoanRequest {
        principal: 250_000.0,
        annual_rate_percent: 6.5,
        term_years,
    }
}

fn bench_amortized_payment(c: &mut Criterion) {
    c.bench_function("amortized_payment", |b| {
        b.iter(|| {
            amortized_payment(
                black_box(250_000.0),
                black_box(0.065 / 12.0),
                black_box(360.0),
            )
        })
    });
}

fn bench_loan_terms(c: &mut Criterion) {
    let mut group = c.benchmark_group("loan");

    for term_years in [5.0, 15.0, 30.0].iter() {
        let request = create_loan_request(*term_years);

        group.bench_with_input(
            BenchmarkId::new("term_years", term_years),
            term_years,
            |b, _| b.iter(|| calculate_loan(black_box(&request))),
        );
    }

    group.finish();
}

fn bench_compound_with_contributions(c: &mut Criterion) {
    let request = CompoundInterestRequest {
        principal: 10_000.0,
        annual_rate_percent: 5.0,
        periods_per_year: 12,
        years: 30.0,
        monthly_contribution: 500.0,
    };

    c.bench_function("compound_30yr_contributions", |b| {
        b.iter(|| calculate_compound_interest(black_box(&request)))
    });
}

fn bench_retirement_projection(c: &mut Criterion) {
    let request = RetirementRequest {
        current_age: 30,
        retirement_age: 65,
        current_balance: 50_000.0,
        monthly_contribution: 500.0,
        employer_match_percent: 50.0,
        expected_return_percent: 7.0,
    };

    c.bench_function("retirement_35yr_projection", |b| {
        b.iter(|| calculate_retirement(black_box(&request)))
    });
}

fn bench_currency_formatting(c: &mut Criterion) {
    c.bench_function("format_currency", |b| {
        b.iter(|| format_currency(black_box(1_234_567.891)))
    });
}

criterion_group!(
    benches,
    bench_amortized_payment,
    bench_loan_terms,
    bench_compound_with_contributions,
    bench_retirement_projection,
    bench_currency_formatting
);
criterion_main!(benches);
