// ============================================================================
// Formatting Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Scalar - one value through each rounding branch
// 2. Sequence - column-sized inputs, currency vs percent
// 3. Table - multi-column input with mixed cells
// ============================================================================

use clearutils::format::{
    format_currency, format_percent, Cell, CurrencyDefaults, CurrencyFormatter, Data, Table,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

// ============================================================================
// Scalar Benchmarks
// ============================================================================

fn benchmark_scalar_currency(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_currency");
    let formatter = CurrencyFormatter::new(CurrencyDefaults::default());

    for digits in [-3, 0, 2, 6].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(digits), digits, |b, &digits| {
            b.iter(|| black_box(formatter.format(black_box(98765.4321), digits, None)));
        });
    }

    group.bench_function("global_defaults", |b| {
        b.iter(|| black_box(format_currency(black_box(-9876.543), 0, Some("EUR"))));
    });

    group.finish();
}

// ============================================================================
// Sequence Benchmarks
// ============================================================================

fn benchmark_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");

    for len in [10, 1000, 100_000].iter() {
        let values: Vec<f64> = (0..*len).map(|i| i as f64 * 1234.567 - 50_000.0).collect();
        let data = Data::from(values);

        group.bench_with_input(BenchmarkId::new("currency", len), &data, |b, data| {
            b.iter(|| black_box(format_currency(data.clone(), 2, None)));
        });
        group.bench_with_input(BenchmarkId::new("percent", len), &data, |b, data| {
            b.iter(|| black_box(format_percent(data.clone(), 1)));
        });
    }

    group.finish();
}

// ============================================================================
// Table Benchmarks
// ============================================================================

fn benchmark_table(c: &mut Criterion) {
    let rows = 1000;
    let table = Table::from_columns([
        (
            "revenue",
            (0..rows).map(|i| Cell::Number(i as f64 * 10.5)).collect::<Vec<_>>(),
        ),
        (
            "margin",
            (0..rows).map(|i| Cell::Number(i as f64 / rows as f64)).collect::<Vec<_>>(),
        ),
        (
            "note",
            (0..rows)
                .map(|i| if i % 2 == 0 { Cell::Missing } else { Cell::from("n/a") })
                .collect::<Vec<_>>(),
        ),
    ])
    .expect("benchmark table is rectangular");
    let data = Data::from(table);

    c.bench_function("table_currency_1000x3", |b| {
        b.iter(|| black_box(format_currency(data.clone(), -2, None)));
    });
}

criterion_group!(
    benches,
    benchmark_scalar_currency,
    benchmark_sequence,
    benchmark_table
);
criterion_main!(benches);
