use chrono::{Days, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use meeting_csp::{solve_with_options, Constraint, Operator, SolveOptions};
use std::hint::black_box;

/// Meetings strictly ordered, with every other pair on different days.
fn chain(n: usize) -> Vec<Constraint> {
    let mut constraints: Vec<Constraint> = (1..n)
        .map(|i| Constraint::binary(i - 1, Operator::Lt, i))
        .collect();
    constraints.extend((2..n).map(|i| Constraint::binary(i - 2, Operator::Ne, i)));
    constraints
}

fn bench_solve(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let end = start + Days::new(20);
    let constraints = chain(8);

    let mut group = c.benchmark_group("chain_8_meetings_21_days");
    group.bench_function("with_arc_consistency", |b| {
        let options = SolveOptions::default();
        b.iter(|| solve_with_options(8, start, end, black_box(&constraints), &options))
    });
    group.bench_function("node_consistency_only", |b| {
        let options = SolveOptions {
            arc_consistency: false,
        };
        b.iter(|| solve_with_options(8, start, end, black_box(&constraints), &options))
    });
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
