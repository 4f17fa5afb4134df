//! Property tests: soundness, completeness against brute force, and the
//! pruning guarantees of the consistency passes.

use chrono::{Days, NaiveDate};
use meeting_csp::{
    arc_consistency, date_range, node_consistency, solve, solve_with_options, verify, Constraint,
    Operator, SolveOptions, VariableStore,
};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

fn nth_day(offset: i64) -> NaiveDate {
    if offset >= 0 {
        base() + Days::new(offset as u64)
    } else {
        base() - Days::new(offset.unsigned_abs())
    }
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn constraint(n_meetings: usize, n_days: i64) -> impl Strategy<Value = Constraint> {
    prop_oneof![
        // Unary operands may fall just outside the range
        (0..n_meetings, operator(), -1..=n_days)
            .prop_map(|(m, op, offset)| Constraint::unary(m, op, nth_day(offset))),
        (0..n_meetings, operator(), 0..n_meetings)
            .prop_map(|(l, op, r)| Constraint::binary(l, op, r)),
    ]
}

/// (meetings, days in range, constraints)
fn problem() -> impl Strategy<Value = (usize, i64, Vec<Constraint>)> {
    (1usize..=3, 1i64..=4).prop_flat_map(|(n, days)| {
        (
            Just(n),
            Just(days),
            prop::collection::vec(constraint(n, days), 0..6),
        )
    })
}

/// Every assignment over the range, checked one by one.
fn brute_force_exists(n: usize, days: i64, constraints: &[Constraint]) -> bool {
    let total = (days as usize).pow(n as u32);
    (0..total).any(|mut code| {
        let assignment: Vec<NaiveDate> = (0..n)
            .map(|_| {
                let offset = (code % days as usize) as i64;
                code /= days as usize;
                nth_day(offset)
            })
            .collect();
        verify(&assignment, constraints)
    })
}

proptest! {
    #[test]
    fn solutions_satisfy_every_constraint((n, days, constraints) in problem()) {
        let result = solve(n, base(), nth_day(days - 1), &constraints).unwrap();
        if let Some(assignment) = result {
            prop_assert_eq!(assignment.len(), n);
            prop_assert!(verify(&assignment, &constraints));
            for d in &assignment {
                prop_assert!(*d >= base() && *d <= nth_day(days - 1));
            }
        }
    }

    #[test]
    fn finds_a_solution_whenever_one_exists((n, days, constraints) in problem()) {
        let result = solve(n, base(), nth_day(days - 1), &constraints).unwrap();
        prop_assert_eq!(result.is_some(), brute_force_exists(n, days, &constraints));
    }

    #[test]
    fn arc_consistency_does_not_change_the_answer((n, days, constraints) in problem()) {
        let end = nth_day(days - 1);
        let with =
            solve_with_options(n, base(), end, &constraints, &SolveOptions::default()).unwrap();
        let without = solve_with_options(
            n,
            base(),
            end,
            &constraints,
            &SolveOptions { arc_consistency: false },
        )
        .unwrap();
        prop_assert_eq!(with.assignment.is_some(), without.assignment.is_some());
        prop_assert!(with.stats.nodes <= without.stats.nodes);
    }

    #[test]
    fn preprocessing_is_idempotent((n, days, constraints) in problem()) {
        let mut store = VariableStore::new(n, &date_range(base(), nth_day(days - 1)));
        node_consistency(&mut store, &constraints);
        arc_consistency(&mut store, &constraints);
        let snapshot = store.clone();
        prop_assert_eq!(node_consistency(&mut store, &constraints), 0);
        prop_assert_eq!(arc_consistency(&mut store, &constraints), 0);
        prop_assert_eq!(store, snapshot);
    }

    #[test]
    fn preprocessing_only_shrinks_domains((n, days, constraints) in problem()) {
        let full = date_range(base(), nth_day(days - 1));
        let mut store = VariableStore::new(n, &full);

        let removed_by_node = node_consistency(&mut store, &constraints);
        let after_node = store.clone();
        prop_assert_eq!(full.len() * n - after_node.total_domain_size(), removed_by_node);

        let removed_by_arc = arc_consistency(&mut store, &constraints);
        prop_assert_eq!(after_node.total_domain_size() - store.total_domain_size(), removed_by_arc);
        for (before, after) in after_node.iter().zip(store.iter()) {
            prop_assert!(after.domain.is_subset(&before.domain));
            prop_assert!(before.domain.is_subset(&full));
        }
    }
}
