//! Chronological backtracking over meeting indices.
//!
//! Meetings are assigned in index order, each trying the dates left in its
//! domain from earliest to latest. After every tentative assignment the
//! binary constraints whose two meetings are both assigned are re-checked;
//! a failure retracts the date and moves on to the next one. The first
//! complete assignment that passes [`verify`] is returned.
//!
//! Worst case is `O(|domain|^n)` nodes. Domain pruning in
//! [`crate::consistency`] is the only thing that shrinks the tree.

use std::ops::Bound::{Excluded, Unbounded};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::trace;

use crate::constraint::Constraint;
use crate::store::VariableStore;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Tentative assignments made.
    pub nodes: u64,
    /// Tentative assignments retracted.
    pub backtracks: u64,
}

/// One level of the search: the meeting being assigned and the date it holds.
#[derive(Debug, Clone, Copy)]
struct Frame {
    meeting: usize,
    /// Date currently assigned to `meeting`; `None` before its first candidate.
    last: Option<NaiveDate>,
}

/// Search for a complete assignment using the domains in `store`.
///
/// Returns the dates indexed by meeting, or `None` once every branch is
/// exhausted. On return every meeting in `store` is unassigned again unless a
/// solution was found, in which case `store` holds it as the current assignment.
///
/// The search keeps its own frame stack, so its depth is bounded by memory
/// rather than by the thread's call stack.
pub fn backtrack(
    store: &mut VariableStore,
    constraints: &[Constraint],
    stats: &mut SearchStats,
) -> Option<Vec<NaiveDate>> {
    let n_meetings = store.len();
    if n_meetings == 0 {
        return verify(&[], constraints).then(Vec::new);
    }

    let mut assignment = Vec::with_capacity(n_meetings);
    let mut frames = vec![Frame {
        meeting: 0,
        last: None,
    }];

    while let Some(frame) = frames.last_mut() {
        let index = frame.meeting;
        debug_assert_eq!(
            assignment.len(),
            index + usize::from(frame.last.is_some()),
            "assignment out of sync at meeting {index}"
        );
        debug_assert_eq!(store.current(index), frame.last);

        let next = match frame.last {
            None => store.domain(index).first().copied(),
            Some(last) => {
                assignment.pop();
                store.unassign(index);
                stats.backtracks += 1;
                trace!(meeting = index, date = %last, "retract");
                store
                    .domain(index)
                    .range((Excluded(last), Unbounded))
                    .next()
                    .copied()
            }
        };

        let Some(date) = next else {
            frames.pop();
            continue;
        };

        frame.last = Some(date);
        stats.nodes += 1;
        assignment.push(date);
        store.assign(index, date);

        if !is_consistent(&assignment, constraints) {
            continue;
        }
        if index + 1 == n_meetings {
            if verify(&assignment, constraints) {
                return Some(assignment);
            }
            continue;
        }
        frames.push(Frame {
            meeting: index + 1,
            last: None,
        });
    }
    None
}

/// Whether a partial assignment breaks no binary constraint.
///
/// `assignment[i]` is meeting `i`'s date; meetings past the end are
/// unassigned, and any constraint touching one of them is skipped.
pub fn is_consistent(assignment: &[NaiveDate], constraints: &[Constraint]) -> bool {
    constraints.iter().all(|constraint| match *constraint {
        Constraint::Binary { left, op, right } => {
            match (assignment.get(left), assignment.get(right)) {
                (Some(&l), Some(&r)) => op.holds(l, r),
                _ => true,
            }
        }
        Constraint::Unary { .. } => true,
    })
}

/// Whether a complete assignment satisfies every constraint, unary and binary.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use meeting_csp::{verify, Constraint, Operator};
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
/// let constraints = [
///     Constraint::binary(0, Operator::Lt, 1),
///     Constraint::unary(1, Operator::Le, d(5)),
/// ];
/// assert!(verify(&[d(2), d(4)], &constraints));
/// assert!(!verify(&[d(4), d(4)], &constraints));
/// ```
pub fn verify(assignment: &[NaiveDate], constraints: &[Constraint]) -> bool {
    constraints.iter().all(|c| c.is_satisfied_by(assignment))
}
