//! The solve entry points.
//!
//! [`solve`] validates its input, builds one domain per meeting, prunes the
//! domains, and runs the backtracking search:
//!
//! ```text
//! date_range → VariableStore → node_consistency → arc_consistency → backtrack
//! ```
//!
//! If pruning leaves any meeting with no dates, search is skipped entirely.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consistency::{arc_consistency, node_consistency};
use crate::constraint::Constraint;
use crate::domain::date_range;
use crate::error::{CspError, Result};
use crate::search::{backtrack, SearchStats};
use crate::store::VariableStore;

/// Options for [`solve_with_options`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Run AC-3 after node consistency. Search stays correct without it.
    pub arc_consistency: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            arc_consistency: true,
        }
    }
}

/// The result of one solve call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveOutcome {
    /// One date per meeting, indexed by meeting, or `None` if unsatisfiable.
    pub assignment: Option<Vec<NaiveDate>>,
    /// Search counters. All zero when pruning already proved unsatisfiability.
    pub stats: SearchStats,
    /// Dates removed from domains before search.
    pub pruned: usize,
}

/// Find one date per meeting satisfying every constraint.
///
/// Uses [`SolveOptions::default`]. See [`solve_with_options`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use meeting_csp::{solve, Constraint, Operator};
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
/// let constraints = [
///     Constraint::unary(0, Operator::Eq, d(4)),
///     Constraint::binary(1, Operator::Gt, 0),
/// ];
/// let dates = solve(2, d(2), d(6), &constraints).unwrap().unwrap();
/// assert_eq!(dates[0], d(4));
/// assert!(dates[1] > d(4));
/// ```
pub fn solve(
    n_meetings: usize,
    range_start: NaiveDate,
    range_end: NaiveDate,
    constraints: &[Constraint],
) -> Result<Option<Vec<NaiveDate>>> {
    solve_with_options(
        n_meetings,
        range_start,
        range_end,
        constraints,
        &SolveOptions::default(),
    )
    .map(|outcome| outcome.assignment)
}

/// Find one date per meeting satisfying every constraint, with options.
///
/// # Arguments
///
/// * `n_meetings` — Number of meetings, indexed `0..n_meetings`
/// * `range_start` — First admissible date (inclusive) for every meeting
/// * `range_end` — Last admissible date (inclusive) for every meeting
/// * `constraints` — Unary and binary constraints on meeting dates
/// * `options` — Preprocessing options
///
/// # Returns
///
/// A [`SolveOutcome`] whose `assignment` is `None` when no assignment exists.
/// Dates are tried earliest first, so the result is deterministic.
///
/// # Errors
///
/// Returns [`CspError::NoMeetings`] if `n_meetings` is zero,
/// [`CspError::InvertedRange`] if `range_start > range_end`, or
/// [`CspError::MeetingOutOfRange`] if a constraint names a meeting
/// `>= n_meetings`. Input is checked before any search work is done.
pub fn solve_with_options(
    n_meetings: usize,
    range_start: NaiveDate,
    range_end: NaiveDate,
    constraints: &[Constraint],
    options: &SolveOptions,
) -> Result<SolveOutcome> {
    validate(n_meetings, range_start, range_end, constraints)?;

    info!(
        event = "solve_start",
        n_meetings,
        constraint_count = constraints.len(),
        %range_start,
        %range_end,
    );

    let domain = date_range(range_start, range_end);
    let mut store = VariableStore::new(n_meetings, &domain);

    let mut pruned = node_consistency(&mut store, constraints);
    if options.arc_consistency && !store.any_domain_empty() {
        pruned += arc_consistency(&mut store, constraints);
    }

    let mut stats = SearchStats::default();
    if store.any_domain_empty() {
        debug!(event = "empty_domain", pruned);
        info!(event = "solve_end", solved = false, pruned);
        return Ok(SolveOutcome {
            assignment: None,
            stats,
            pruned,
        });
    }

    let assignment = backtrack(&mut store, constraints, &mut stats);

    info!(
        event = "solve_end",
        solved = assignment.is_some(),
        pruned,
        nodes = stats.nodes,
        backtracks = stats.backtracks,
    );

    Ok(SolveOutcome {
        assignment,
        stats,
        pruned,
    })
}

/// Reject malformed input before any domain is built.
fn validate(
    n_meetings: usize,
    range_start: NaiveDate,
    range_end: NaiveDate,
    constraints: &[Constraint],
) -> Result<()> {
    if n_meetings == 0 {
        return Err(CspError::NoMeetings);
    }
    if range_start > range_end {
        return Err(CspError::InvertedRange {
            start: range_start,
            end: range_end,
        });
    }
    if let Some(index) = constraints
        .iter()
        .flat_map(Constraint::meetings)
        .find(|&i| i >= n_meetings)
    {
        return Err(CspError::MeetingOutOfRange { index, n_meetings });
    }
    Ok(())
}
