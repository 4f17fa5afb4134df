//! Domain pruning before search.
//!
//! Two passes, both in place on a [`VariableStore`]:
//!
//! - [`node_consistency`] — drop dates that violate a unary constraint on the
//!   same meeting.
//! - [`arc_consistency`] — AC-3: drop dates from a meeting's domain that have
//!   no supporting date in a related meeting's domain, re-checking neighbours
//!   until nothing changes.
//!
//! Both passes only ever shrink domains and return how many dates they removed,
//! so running either one again on its own output returns `0`.

use std::collections::{HashMap, HashSet, VecDeque};

use chrono::NaiveDate;
use tracing::debug;

use crate::constraint::{Constraint, Operator};
use crate::domain::Domain;
use crate::store::VariableStore;

// ── Node consistency ────────────────────────────────────────────────────────

/// Remove every date that fails a unary constraint on its own meeting.
///
/// A binary constraint that names the same meeting on both sides (`m0 <= m0`)
/// can only compare a date with itself, so it is filtered here too.
///
/// Returns the number of dates removed across all domains.
///
/// # Panics
///
/// Panics if a constraint names a meeting outside the store. [`crate::solve`]
/// rejects such constraints before pruning.
pub fn node_consistency(store: &mut VariableStore, constraints: &[Constraint]) -> usize {
    let mut removed = 0;
    for constraint in constraints {
        // A missing operand means the meeting is compared with itself.
        let (meeting, op, operand) = match *constraint {
            Constraint::Unary { meeting, op, date } => (meeting, op, Some(date)),
            Constraint::Binary { left, op, right } if left == right => (left, op, None),
            Constraint::Binary { .. } => continue,
        };
        let domain = store.domain_mut(meeting);
        let before = domain.len();
        domain.retain(|&d| op.holds(d, operand.unwrap_or(d)));
        removed += before - domain.len();
    }
    debug!(event = "node_consistency", removed);
    removed
}

// ── Arc consistency ─────────────────────────────────────────────────────────

/// A directed arc: every date of `tail` needs some date of `head` with `tail op head`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arc {
    pub tail: usize,
    pub head: usize,
    pub op: Operator,
}

/// Both directed arcs of every binary constraint between two distinct meetings,
/// without duplicates, in constraint order.
pub fn arcs(constraints: &[Constraint]) -> Vec<Arc> {
    let mut arcs = Vec::new();
    let mut seen = HashSet::new();
    for constraint in constraints {
        if let Constraint::Binary { left, op, right } = *constraint {
            if left == right {
                continue;
            }
            let forward = Arc {
                tail: left,
                head: right,
                op,
            };
            let backward = Arc {
                tail: right,
                head: left,
                op: op.flip(),
            };
            for arc in [forward, backward] {
                if seen.insert(arc) {
                    arcs.push(arc);
                }
            }
        }
    }
    arcs
}

/// Enforce arc consistency (AC-3) over all binary constraints.
///
/// Support for each arc is computed from the current head domain alone, so
/// pruning one pair of meetings never leaks into an unrelated pair. Runs until
/// the queue drains, so an emptied domain also empties every meeting connected
/// to it and a second run removes nothing.
///
/// Returns the number of dates removed across all domains.
///
/// # Panics
///
/// Panics if a constraint names a meeting outside the store. [`crate::solve`]
/// rejects such constraints before pruning.
pub fn arc_consistency(store: &mut VariableStore, constraints: &[Constraint]) -> usize {
    let all = arcs(constraints);
    let mut by_head: HashMap<usize, Vec<Arc>> = HashMap::new();
    for arc in &all {
        by_head.entry(arc.head).or_default().push(*arc);
    }
    let mut queue: VecDeque<Arc> = all.iter().copied().collect();
    let mut queued: HashSet<Arc> = all.iter().copied().collect();
    let mut removed = 0;
    let mut revisions = 0usize;

    while let Some(arc) = queue.pop_front() {
        queued.remove(&arc);
        revisions += 1;

        let pruned = revise(store, arc);
        if pruned == 0 {
            continue;
        }
        removed += pruned;

        if store.domain(arc.tail).is_empty() {
            debug!(event = "arc_consistency_wipeout", meeting = arc.tail, removed, revisions);
        }

        for dependent in by_head.get(&arc.tail).into_iter().flatten() {
            if queued.insert(*dependent) {
                queue.push_back(*dependent);
            }
        }
    }

    debug!(event = "arc_consistency", removed, revisions);
    removed
}

/// Drop the dates of `arc.tail` that have no support in `arc.head`.
fn revise(store: &mut VariableStore, arc: Arc) -> usize {
    let unsupported: Vec<NaiveDate> = {
        let head = store.domain(arc.head);
        store
            .domain(arc.tail)
            .iter()
            .copied()
            .filter(|&d| !has_support(d, arc.op, head))
            .collect()
    };
    let tail = store.domain_mut(arc.tail);
    for d in &unsupported {
        tail.remove(d);
    }
    unsupported.len()
}

/// Whether some `e` in `head` satisfies `date op e`.
///
/// Uses the ordering of the domain instead of scanning it.
fn has_support(date: NaiveDate, op: Operator, head: &Domain) -> bool {
    let (Some(&first), Some(&last)) = (head.first(), head.last()) else {
        return false;
    };
    match op {
        Operator::Eq => head.contains(&date),
        Operator::Ne => first != date || last != date,
        Operator::Lt => date < last,
        Operator::Le => date <= last,
        Operator::Gt => date > first,
        Operator::Ge => date >= first,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
