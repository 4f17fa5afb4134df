//! # meeting-csp
//!
//! Deterministic meeting-date constraint solving.
//!
//! Given a number of meetings, a shared inclusive date range, and unary or
//! binary constraints on meeting dates, finds one date per meeting that
//! satisfies every constraint, or reports that none exists.
//!
//! ## Modules
//!
//! - [`constraint`] — Comparison operators and unary/binary constraints
//! - [`domain`] — Inclusive date ranges as candidate sets
//! - [`store`] — Per-meeting domains and current assignments
//! - [`consistency`] — Node consistency and AC-3 domain pruning
//! - [`search`] — Chronological backtracking search
//! - [`solver`] — `solve` entry points, options, and input validation
//! - [`error`] — Error types

pub mod consistency;
pub mod constraint;
pub mod domain;
pub mod error;
pub mod search;
pub mod solver;
pub mod store;

pub use consistency::{arc_consistency, node_consistency};
pub use constraint::{Constraint, Operator};
pub use domain::{date_range, Domain};
pub use error::CspError;
pub use search::{verify, SearchStats};
pub use solver::{solve, solve_with_options, SolveOptions, SolveOutcome};
pub use store::{MeetingVar, VariableStore};
