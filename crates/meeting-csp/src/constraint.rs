//! Date constraints over meetings and the comparison that evaluates them.
//!
//! A constraint is either **unary** (a meeting compared against a fixed date)
//! or **binary** (two meetings compared against each other). In both cases
//! the relation reads left to right: `date(left) OP right`.
//!
//! # Operators
//!
//! | Token | Variant          | Holds when              |
//! |-------|------------------|-------------------------|
//! | `==`  | [`Operator::Eq`] | same day                |
//! | `!=`  | [`Operator::Ne`] | different days          |
//! | `<`   | [`Operator::Lt`] | left strictly before    |
//! | `<=`  | [`Operator::Le`] | left before or same day |
//! | `>`   | [`Operator::Gt`] | left strictly after     |
//! | `>=`  | [`Operator::Ge`] | left after or same day  |

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CspError;

// ── Operator ────────────────────────────────────────────────────────────────

/// A comparison between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
}

impl Operator {
    /// All six operators, in token-table order.
    pub const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
    ];

    /// Whether `left OP right` holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use meeting_csp::Operator;
    ///
    /// let mon = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    /// let tue = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
    /// assert!(Operator::Lt.holds(mon, tue));
    /// assert!(!Operator::Ge.holds(mon, tue));
    /// ```
    pub fn holds(self, left: NaiveDate, right: NaiveDate) -> bool {
        match self {
            Operator::Eq => left == right,
            Operator::Ne => left != right,
            Operator::Lt => left < right,
            Operator::Le => left <= right,
            Operator::Gt => left > right,
            Operator::Ge => left >= right,
        }
    }

    /// The operator that expresses the same relation with operands swapped.
    ///
    /// `a OP b` holds exactly when `b OP.flip() a` holds.
    pub fn flip(self) -> Operator {
        match self {
            Operator::Eq => Operator::Eq,
            Operator::Ne => Operator::Ne,
            Operator::Lt => Operator::Gt,
            Operator::Le => Operator::Ge,
            Operator::Gt => Operator::Lt,
            Operator::Ge => Operator::Le,
        }
    }

    /// The literal token for this operator (e.g., `"<="`).
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CspError;

    /// Parse one of `==`, `!=`, `<`, `<=`, `>`, `>=`. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == token)
            .ok_or_else(|| CspError::UnknownOperator(s.to_string()))
    }
}

impl TryFrom<&str> for Operator {
    type Error = CspError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ── Constraint ──────────────────────────────────────────────────────────────

/// A unary or binary constraint on meeting dates.
///
/// Serialized with an `arity` tag, e.g.
/// `{"arity":"binary","left":0,"op":"<","right":1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "arity", rename_all = "snake_case")]
pub enum Constraint {
    /// `date(meeting) OP date`.
    Unary {
        meeting: usize,
        op: Operator,
        date: NaiveDate,
    },
    /// `date(left) OP date(right)`.
    Binary {
        left: usize,
        op: Operator,
        right: usize,
    },
}

impl Constraint {
    /// Build a unary constraint `(meeting, op, date)`.
    pub fn unary(meeting: usize, op: Operator, date: NaiveDate) -> Self {
        Constraint::Unary { meeting, op, date }
    }

    /// Build a binary constraint `(left, op, right)`.
    pub fn binary(left: usize, op: Operator, right: usize) -> Self {
        Constraint::Binary { left, op, right }
    }

    /// Number of meetings the constraint references: 1 or 2.
    pub fn arity(&self) -> usize {
        match self {
            Constraint::Unary { .. } => 1,
            Constraint::Binary { .. } => 2,
        }
    }

    /// The meeting indices this constraint references.
    pub fn meetings(&self) -> Vec<usize> {
        match *self {
            Constraint::Unary { meeting, .. } => vec![meeting],
            Constraint::Binary { left, right, .. } => vec![left, right],
        }
    }

    /// Whether the constraint holds for a complete assignment indexed by meeting.
    ///
    /// Returns `false` if the assignment does not cover every referenced meeting.
    pub fn is_satisfied_by(&self, assignment: &[NaiveDate]) -> bool {
        match *self {
            Constraint::Unary { meeting, op, date } => assignment
                .get(meeting)
                .is_some_and(|&d| op.holds(d, date)),
            Constraint::Binary { left, op, right } => {
                match (assignment.get(left), assignment.get(right)) {
                    (Some(&l), Some(&r)) => op.holds(l, r),
                    _ => false,
                }
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Unary { meeting, op, date } => write!(f, "m{meeting} {op} {date}"),
            Constraint::Binary { left, op, right } => write!(f, "m{left} {op} m{right}"),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
