//! Per-meeting search state: the pruned domain and the current assignment.

use chrono::NaiveDate;

use crate::domain::Domain;

/// One meeting variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingVar {
    /// Meeting index in `0..n_meetings`.
    pub index: usize,
    /// The date assigned on the active search path, if any.
    pub current: Option<NaiveDate>,
    /// Dates still admissible for this meeting.
    pub domain: Domain,
}

/// The meeting variables of one solve call, indexed by meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableStore {
    vars: Vec<MeetingVar>,
}

impl VariableStore {
    /// Create `n_meetings` unassigned variables, each with a copy of `domain`.
    pub fn new(n_meetings: usize, domain: &Domain) -> Self {
        let vars = (0..n_meetings)
            .map(|index| MeetingVar {
                index,
                current: None,
                domain: domain.clone(),
            })
            .collect();
        Self { vars }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// The domain of meeting `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Constraint indices are validated
    /// before a store is built, so this indicates a caller bug.
    pub fn domain(&self, index: usize) -> &Domain {
        &self.vars[index].domain
    }

    pub fn domain_mut(&mut self, index: usize) -> &mut Domain {
        &mut self.vars[index].domain
    }

    pub fn set_domain(&mut self, index: usize, domain: Domain) {
        self.vars[index].domain = domain;
    }

    pub fn current(&self, index: usize) -> Option<NaiveDate> {
        self.vars[index].current
    }

    pub fn assign(&mut self, index: usize, date: NaiveDate) {
        self.vars[index].current = Some(date);
    }

    pub fn unassign(&mut self, index: usize) {
        self.vars[index].current = None;
    }

    /// Whether any meeting has no admissible date left.
    ///
    /// If so the problem is unsatisfiable and search can be skipped.
    pub fn any_domain_empty(&self) -> bool {
        self.vars.iter().any(|v| v.domain.is_empty())
    }

    /// Sum of all domain sizes.
    pub fn total_domain_size(&self) -> usize {
        self.vars.iter().map(|v| v.domain.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeetingVar> {
        self.vars.iter()
    }
}
