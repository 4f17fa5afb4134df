//! Candidate date sets.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// The dates still admissible for a meeting, iterated in calendar order.
pub type Domain = BTreeSet<NaiveDate>;

/// Every date from `start` to `end`, both inclusive.
///
/// An inverted range (`start > end`) yields an empty domain rather than an
/// error; [`crate::solve`] rejects inverted ranges before calling this.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use meeting_csp::date_range;
///
/// let start = NaiveDate::from_ymd_opt(2026, 2, 27).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let domain = date_range(start, end);
/// assert_eq!(domain.len(), 4); // Feb 27, Feb 28, Mar 1, Mar 2
/// ```
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Domain {
    start.iter_days().take_while(|d| *d <= end).collect()
}
