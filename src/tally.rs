//! The pass/failure/error tally and its merge algebra.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Aggregated counts for a run scope: one increment per executed test
/// method, classified as a pass, a failure (assertion), or an error
/// (anything else).
///
/// `merge` is commutative and associative with `Tally::default()` as its
/// identity, so results combine upward through the suite tree in any
/// grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    pub passes: usize,
    pub failures: usize,
    pub errors: usize,
}

impl Tally {
    pub fn new(passes: usize, failures: usize, errors: usize) -> Self {
        Tally {
            passes,
            failures,
            errors,
        }
    }

    /// A single passing test method.
    pub fn pass() -> Self {
        Tally::new(1, 0, 0)
    }

    /// A single failed assertion.
    pub fn failure() -> Self {
        Tally::new(0, 1, 0)
    }

    /// A single unclassified error.
    pub fn error() -> Self {
        Tally::new(0, 0, 1)
    }

    /// Total number of test methods counted.
    pub fn total(&self) -> usize {
        self.passes + self.failures + self.errors
    }

    /// Returns a new tally with the fields of `self` and `other` summed.
    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            passes: self.passes + other.passes,
            failures: self.failures + other.failures,
            errors: self.errors + other.errors,
        }
    }

    /// True when nothing failed or errored.
    pub fn is_clean(&self) -> bool {
        self.failures == 0 && self.errors == 0
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, other: Tally) -> Tally {
        self.merge(other)
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Tally>>(iter: I) -> Tally {
        iter.fold(Tally::default(), Tally::merge)
    }
}

impl fmt::Display for Tally {
    /// The plain one-line summary a driver prints after a run.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tests run: {} passed, {} failed, {} errors",
            self.total(),
            self.passes,
            self.failures,
            self.errors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_commutative_and_associative() {
        let a = Tally::new(1, 2, 3);
        let b = Tally::new(4, 0, 1);
        let c = Tally::new(0, 5, 0);
        assert_eq!(a.merge(b), b.merge(a));
        assert_eq!(a.merge(b).merge(c), a.merge(b.merge(c)));
    }

    #[test]
    fn default_is_the_identity() {
        let a = Tally::new(2, 1, 0);
        assert_eq!(a.merge(Tally::default()), a);
        assert_eq!(Tally::default().merge(a), a);
        assert_eq!(Tally::default().total(), 0);
    }

    #[test]
    fn total_sums_all_fields() {
        let t = Tally::pass() + Tally::failure() + Tally::error();
        assert_eq!(t, Tally::new(1, 1, 1));
        assert_eq!(t.total(), 3);
        assert!(!t.is_clean());
        assert!(Tally::pass().is_clean());
    }

    #[test]
    fn sums_over_iterators() {
        let total: Tally = vec![Tally::pass(), Tally::pass(), Tally::failure()]
            .into_iter()
            .sum();
        assert_eq!(total, Tally::new(2, 1, 0));
    }

    #[test]
    fn summary_line() {
        assert_eq!(
            Tally::new(3, 1, 2).to_string(),
            "6 tests run: 3 passed, 1 failed, 2 errors"
        );
    }
}
