//! Intron value type
//!
//! The canonical representation of a splice junction after block-size
//! adjustment: a half-open interval on a scaffold plus a support score.

use std::fmt;

/// A spliced-out genomic interval with its evidence strength.
///
/// Coordinates are 0-based half-open, as in BED. Immutable once built;
/// the constructor enforces `start <= end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Intron {
    pub scaffold: String,
    pub start: u64,
    pub end: u64,
    /// Read-count or derived score backing this junction call.
    pub support: f64,
}

impl Intron {
    /// Build an intron, rejecting inverted intervals.
    pub fn new(scaffold: impl Into<String>, start: u64, end: u64, support: f64) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self {
            scaffold: scaffold.into(),
            start,
            end,
            support,
        })
    }

    /// Interval length.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Half-open overlap on the same scaffold: neither interval strictly
    /// precedes the other.
    pub fn intersects(&self, other: &Intron) -> bool {
        self.scaffold == other.scaffold && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Intron {
    /// Canonical tab-delimited form: `scaffold\tstart\tend\tsupport`.
    /// Integral supports render without a decimal point, so the format is
    /// stable under parse/emit round trips.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.scaffold, self.start, self.end, self.support
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_interval() {
        assert!(Intron::new("s1", 200, 100, 1.0).is_none());
        assert!(Intron::new("s1", 100, 100, 1.0).is_some());
    }

    #[test]
    fn test_intersects_same_scaffold() {
        let a = Intron::new("s1", 100, 200, 10.0).unwrap();
        let b = Intron::new("s1", 150, 250, 20.0).unwrap();
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_adjacent_introns_do_not_intersect() {
        let a = Intron::new("s1", 100, 200, 10.0).unwrap();
        let b = Intron::new("s1", 200, 300, 20.0).unwrap();
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_different_scaffolds_never_intersect() {
        let a = Intron::new("s1", 100, 200, 10.0).unwrap();
        let b = Intron::new("s2", 100, 200, 20.0).unwrap();
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_display_integral_support() {
        let i = Intron::new("scaffold_7", 1000, 2000, 42.0).unwrap();
        assert_eq!(i.to_string(), "scaffold_7\t1000\t2000\t42");
    }

    #[test]
    fn test_display_fractional_support() {
        let i = Intron::new("s1", 10, 20, 0.5).unwrap();
        assert_eq!(i.to_string(), "s1\t10\t20\t0.5");
    }
}
