//! Search activity counters.

use std::fmt;

/// Monotonically increasing counters describing open-list and store
/// activity during one search. Reset together with the node store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells discovered for the first time.
    pub opened: u64,
    /// Closed cells re-admitted after a cheaper path was found.
    pub reopened: u64,
    /// Cells expanded (popped from the open list).
    pub closed: u64,
    /// Open cells whose priority was improved in place.
    pub priority_increased: u64,
}

impl SearchStats {
    /// Zero all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "opened: {} reopened: {} closed: {} priority increased: {}",
            self.opened, self.reopened, self.closed, self.priority_increased
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_zeroes_all_counters() {
        let mut stats = SearchStats {
            opened: 4,
            reopened: 1,
            closed: 3,
            priority_increased: 2,
        };
        stats.reset();
        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn display_lists_counters() {
        let stats = SearchStats {
            opened: 10,
            reopened: 2,
            closed: 8,
            priority_increased: 5,
        };
        assert_eq!(
            stats.to_string(),
            "opened: 10 reopened: 2 closed: 8 priority increased: 5"
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_round_trip() {
        let stats = SearchStats {
            opened: 7,
            reopened: 1,
            closed: 6,
            priority_increased: 3,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
