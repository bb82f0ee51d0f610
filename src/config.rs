use std::time::{Duration, Instant};

use log::warn;

use crate::error::{Result, SearchError};

/// How often the deadline is compared against the clock, in expansions.
const DEADLINE_CHECK_INTERVAL: usize = 64;

/// Per-searcher settings. The default imposes no limits and skips the reachability pre-check,
/// which makes a query behave exactly like the bare algorithm.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Abort once this many nodes have been expanded.
    pub max_expansions: Option<usize>,
    /// Abort once a single query has been running for this long.
    pub deadline: Option<Duration>,
    /// Compare connected components of start and goal before searching, returning an empty path
    /// straight away if they differ.
    pub reachability_precheck: bool,
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        SearchConfig::default()
    }
    pub fn with_max_expansions(mut self, max_expansions: usize) -> SearchConfig {
        self.max_expansions = Some(max_expansions);
        self
    }
    pub fn with_deadline(mut self, deadline: Duration) -> SearchConfig {
        self.deadline = Some(deadline);
        self
    }
    pub fn with_reachability_precheck(mut self, enabled: bool) -> SearchConfig {
        self.reachability_precheck = enabled;
        self
    }
    pub(crate) fn budget(&self) -> Budget {
        Budget {
            expansions: 0,
            max_expansions: self.max_expansions,
            // A deadline too far away to be represented is no deadline at all.
            deadline: self.deadline.and_then(|d| Instant::now().checked_add(d)),
        }
    }
}

/// Tracks the work done by one query against the limits of its [SearchConfig].
#[derive(Debug)]
pub(crate) struct Budget {
    expansions: usize,
    max_expansions: Option<usize>,
    deadline: Option<Instant>,
}

impl Budget {
    /// Records one expansion, failing with [SearchError::Aborted] if a limit is exceeded.
    pub fn tick(&mut self) -> Result<()> {
        self.expansions += 1;
        if let Some(max) = self.max_expansions {
            if self.expansions > max {
                warn!("Expansion limit of {} reached, aborting search", max);
                return Err(SearchError::Aborted {
                    expansions: self.expansions - 1,
                });
            }
        }
        if let Some(deadline) = self.deadline {
            if self.expansions % DEADLINE_CHECK_INTERVAL == 0 && Instant::now() >= deadline {
                warn!("Deadline passed after {} expansions, aborting search", self.expansions);
                return Err(SearchError::Aborted {
                    expansions: self.expansions,
                });
            }
        }
        Ok(())
    }
    pub fn expansions(&self) -> usize {
        self.expansions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_budget_never_aborts() {
        let mut budget = SearchConfig::new().budget();
        for _ in 0..10_000 {
            assert!(budget.tick().is_ok());
        }
        assert_eq!(budget.expansions(), 10_000);
    }

    #[test]
    fn expansion_limit_aborts_on_the_next_tick() {
        let mut budget = SearchConfig::new().with_max_expansions(3).budget();
        for _ in 0..3 {
            assert!(budget.tick().is_ok());
        }
        assert_eq!(budget.tick(), Err(SearchError::Aborted { expansions: 3 }));
    }

    #[test]
    fn unrepresentable_deadline_is_ignored() {
        let mut budget = SearchConfig::new().with_deadline(Duration::MAX).budget();
        for _ in 0..(4 * DEADLINE_CHECK_INTERVAL) {
            assert!(budget.tick().is_ok());
        }
    }

    #[test]
    fn elapsed_deadline_aborts() {
        let mut budget = SearchConfig::new()
            .with_deadline(Duration::from_secs(0))
            .budget();
        let result = (0..DEADLINE_CHECK_INTERVAL).try_for_each(|_| budget.tick());
        assert_eq!(
            result,
            Err(SearchError::Aborted {
                expansions: DEADLINE_CHECK_INTERVAL
            })
        );
    }
}
