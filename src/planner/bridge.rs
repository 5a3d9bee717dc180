use log::{debug, trace};
use serde::Serialize;

use crate::planner::{PlannerError, Run};
use crate::time::Date;

/// Taking `leave_days` days off turns `start..=end` into a single vacation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Suggestion {
    start: Date,
    end: Date,
    vacation_days: usize,
    leave_days: usize,
}

impl Suggestion {
    #[must_use]
    pub const fn new(start: Date, end: Date, vacation_days: usize, leave_days: usize) -> Self {
        Self {
            start,
            end,
            vacation_days,
            leave_days,
        }
    }

    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    #[must_use]
    pub const fn vacation_days(&self) -> usize {
        self.vacation_days
    }

    #[must_use]
    pub const fn leave_days(&self) -> usize {
        self.leave_days
    }
}

/// Looks at every two neighbouring runs and suggests taking the days between
/// them off, when the gap is small enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapBridgeAdvisor {
    max_gap: usize,
}

impl Default for GapBridgeAdvisor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_GAP)
    }
}

impl GapBridgeAdvisor {
    pub const DEFAULT_MAX_GAP: usize = 5;

    /// Two runs are only worth bridging if together they are longer than this.
    const MIN_COMBINED_LENGTH: usize = 3;

    #[must_use]
    pub const fn new(max_gap: usize) -> Self {
        Self { max_gap }
    }

    /// Returns one suggestion for each pair `(runs[i], runs[i + 1])` that is
    /// worth bridging, in the order of the pairs.
    pub fn advise(&self, runs: &[Run]) -> Result<Vec<Suggestion>, PlannerError> {
        let suggestions = runs
            .windows(2)
            .filter_map(|pair| self.bridge(&pair[0], &pair[1]).transpose())
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "suggesting {} of {} gaps between runs",
            suggestions.len(),
            runs.len().saturating_sub(1)
        );

        Ok(suggestions)
    }

    /// The gap is the number of days from the end of `left` to the start of
    /// `right`, so two runs that touch have a gap of 1 and need no leave.
    /// Overlapping runs, which [`RunStrategy::Candidates`] produces, have a
    /// gap below 1 and are never bridged instead of getting a negative
    /// number of leave days.
    ///
    /// [`RunStrategy::Candidates`]: crate::planner::RunStrategy::Candidates
    pub fn bridge(&self, left: &Run, right: &Run) -> Result<Option<Suggestion>, PlannerError> {
        left.validate()?;
        right.validate()?;

        let gap = left.end().signed_days_until(right.start());
        if gap < 1 {
            trace!(
                "skipping {}..={} and {}..={}: the runs overlap",
                left.start(),
                left.end(),
                right.start(),
                right.end()
            );
            return Ok(None);
        }

        let gap = gap as usize;
        if gap > self.max_gap {
            trace!(
                "skipping gap of {} days after {}: more than {}",
                gap,
                left.end(),
                self.max_gap
            );
            return Ok(None);
        }

        if left.length() + right.length() <= Self::MIN_COMBINED_LENGTH {
            trace!(
                "skipping gap of {} days after {}: runs are too short",
                gap,
                left.end()
            );
            return Ok(None);
        }

        Ok(Some(Suggestion::new(
            left.start(),
            right.end(),
            left.length() + right.length() + gap,
            gap - 1,
        )))
    }
}
