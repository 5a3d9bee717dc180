//! Finds the leave days that are worth taking.
//!
//! The free days (holidays and weekends) are merged into one timeline, split
//! into runs of consecutive free days, and neighbouring runs that are only a
//! few working days apart are suggested as one long vacation.

mod bridge;
mod error;
mod free_days;
mod run;
mod weekend;

pub use bridge::*;
pub use error::*;
pub use free_days::*;
pub use run::*;
pub use weekend::*;

use log::debug;

use crate::time::{Date, DateRange};

/// Options to configure the [`Planner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct PlannerOptions {
    /// The minimum number of consecutive free days that make up a run.
    pub min_run_length: usize,
    /// The maximum number of days between two runs that can be bridged.
    pub max_bridge_gap: usize,
    /// Whether a holiday on a weekend counts once or twice.
    pub duplicates: DuplicatePolicy,
    /// How the free days are split into runs.
    pub runs: RunStrategy,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            min_run_length: RunDetector::DEFAULT_MIN_LENGTH,
            max_bridge_gap: GapBridgeAdvisor::DEFAULT_MAX_GAP,
            duplicates: DuplicatePolicy::default(),
            runs: RunStrategy::default(),
        }
    }
}

impl PlannerOptions {
    #[must_use]
    pub const fn with_min_run_length(mut self, min_run_length: usize) -> Self {
        self.min_run_length = min_run_length;
        self
    }

    #[must_use]
    pub const fn with_max_bridge_gap(mut self, max_bridge_gap: usize) -> Self {
        self.max_bridge_gap = max_bridge_gap;
        self
    }

    #[must_use]
    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    #[must_use]
    pub const fn with_runs(mut self, runs: RunStrategy) -> Self {
        self.runs = runs;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Planner {
    options: PlannerOptions,
}

impl Planner {
    #[must_use]
    pub const fn new(options: PlannerOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &PlannerOptions {
        &self.options
    }

    /// The holidays and every weekend day of the `range`, sorted.
    ///
    /// Holidays outside of the range are not removed.
    #[must_use]
    pub fn free_days(&self, holidays: &[Date], range: DateRange) -> FreeDays {
        let free_days = FreeDays::merge(
            holidays.iter().copied(),
            weekends_in(range),
            self.options.duplicates,
        );

        debug!(
            "{} holidays and weekends make {} free days in {}",
            holidays.len(),
            free_days.len(),
            range
        );

        free_days
    }

    /// The vacations that do not need a single leave day, like long weekends.
    #[must_use]
    pub fn runs(&self, holidays: &[Date], range: DateRange) -> Vec<Run> {
        RunDetector::new(self.options.min_run_length)
            .with_strategy(self.options.runs)
            .detect(&self.free_days(holidays, range))
    }

    pub fn suggestions(
        &self,
        holidays: &[Date],
        range: DateRange,
    ) -> Result<Vec<Suggestion>, PlannerError> {
        let runs = self.runs(holidays, range);

        GapBridgeAdvisor::new(self.options.max_bridge_gap).advise(&runs)
    }
}

/// Suggests which days to take off between `range_start` and `range_end`.
///
/// # Errors
///
/// If `range_start` is after `range_end`.
pub fn compute_suggestions(
    holidays: &[Date],
    range_start: Date,
    range_end: Date,
    min_run_length: usize,
    max_bridge_gap: usize,
) -> Result<Vec<Suggestion>, PlannerError> {
    let range = DateRange::new(range_start, range_end)?;

    let options = PlannerOptions::default()
        .with_min_run_length(min_run_length)
        .with_max_bridge_gap(max_bridge_gap);

    Planner::new(options).suggestions(holidays, range)
}
