use std::collections::HashSet;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::planner::PlannerError;
use crate::time::Date;

/// A span of consecutive free days.
///
/// A run produced by the [`RunDetector`] always satisfies
/// `length == days from start to end + 1`, runs made with [`Run::new`]
/// are only checked by [`Run::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Run {
    start: Date,
    end: Date,
    length: usize,
}

impl Run {
    #[must_use]
    pub const fn new(start: Date, end: Date, length: usize) -> Self {
        Self { start, end, length }
    }

    /// The run from `start` to `end`, both included.
    ///
    /// # Panics
    ///
    /// If `start` is after `end`.
    #[must_use]
    pub const fn spanning(start: Date, end: Date) -> Self {
        Self::new(start, end, start.days_until(end) + 1)
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
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Checks that the recorded length matches the dates of the run.
    pub fn validate(&self) -> Result<(), PlannerError> {
        let span = self.start.signed_days_until(self.end) + 1;

        if span < 1 || span as u64 != self.length as u64 {
            return Err(PlannerError::InvalidRun {
                start: self.start,
                end: self.end,
                length: self.length,
                span,
            });
        }

        Ok(())
    }
}

/// How the [`RunDetector`] splits the free days into runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum RunStrategy {
    /// One run per block of consecutive free days.
    #[default]
    Maximal,
    /// One run per free day, starting at that day and extending as far as
    /// possible. A block of `n` consecutive days yields up to `n` overlapping
    /// runs, each one day shorter than the one before.
    Candidates,
}

impl FromStr for RunStrategy {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "maximal" => Ok(Self::Maximal),
            "candidates" => Ok(Self::Candidates),
            _ => Err(anyhow::anyhow!("Unknown run strategy: {}", string)),
        }
    }
}

impl TryFrom<String> for RunStrategy {
    type Error = <Self as FromStr>::Err;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        Self::from_str(&string)
    }
}

/// Finds the runs of free days that are at least `min_length` days long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunDetector {
    min_length: usize,
    strategy: RunStrategy,
}

impl Default for RunDetector {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LENGTH)
    }
}

impl RunDetector {
    /// A friday holiday plus the weekend.
    pub const DEFAULT_MIN_LENGTH: usize = 3;

    #[must_use]
    pub const fn new(min_length: usize) -> Self {
        Self {
            min_length,
            strategy: RunStrategy::Maximal,
        }
    }

    #[must_use]
    pub const fn with_strategy(mut self, strategy: RunStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the runs in the order of their first day in `free_days`.
    ///
    /// The free days are expected to be sorted.
    #[must_use]
    pub fn detect(&self, free_days: &[Date]) -> Vec<Run> {
        let runs = match self.strategy {
            RunStrategy::Maximal => self.maximal_runs(free_days),
            RunStrategy::Candidates => self.candidate_runs(free_days),
        };

        debug!(
            "found {} runs of at least {} days in {} free days",
            runs.len(),
            self.min_length,
            free_days.len()
        );

        runs
    }

    fn maximal_runs(&self, free_days: &[Date]) -> Vec<Run> {
        let mut runs = Vec::new();

        let mut days = free_days.iter().copied();
        let Some(first) = days.next() else {
            return runs;
        };

        let mut current = Run::spanning(first, first);
        for day in days {
            if day == current.end {
                // the same day from another source
                continue;
            }

            if day == current.end + 1 {
                current.end = day;
                current.length += 1;
                continue;
            }

            self.push_if_long_enough(&mut runs, current);
            current = Run::spanning(day, day);
        }

        self.push_if_long_enough(&mut runs, current);

        runs
    }

    fn candidate_runs(&self, free_days: &[Date]) -> Vec<Run> {
        let lookup = free_days.iter().copied().collect::<HashSet<_>>();

        let mut runs = Vec::new();
        for &start in free_days {
            let mut current = Run::spanning(start, start);

            while lookup.contains(&(current.end + 1)) {
                current.end += 1;
                current.length += 1;
            }

            self.push_if_long_enough(&mut runs, current);
        }

        runs
    }

    fn push_if_long_enough(&self, runs: &mut Vec<Run>, run: Run) {
        if run.length >= self.min_length {
            runs.push(run);
        }
    }
}
