use std::str::FromStr;

use derive_more::Deref;
use serde::Deserialize;

use crate::time::Date;

/// What to do with a date that is both a holiday and a weekend day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum DuplicatePolicy {
    /// The date appears once for each source it came from.
    #[default]
    Keep,
    /// The date appears only once.
    Merge,
}

impl FromStr for DuplicatePolicy {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "keep" => Ok(Self::Keep),
            "merge" => Ok(Self::Merge),
            _ => Err(anyhow::anyhow!("Unknown duplicate policy: {}", string)),
        }
    }
}

impl TryFrom<String> for DuplicatePolicy {
    type Error = <Self as FromStr>::Err;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        Self::from_str(&string)
    }
}

/// The chronologically sorted days on which nobody has to work.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deref)]
pub struct FreeDays(Vec<Date>);

impl FreeDays {
    /// Combines the holidays and the weekend days into one timeline.
    ///
    /// Neither input has to be sorted. The sort is stable, so with
    /// [`DuplicatePolicy::Keep`] a holiday on a weekend is listed before the
    /// weekend day it coincides with.
    #[must_use]
    pub fn merge(
        holidays: impl IntoIterator<Item = Date>,
        weekends: impl IntoIterator<Item = Date>,
        policy: DuplicatePolicy,
    ) -> Self {
        let mut days = holidays.into_iter().chain(weekends).collect::<Vec<_>>();
        days.sort();

        if policy == DuplicatePolicy::Merge {
            days.dedup();
        }

        Self(days)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Date> {
        self.0
    }
}

impl<'a> IntoIterator for &'a FreeDays {
    type Item = &'a Date;
    type IntoIter = core::slice::Iter<'a, Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
