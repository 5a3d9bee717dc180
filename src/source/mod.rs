//! Where the holidays come from.

mod austria;
mod gcal;

pub use austria::*;
pub use gcal::*;

use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::time::{Date, DateRange};
use crate::utils;

/// Knows the public holidays of some region.
pub trait HolidaySource {
    /// Returns the holidays in `range`, in no particular order.
    fn holidays(&self, range: DateRange) -> anyhow::Result<Vec<Date>>;
}

impl<S: HolidaySource + ?Sized> HolidaySource for Box<S> {
    fn holidays(&self, range: DateRange) -> anyhow::Result<Vec<Date>> {
        (**self).holidays(range)
    }
}

/// A fixed list of holidays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHolidays(Vec<Date>);

impl StaticHolidays {
    #[must_use]
    pub fn new(holidays: impl IntoIterator<Item = Date>) -> Self {
        Self(holidays.into_iter().collect())
    }
}

impl HolidaySource for StaticHolidays {
    fn holidays(&self, range: DateRange) -> anyhow::Result<Vec<Date>> {
        Ok(self
            .0
            .iter()
            .copied()
            .filter(|date| range.contains(date))
            .collect())
    }
}

/// Reads the holidays from a file with the calendar event list format,
/// for example a previously cached response of the [`GoogleCalendar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileHolidays {
    path: PathBuf,
}

impl JsonFileHolidays {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HolidaySource for JsonFileHolidays {
    fn holidays(&self, range: DateRange) -> anyhow::Result<Vec<Date>> {
        let contents = utils::read_to_string(&self.path)
            .with_context(|| format!("failed to read holidays from \"{}\"", self.path.display()))?;
        let events: Events = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse events in \"{}\"", self.path.display()))?;

        let holidays = events.holidays_in(range)?;
        debug!(
            "read {} holidays in {} from \"{}\"",
            holidays.len(),
            range,
            self.path.display()
        );

        Ok(holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_static_holidays_in_range() {
        let source = StaticHolidays::new([date!(2023:12:25), date!(2024:01:01), date!(2024:05:01)]);
        let range = DateRange::new(date!(2024:01:01), date!(2024:03:31)).unwrap();

        assert_eq!(source.holidays(range).unwrap(), vec![date!(2024:01:01)]);
    }

    #[test]
    fn test_boxed_source() {
        let source: Box<dyn HolidaySource> = Box::new(StaticHolidays::new([date!(2024:05:01)]));
        let range = DateRange::new(date!(2024:05:01), date!(2024:05:01)).unwrap();

        assert_eq!(source.holidays(range).unwrap(), vec![date!(2024:05:01)]);
    }

    #[test]
    fn test_json_file_holidays() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holidays.json");
        std::fs::write(
            &path,
            r#"{
                "summary": "Holidays in Austria",
                "items": [
                    { "summary": "Labour Day", "start": { "date": "2024-05-01" } },
                    { "summary": "New Year's Day", "start": { "date": "2024-01-01" } },
                    { "summary": "New Year's Day", "start": { "date": "2025-01-01" } }
                ]
            }"#,
        )
        .unwrap();

        let range = DateRange::new(date!(2024:01:01), date!(2024:12:31)).unwrap();
        assert_eq!(
            JsonFileHolidays::new(&path).holidays(range).unwrap(),
            vec![date!(2024:05:01), date!(2024:01:01)]
        );
    }

    #[test]
    fn test_json_file_missing() {
        let range = DateRange::new(date!(2024:01:01), date!(2024:12:31)).unwrap();
        assert!(JsonFileHolidays::new("does/not/exist.json")
            .holidays(range)
            .is_err());
    }
}
