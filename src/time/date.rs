use core::fmt;
use core::ops::{Add, AddAssign, Sub};
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{Month, WeekDay, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        $crate::static_assertions::const_assert!($year <= $crate::time::Year::MAX.as_usize());
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        $crate::static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        $crate::static_assertions::const_assert!($day != 0);
        $crate::static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

/// A day in the proleptic gregorian calendar without a time of day.
///
/// Dates are always interpreted in UTC, so two dates are equal if and only
/// if they have the same year, month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    /// The week day of 0000-01-01.
    const BASE_WEEK_DAY: WeekDay = WeekDay::Saturday;

    /// The suffix of a timestamp at midnight in UTC.
    const MIDNIGHT_UTC: &'static str = "T00:00:00Z";

    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year > Year::MAX {
            return Err(InvalidDate::YearOutOfRange { year });
        }

        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// # Safety
    ///
    /// The day must exist in the given month of the given year.
    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    #[must_use]
    const fn from_ordinal(year: Year, ordinal: usize) -> Self {
        if year.days() < ordinal || ordinal == 0 {
            const_panic::concat_panic!(
                "Invalid ordinal `",
                ordinal,
                "` for year ",
                year.as_usize(),
                " with ",
                year.days(),
                " days."
            );
        }

        let cumulative_days = year.cumulative_days();

        let mut current_month = Month::January;
        while !current_month.is_eq(&Month::December)
            && cumulative_days[current_month.as_usize()] < ordinal
        {
            current_month = current_month.next();
        }

        let day = ordinal - cumulative_days[current_month.as_usize() - 1];

        Self {
            year,
            month: current_month,
            day,
        }
    }

    #[must_use]
    const fn from_days_since_base_date(days: usize) -> Self {
        let year = Year::from_days_since_base_date(days);
        // NOTE: +1 because the ordinal of the first day of the year is 1 and not 0
        let ordinal = (days - year.days_since_base_date()) + 1;
        Self::from_ordinal(year, ordinal)
    }
}

impl Date {
    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> usize {
        self.day
    }

    #[must_use]
    pub const fn week_day(&self) -> WeekDay {
        Self::BASE_WEEK_DAY.add_const(self.days_since_base_date())
    }

    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        self.week_day().is_weekend()
    }

    /// The day of the year, starting with 1 for January 1st.
    #[must_use]
    const fn ordinal(&self) -> usize {
        // -1 to get the index of the previous month, the first month
        // (january) has the number 1
        self.year().cumulative_days()[self.month().as_usize() - 1] + self.day()
    }

    #[must_use]
    const fn days_since_base_date(&self) -> usize {
        // the ordinal of the first day of the year is 1, without the -1
        // 0000-01-01 would be one day after itself
        self.year.days_since_base_date() + (self.ordinal() - 1)
    }

    #[must_use]
    pub const fn add_days(self, days: usize) -> Self {
        Self::from_days_since_base_date(self.days_since_base_date() + days)
    }

    /// # Panics
    ///
    /// If the result would be before 0000-01-01.
    #[must_use]
    pub const fn sub_days(self, days: usize) -> Self {
        Self::from_days_since_base_date(self.days_since_base_date() - days)
    }

    /// Returns the number of days that have passed between `self` and `other`.
    ///
    /// `self + self.days_until(other) == other`
    ///
    /// # Panics
    ///
    /// This function assumes that `self` is not after `other`.
    /// If this is not the case, it will panic.
    #[must_use]
    pub const fn days_until(&self, other: Self) -> usize {
        other.days_since_base_date() - self.days_since_base_date()
    }

    /// Like [`Date::days_until`], but negative when `other` is before `self`.
    #[must_use]
    pub const fn signed_days_until(&self, other: Self) -> i64 {
        other.days_since_base_date() as i64 - self.days_since_base_date() as i64
    }

    /// Formats the date as a timestamp at midnight in UTC, for example
    /// `2024-01-01T00:00:00Z`.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        format!("{}{}", self, Self::MIDNIGHT_UTC)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
    #[error("the year {year} is after {max}", max = Year::MAX)]
    YearOutOfRange { year: Year },
}

impl Add<usize> for Date {
    type Output = Self;

    fn add(self, days: usize) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<usize> for Date {
    type Output = Self;

    fn sub(self, days: usize) -> Self::Output {
        self.sub_days(days)
    }
}

impl AddAssign<usize> for Date {
    fn add_assign(&mut self, days: usize) {
        *self = self.add_days(days);
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str, string: &str) -> Result<usize, InvalidDate> {
    // `usize::from_str` accepts a leading `+`
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidDate::ParseDateError {
            input: string.to_string(),
        });
    }

    input.parse::<usize>().map_err(|_| InvalidDate::ParseDateError {
        input: string.to_string(),
    })
}

impl FromStr for Date {
    type Err = InvalidDate;

    /// Parses `YYYY-MM-DD` or a midnight timestamp like `YYYY-MM-DDT00:00:00Z`.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let date = string.strip_suffix(Self::MIDNIGHT_UTC).unwrap_or(string);

        if let [Some(year), Some(month), Some(day)] = date.split_exact::<3>("-") {
            let year = Year::new(parse_or_err(year, string)?);
            let month = Month::try_from(parse_or_err(month, string)?).map_err(|_| {
                InvalidDate::ParseDateError {
                    input: string.to_string(),
                }
            })?;
            let day = parse_or_err(day, string)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

impl From<Date> for toml::value::Date {
    fn from(date: Date) -> Self {
        toml::value::Date {
            year: date.year().as_usize() as u16,
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

impl TryFrom<toml::value::Date> for Date {
    type Error = InvalidDate;

    fn try_from(date: toml::value::Date) -> Result<Self, Self::Error> {
        let month =
            Month::try_from(date.month as usize).map_err(|_| InvalidDate::ParseDateError {
                input: date.to_string(),
            })?;

        Self::new(Year::new(date.year as usize), month, date.day as usize)
    }
}
