use derive_more::Display;

use crate::time::Month;
use crate::{iter_const, unreachable_unchecked};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Year(usize);

impl Year {
    /// The last year that can be written with four digits.
    pub const MAX: Self = Self(9999);

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    #[must_use]
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        !self.is_common_year()
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// The number of days that passed in this year before the start of each month.
    ///
    /// The entry at `i` is the number of days in the first `i` months, so the
    /// first entry is always `0` and the last entry equals [`Year::days`].
    #[must_use]
    pub const fn cumulative_days(&self) -> [usize; 13] {
        let mut result = [0; 13];

        iter_const!(for i in 1,..13 => {
            result[i] = result[i - 1] + self.number_of_days_in_month(Month::new(i));
        });

        result
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// The number of days between 0000-01-01 and the first day of this year.
    ///
    /// The year 0 is a leap year in the proleptic gregorian calendar, so every
    /// year `y > 0` is preceded by `ceil(y / 4) - ceil(y / 100) + ceil(y / 400)`
    /// leap years.
    #[must_use]
    pub(super) const fn days_since_base_date(&self) -> usize {
        let year = self.as_usize();

        365 * year + (year + 3) / 4 - (year + 99) / 100 + (year + 399) / 400
    }

    #[must_use]
    pub(super) const fn from_days_since_base_date(days: usize) -> Self {
        // every year has between 365 and 366 days:
        let lower_year = days / 366;
        let upper_year = days / 365;

        iter_const!(for year in lower_year,..upper_year + 1 => {
            let this_year = Year::new(year);

            if this_year.days_since_base_date() <= days
                && this_year.next().days_since_base_date() > days
            {
                return this_year;
            }
        });

        unreachable_unchecked!("the year should always be found!")
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Year> for usize {
    fn from(value: Year) -> Self {
        value.as_usize()
    }
}
