use core::fmt;
use core::iter::FusedIterator;

use thiserror::Error;

use crate::time::Date;

/// A non-empty, inclusive range of dates `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the range starts on {start}, which is after its end {end}")]
pub struct InvalidRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Result<Self, InvalidRange> {
        if start > end {
            return Err(InvalidRange { start, end });
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// The number of days in the range, both ends included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.start.days_until(self.end) + 1
    }

    #[must_use]
    pub fn contains(&self, date: &Date) -> bool {
        self.start <= *date && *date <= self.end
    }

    #[must_use]
    pub fn iter(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over every date of a [`DateRange`] in chronological order.
#[derive(Debug, Clone)]
#[must_use]
pub struct Days {
    next: Option<Date>,
    end: Date,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = (current < self.end).then(|| current + 1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(0, |next| next.days_until(self.end) + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}
