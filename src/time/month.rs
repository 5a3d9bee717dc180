use core::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const YEAR: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// # Panics
    ///
    /// If the number is not in `1..=12`.
    #[must_use]
    pub const fn new(number: usize) -> Self {
        Self::YEAR[number - 1]
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub(crate) const fn is_eq(&self, other: &Self) -> bool {
        self.as_usize() == other.as_usize()
    }

    /// The month after this one, december wraps around to january.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self::YEAR[self.as_usize() % Self::YEAR.len()]
    }
}

impl From<Month> for usize {
    fn from(month: Month) -> Self {
        month.as_usize()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.as_usize())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not the number of a month")]
pub struct InvalidMonthNumber(pub usize);

impl TryFrom<usize> for Month {
    type Error = InvalidMonthNumber;

    fn try_from(number: usize) -> Result<Self, Self::Error> {
        match number {
            1..=12 => Ok(Self::new(number)),
            _ => Err(InvalidMonthNumber(number)),
        }
    }
}
