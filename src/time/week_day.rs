use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    const WEEK: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub(crate) const fn is_eq(&self, other: &Self) -> bool {
        self.as_usize() == other.as_usize()
    }

    /// Returns the week day that is `days` after `self`.
    #[must_use]
    pub const fn add_const(self, days: usize) -> Self {
        Self::WEEK[(self.as_usize() - 1 + days % 7) % 7]
    }

    /// Saturdays and Sundays are free days for everyone.
    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        self.is_eq(&Self::Saturday) || self.is_eq(&Self::Sunday)
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWeekDayNumber;

impl TryFrom<usize> for WeekDay {
    type Error = InvalidWeekDayNumber;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1..=7 => Ok(Self::WEEK[value - 1]),
            _ => Err(InvalidWeekDayNumber),
        }
    }
}
