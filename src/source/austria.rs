use log::trace;

use crate::source::HolidaySource;
use crate::time::{Date, DateRange, Month, WeekDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolidayEntry {
    name: &'static str,
}

impl HolidayEntry {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Returns `true` when the given date is on easter sunday.
///
/// The algorithm is based on <https://en.wikipedia.org/wiki/Date_of_Easter#Anonymous_Gregorian_algorithm>
const fn is_easter_sunday(date: Date) -> bool {
    let year = date.year().as_usize();

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = (h + l - 7 * m + 114) / 31;
    let o = (h + l - 7 * m + 114) % 31;

    Month::new(n).is_eq(&date.month()) && o + 1 == date.day()
}

/// Returns the nationwide public holiday on `date` in austria.
pub const fn get_holiday_entry(date: Date) -> Option<HolidayEntry> {
    let fixed_holidays = [
        (1, Month::January, HolidayEntry::new("Neujahr")),
        (6, Month::January, HolidayEntry::new("Heilige Drei Könige")),
        (1, Month::May, HolidayEntry::new("Staatsfeiertag")),
        (15, Month::August, HolidayEntry::new("Mariä Himmelfahrt")),
        (26, Month::October, HolidayEntry::new("Nationalfeiertag")),
        (1, Month::November, HolidayEntry::new("Allerheiligen")),
        (8, Month::December, HolidayEntry::new("Mariä Empfängnis")),
        (25, Month::December, HolidayEntry::new("Christtag")),
        (26, Month::December, HolidayEntry::new("Stefanitag")),
    ];

    let mut i = 0;
    while i < fixed_holidays.len() {
        let (day, month, entry) = fixed_holidays[i];

        if date.day() == day && date.month().is_eq(&month) {
            return Some(entry);
        }

        i += 1;
    }

    let week_day = date.week_day();

    if week_day.is_eq(&WeekDay::Monday) && is_easter_sunday(date.sub_days(1)) {
        return Some(HolidayEntry::new("Ostermontag"));
    }

    if week_day.is_eq(&WeekDay::Thursday) && is_easter_sunday(date.sub_days(39)) {
        return Some(HolidayEntry::new("Christi Himmelfahrt"));
    }

    if week_day.is_eq(&WeekDay::Monday) && is_easter_sunday(date.sub_days(50)) {
        return Some(HolidayEntry::new("Pfingstmontag"));
    }

    if week_day.is_eq(&WeekDay::Thursday) && is_easter_sunday(date.sub_days(60)) {
        return Some(HolidayEntry::new("Fronleichnam"));
    }

    None
}

pub const fn is_holiday(date: Date) -> bool {
    get_holiday_entry(date).is_some()
}

/// The nationwide public holidays of austria, calculated without asking
/// any calendar service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AustrianHolidays;

impl HolidaySource for AustrianHolidays {
    fn holidays(&self, range: DateRange) -> anyhow::Result<Vec<Date>> {
        Ok(range
            .into_iter()
            .filter_map(|date| {
                let entry = get_holiday_entry(date)?;
                trace!("{} is {}", date, entry.name());
                Some(date)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_is_holiday() {
        let holidays = [
            date!(2024:01:01),
            date!(2024:01:06),
            date!(2024:04:01),
            date!(2024:05:01),
            date!(2024:05:09),
            date!(2024:05:20),
            date!(2024:05:30),
            date!(2024:08:15),
            date!(2024:10:26),
            date!(2024:11:01),
            date!(2024:12:08),
            date!(2024:12:25),
            date!(2024:12:26),
        ];

        let range = DateRange::new(date!(2024:01:01), date!(2024:12:31)).unwrap();
        for date in range {
            assert_eq!(
                is_holiday(date),
                holidays.contains(&date),
                "date {} should {}be a holiday",
                date,
                if holidays.contains(&date) { "" } else { "not " }
            );
        }

        assert_eq!(AustrianHolidays.holidays(range).unwrap(), holidays.to_vec());
    }

    #[test]
    fn test_holiday_names() {
        assert_eq!(
            get_holiday_entry(date!(2025:04:21)).map(|entry| entry.name()),
            Some("Ostermontag")
        );
        assert_eq!(
            get_holiday_entry(date!(2025:06:19)).map(|entry| entry.name()),
            Some("Fronleichnam")
        );
        assert_eq!(get_holiday_entry(date!(2025:04:20)), None);
    }

    #[test]
    fn test_is_easter_sunday() {
        for date in [
            date!(2017:04:16),
            date!(2018:04:01),
            date!(2019:04:21),
            date!(2020:04:12),
            date!(2021:04:04),
            date!(2022:04:17),
            date!(2023:04:09),
            date!(2024:03:31),
            date!(2025:04:20),
            date!(2026:04:05),
            date!(2027:03:28),
            date!(2028:04:16),
        ] {
            assert!(is_easter_sunday(date), "date {} should be easter sunday", date);
        }
    }
}
