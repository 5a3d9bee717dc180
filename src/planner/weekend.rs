use crate::planner::PlannerError;
use crate::time::{Date, DateRange};

/// Returns every saturday and sunday in `range`, in chronological order.
pub fn weekends_in(range: DateRange) -> impl Iterator<Item = Date> + Clone {
    range.into_iter().filter(Date::is_weekend)
}

/// Collects the weekend days between `start` and `end`, both included.
///
/// # Errors
///
/// If `start` is after `end`.
pub fn weekends(start: Date, end: Date) -> Result<Vec<Date>, PlannerError> {
    let range = DateRange::new(start, end)?;

    Ok(weekends_in(range).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;
    use crate::time::{InvalidRange, WeekDay};

    #[test]
    fn test_first_week_of_2024() {
        assert_eq!(
            weekends(date!(2024:01:01), date!(2024:01:07)),
            Ok(vec![date!(2024:01:06), date!(2024:01:07)])
        );
    }

    #[test]
    fn test_without_weekend() {
        assert_eq!(weekends(date!(2024:01:01), date!(2024:01:05)), Ok(vec![]));
        assert_eq!(weekends(date!(2024:01:03), date!(2024:01:03)), Ok(vec![]));
    }

    #[test]
    fn test_single_day_range() {
        assert_eq!(
            weekends(date!(2024:01:06), date!(2024:01:06)),
            Ok(vec![date!(2024:01:06)])
        );
    }

    #[test]
    fn test_invalid_range() {
        assert_eq!(
            weekends(date!(2024:01:07), date!(2024:01:01)),
            Err(PlannerError::InvalidRange(InvalidRange {
                start: date!(2024:01:07),
                end: date!(2024:01:01),
            }))
        );
    }

    #[test]
    fn test_every_weekend_day_is_found() {
        let range = DateRange::new(date!(2023:11:15), date!(2025:03:03)).unwrap();
        let weekends = weekends_in(range).collect::<Vec<_>>();

        for date in range {
            let is_weekend = matches!(date.week_day(), WeekDay::Saturday | WeekDay::Sunday);
            assert_eq!(
                weekends.contains(&date),
                is_weekend,
                "{} is a {}",
                date,
                date.week_day()
            );
        }

        assert!(weekends.windows(2).all(|pair| pair[0] < pair[1]));
        // 2024 is a leap year starting on a monday
        assert_eq!(
            weekends
                .iter()
                .filter(|date| date.year().as_usize() == 2024)
                .count(),
            104
        );
    }
}
