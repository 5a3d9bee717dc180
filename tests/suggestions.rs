//! Runs the whole pipeline from the holidays to the suggestions.

use vacation_planner::compute_suggestions;
use vacation_planner::date;
use vacation_planner::planner::{
    DuplicatePolicy, Planner, PlannerOptions, Run, RunStrategy, Suggestion,
};
use vacation_planner::time::DateRange;

use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_single_holiday_without_run() {
    let holidays = common::dates(&["2024-01-01"]);

    assert_eq!(
        compute_suggestions(&holidays, date!(2024:01:01), date!(2024:01:07), 3, 5),
        Ok(vec![])
    );
}

#[test]
fn test_short_runs_next_to_a_holiday() {
    let holidays = common::dates(&["2024-05-01"]);
    let range = DateRange::new(date!(2024:04:27), date!(2024:05:05)).unwrap();
    let planner = Planner::new(PlannerOptions::default().with_min_run_length(2));

    assert_eq!(
        planner.runs(&holidays, range),
        vec![
            Run::spanning(date!(2024:04:27), date!(2024:04:28)),
            Run::spanning(date!(2024:05:04), date!(2024:05:05)),
        ]
    );

    // the weekends are 6 days apart, one more than the default allows
    assert_eq!(planner.suggestions(&holidays, range), Ok(vec![]));

    assert_eq!(
        compute_suggestions(&holidays, range.start(), range.end(), 2, 6),
        Ok(vec![Suggestion::new(
            date!(2024:04:27),
            date!(2024:05:05),
            10,
            5
        )])
    );
}

#[test]
fn test_two_weekends() {
    // the second weekend starts 6 days after the first one ends
    assert_eq!(
        compute_suggestions(&[], date!(2024:06:01), date!(2024:06:09), 2, 5),
        Ok(vec![])
    );
    assert_eq!(
        compute_suggestions(&[], date!(2024:06:01), date!(2024:06:09), 2, 6),
        Ok(vec![Suggestion::new(
            date!(2024:06:01),
            date!(2024:06:09),
            10,
            5
        )])
    );
}

#[test]
fn test_christmas() {
    let holidays = common::dates(&["2024-12-25", "2024-12-26", "2025-01-01", "2025-01-06"]);

    // 12-21..12-22, 12-25..12-26, 12-28..12-29, 01-04..01-06
    let runs = Planner::new(PlannerOptions::default().with_min_run_length(2))
        .runs(&holidays, DateRange::new(date!(2024:12:21), date!(2025:01:06)).unwrap());
    assert_eq!(
        runs,
        vec![
            Run::spanning(date!(2024:12:21), date!(2024:12:22)),
            Run::spanning(date!(2024:12:25), date!(2024:12:26)),
            Run::spanning(date!(2024:12:28), date!(2024:12:29)),
            Run::spanning(date!(2025:01:04), date!(2025:01:06)),
        ]
    );

    assert_eq!(
        compute_suggestions(&holidays, date!(2024:12:21), date!(2025:01:06), 2, 6),
        Ok(vec![
            Suggestion::new(date!(2024:12:21), date!(2024:12:26), 7, 2),
            Suggestion::new(date!(2024:12:25), date!(2024:12:29), 6, 1),
            Suggestion::new(date!(2024:12:28), date!(2025:01:06), 11, 5),
        ])
    );
}

#[test]
fn test_holiday_on_a_weekend() {
    let holidays = common::dates(&["2024-06-01"]);
    let range = DateRange::new(date!(2024:06:01), date!(2024:06:02)).unwrap();

    let keep = Planner::new(PlannerOptions::default());
    assert_eq!(
        keep.free_days(&holidays, range).into_inner(),
        common::dates(&["2024-06-01", "2024-06-01", "2024-06-02"])
    );

    let merge =
        Planner::new(PlannerOptions::default().with_duplicates(DuplicatePolicy::Merge));
    assert_eq!(
        merge.free_days(&holidays, range).into_inner(),
        common::dates(&["2024-06-01", "2024-06-02"])
    );

    // the duplicate does not make the weekend any longer
    assert_eq!(keep.runs(&holidays, range), vec![]);
    assert_eq!(merge.runs(&holidays, range), vec![]);
}

#[test]
fn test_candidate_runs() {
    let range = DateRange::new(date!(2024:05:01), date!(2024:05:05)).unwrap();
    let holidays = common::dates(&["2024-05-01", "2024-05-02", "2024-05-03"]);

    let planner = Planner::new(
        PlannerOptions::default()
            .with_min_run_length(3)
            .with_runs(RunStrategy::Candidates),
    );

    assert_eq!(
        planner.runs(&holidays, range),
        vec![
            Run::spanning(date!(2024:05:01), date!(2024:05:05)),
            Run::spanning(date!(2024:05:02), date!(2024:05:05)),
            Run::spanning(date!(2024:05:03), date!(2024:05:05)),
        ]
    );

    // overlapping runs are never bridged
    assert_eq!(planner.suggestions(&holidays, range), Ok(vec![]));
}

#[test]
fn test_invalid_range() {
    assert!(compute_suggestions(&[], date!(2024:12:31), date!(2024:01:01), 3, 5).is_err());
}

#[test]
fn test_is_deterministic() {
    let holidays = common::dates(&["2024-05-01", "2024-05-09", "2024-05-20", "2024-05-30"]);

    let first = compute_suggestions(&holidays, date!(2024:01:01), date!(2024:12:31), 2, 5);
    let second = compute_suggestions(&holidays, date!(2024:01:01), date!(2024:12:31), 2, 5);

    assert!(first.is_ok());
    assert_eq!(first, second);
}
