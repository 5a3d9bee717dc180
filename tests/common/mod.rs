use vacation_planner::time::Date;

#[allow(dead_code)]
pub fn dates(dates: &[&str]) -> Vec<Date> {
    dates
        .iter()
        .map(|date| date.parse::<Date>().expect("date should be valid"))
        .collect()
}

/// A calendar event list with an all-day event for every date.
#[allow(dead_code)]
pub fn make_events(dates: &[&str]) -> String {
    let items = dates
        .iter()
        .map(|date| {
            format!(
                "{{\"summary\": \"holiday\", \"start\": {{\"date\": \"{}\"}}}}",
                date
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{{\"summary\": \"Holidays\", \"nextSyncToken\": \"token\", \"items\": [{}]}}",
        items
    )
}

#[allow(dead_code)]
pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");
}
