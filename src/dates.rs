use chrono::{Local, Months, NaiveDate, NaiveDateTime};

/// Months subtracted from "now" to build the default report start date.
const DEFAULT_REPORT_SPAN_MONTHS: u32 = 6;

/// Checks `input` against the configured chrono pattern.
///
/// Patterns carrying a time component validate as date-times; date-only
/// patterns validate as plain dates. The raw string is what gets sent to the
/// API, so parseability is all the client cares about.
pub fn matches_format(input: &str, format: &str) -> bool {
    NaiveDateTime::parse_from_str(input, format).is_ok()
        || NaiveDate::parse_from_str(input, format).is_ok()
}

/// Default report start: six months before now, rendered with `format`.
pub fn default_report_start(format: &str) -> String {
    let now = Local::now().naive_local();
    let start = now
        .checked_sub_months(Months::new(DEFAULT_REPORT_SPAN_MONTHS))
        .unwrap_or(now);
    start.format(format).to_string()
}
