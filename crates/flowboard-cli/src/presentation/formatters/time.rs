use chrono::{DateTime, TimeZone};

/// Age label for a record's `lastUpdated` timestamp (Unix seconds).
///
/// Counts whole calendar days between the date of `now` and the date of the
/// timestamp, both in `now`'s time zone.
pub fn format_date_relative<Tz: TimeZone>(timestamp_secs: i64, now: &DateTime<Tz>) -> String {
    let tz = now.timezone();
    let Some(then) = tz.timestamp_opt(timestamp_secs, 0).earliest() else {
        return String::new();
    };

    let days = now
        .date_naive()
        .signed_duration_since(then.date_naive())
        .num_days();

    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        4..=6 => "This Week".to_string(),
        n => format!("{} Days Ago", n),
    }
}
