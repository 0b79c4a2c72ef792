use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Human label for how long ago a posting went up ("Yesterday", "3 weeks ago", ...).
pub fn posted_label(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (now - published).num_milliseconds().abs();
    // Partial days round up, so anything but the exact instant is at least a day.
    let days = (diff_ms + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;

    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => {
            let weeks = days / 7;
            format!("{weeks} {} ago", if weeks == 1 { "week" } else { "weeks" })
        }
        _ => published.format("%b %-d, %Y").to_string(),
    }
}
