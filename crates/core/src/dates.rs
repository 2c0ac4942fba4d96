//! Timezone-aware calendar keys for sales reporting.
//!
//! All keys are derived by converting the instant into the store's
//! timezone first - truncating the UTC timestamp would put late-evening
//! sales on the wrong day.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

/// Canonical `YYYY-MM-DD` key for the calendar date `instant` falls on in `tz`.
#[must_use]
pub fn date_key(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%Y-%m-%d").to_string()
}

/// `YYYY-MM` month key for `instant` in `tz`.
#[must_use]
pub fn month_key(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%Y-%m").to_string()
}

/// Month key of the month before `instant`'s month in `tz`.
#[must_use]
pub fn previous_month_key(instant: DateTime<Utc>, tz: Tz) -> String {
    let local = instant.with_timezone(&tz);
    let (year, month) = if local.month() == 1 {
        (local.year() - 1, 12)
    } else {
        (local.year(), local.month() - 1)
    };
    format!("{year:04}-{month:02}")
}

/// Short chart-axis label ("lun 5") for a `YYYY-MM-DD` key.
///
/// The date is anchored at midday UTC before taking the weekday, so a
/// display timezone a few hours either side of UTC cannot roll the label
/// onto a neighboring day. Returns `None` for a malformed key.
#[must_use]
pub fn short_day_label(key: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()?;
    let midday = date.and_hms_opt(12, 0, 0)?.and_utc();
    Some(format!("{} {}", weekday_abbrev(midday.weekday()), midday.day()))
}

const fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lun",
        Weekday::Tue => "mar",
        Weekday::Wed => "mié",
        Weekday::Thu => "jue",
        Weekday::Fri => "vie",
        Weekday::Sat => "sáb",
        Weekday::Sun => "dom",
    }
}
