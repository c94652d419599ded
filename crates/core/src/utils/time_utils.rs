use chrono::{DateTime, Months, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::errors::{Result, ValidationError};

/// Default timezone used to decide what "today" is for timeframe cutoffs and export names.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Converts a UTC instant to a calendar date in the given timezone.
///
/// This is the single place where instants become dashboard dates; use it
/// whenever a cutoff or filename needs "today".
pub fn date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's date in the given timezone.
pub fn today_in(tz: Tz) -> NaiveDate {
    date_from_utc(Utc::now(), tz)
}

/// Convenience function that uses the default timezone.
pub fn today() -> NaiveDate {
    today_in(DEFAULT_TIMEZONE)
}

/// Parses an IANA timezone name such as `Europe/Paris`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim().parse::<Tz>().map_err(|e| {
        ValidationError::InvalidInput(format!("Invalid timezone '{}': {}", name, e)).into()
    })
}

/// Steps back a number of calendar months, clamping the day to the target month's length.
///
/// `2024-03-31` minus one month is `2024-02-29`. Dates that would underflow
/// chrono's supported range saturate to `NaiveDate::MIN`.
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}
