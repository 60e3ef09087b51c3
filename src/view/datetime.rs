//! Date-time marshalling between form inputs and the transfer format.

use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone, Utc};
use thiserror::Error;

/// Format of a `datetime-local` form input.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisplayTimeError {
    #[error("'{0}' is not a date-time in YYYY-MM-DDTHH:mm form")]
    Malformed(String),

    #[error("'{0}' does not exist or is ambiguous in the local time zone")]
    NotRepresentable(String),
}

/// Renders a transfer value in `tz` for display in a form input.
pub fn to_display<Tz>(value: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}

/// Parses a form input entered in `tz`. Blank input means no value.
pub fn from_display<Tz: TimeZone>(
    input: &str,
    tz: &Tz,
) -> Result<Option<DateTime<Utc>>, DisplayTimeError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let naive = NaiveDateTime::parse_from_str(input, DISPLAY_FORMAT)
        .map_err(|_| DisplayTimeError::Malformed(input.to_string()))?;
    let local = tz
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| DisplayTimeError::NotRepresentable(input.to_string()))?;
    Ok(Some(local.with_timezone(&Utc)))
}

/// Pre-filled value for a new record: the start of `now`'s day in `tz`.
pub fn default_display<Tz>(now: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.with_timezone(tz)
        .date_naive()
        .and_time(NaiveTime::MIN)
        .format(DISPLAY_FORMAT)
        .to_string()
}
