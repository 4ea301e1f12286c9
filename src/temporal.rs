//! Date and time parsing shared by the decoder and encoder

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

/// Offset-aware layouts tried after RFC 3339
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f %z",
];

/// Wall-clock layouts without an offset
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Output layout for encoded `datetime`/`timestamp` values
pub(crate) const DATE_TIME_WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIME_DISPLAY_FORMAT: &str = "%H:%M:%S";
pub(crate) const DATE_TIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// A parsed temporal value, keeping whether the source carried an offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Parsed {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl Parsed {
    /// Wall-clock time as written, offset dropped
    pub(crate) fn wall_clock(self) -> NaiveDateTime {
        match self {
            Parsed::Zoned(value) => value.naive_local(),
            Parsed::Naive(value) => value,
        }
    }

    /// Instant in `offset`; naive values are taken to be in `offset` already
    pub(crate) fn in_offset(self, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        match self {
            Parsed::Zoned(value) => Some(value.with_timezone(&offset)),
            Parsed::Naive(value) => offset.from_local_datetime(&value).single(),
        }
    }
}

/// Parse an ISO-8601 style date, date-time or zoned date-time
pub(crate) fn parse_iso(text: &str) -> Option<Parsed> {
    let text = text.trim();

    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Some(Parsed::Zoned(value));
    }
    for format in ZONED_FORMATS {
        if let Ok(value) = DateTime::parse_from_str(text, format) {
            return Some(Parsed::Zoned(value));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Parsed::Naive(value));
        }
    }
    NaiveDate::parse_from_str(text, DATE_DISPLAY_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(Parsed::Naive)
}

/// Parse a bare time of day by anchoring it to `anchor`
pub(crate) fn parse_time_of_day(text: &str, anchor: NaiveDate) -> Option<NaiveDateTime> {
    let anchored = format!("{} {}", anchor.format(DATE_DISPLAY_FORMAT), text.trim());
    NaiveDateTime::parse_from_str(&anchored, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&anchored, "%Y-%m-%d %H:%M"))
        .ok()
}

/// Epoch milliseconds as sent for numeric timestamps
pub(crate) fn from_epoch_millis(millis: i64) -> Option<Parsed> {
    DateTime::from_timestamp_millis(millis).map(|value| Parsed::Zoned(value.fixed_offset()))
}
