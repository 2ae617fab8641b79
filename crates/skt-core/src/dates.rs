//! Date parsing shared by payload decoding and form validation.
//!
//! The backend stores study sessions as datetimes but the client works at
//! day granularity, so every date accepted here collapses to a `NaiveDate`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::errors::CoreError;

/// Wire format for calendar days.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse `YYYY-MM-DD`, a naive ISO datetime, or an RFC 3339 timestamp into
/// its calendar day.
///
/// # Errors
///
/// Returns [`CoreError::InvalidDate`] when none of the formats match.
pub fn parse_day(raw: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, DAY_FORMAT) {
        return Ok(day);
    }
    if let Ok(datetime) = trimmed.parse::<NaiveDateTime>() {
        return Ok(datetime.date());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
        return Ok(datetime.date());
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|datetime| datetime.date_naive())
        .map_err(|_| CoreError::InvalidDate(raw.to_string()))
}

/// Serde adapter: serialize as `YYYY-MM-DD`, deserialize with [`parse_day`].
pub mod day {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&day.format(super::DAY_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_day(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional server timestamps (`created_at`,
/// `updated_at`). Unparseable values become `None` rather than failing the
/// whole payload.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.collect_str(&ts.format("%Y-%m-%dT%H:%M:%S%.f")),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|raw| {
            raw.parse::<NaiveDateTime>()
                .ok()
                .or_else(|| DateTime::parse_from_rfc3339(&raw).ok().map(|dt| dt.naive_utc()))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_plain_day() {
        assert_eq!(parse_day("2025-03-09").unwrap(), ymd(2025, 3, 9));
    }

    #[test]
    fn parses_naive_datetime_variants() {
        assert_eq!(parse_day("2025-03-09T14:30:00").unwrap(), ymd(2025, 3, 9));
        assert_eq!(parse_day("2025-03-09T14:30:00.123456").unwrap(), ymd(2025, 3, 9));
        assert_eq!(parse_day("2025-03-09T14:30").unwrap(), ymd(2025, 3, 9));
    }

    #[test]
    fn parses_rfc3339() {
        assert_eq!(parse_day("2025-03-09T23:00:00+02:00").unwrap(), ymd(2025, 3, 9));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_day("yesterday"),
            Err(CoreError::InvalidDate("yesterday".to_string()))
        );
    }
}
