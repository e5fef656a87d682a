use jiff::civil::DateTime;
use thiserror::Error;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Error)]
#[error("Timestamp {input:?} does not match {TIMESTAMP_FORMAT}: {source}")]
pub struct TimestampFormatError {
    input: String,
    #[source]
    source: jiff::Error,
}

/// Minutes since midnight for a solver time-window timestamp, with
/// midnight itself mapped to 1440 (end of day).
pub fn minutes_from_timestamp(timestamp: &str) -> Result<u32, TimestampFormatError> {
    let parsed =
        DateTime::strptime(TIMESTAMP_FORMAT, timestamp).map_err(|source| TimestampFormatError {
            input: timestamp.to_string(),
            source,
        })?;

    let minutes = parsed.hour() as u32 * 60 + parsed.minute() as u32;

    if minutes == 0 {
        return Ok(1440);
    }

    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(minutes_from_timestamp("2026-08-29T09:30:00").unwrap(), 570);
        assert_eq!(minutes_from_timestamp("2026-08-29T00:01:59").unwrap(), 1);
    }

    #[test]
    fn test_midnight_maps_to_end_of_day() {
        assert_eq!(minutes_from_timestamp("2026-08-29T00:00:00").unwrap(), 1440);
        assert_eq!(minutes_from_timestamp("2026-08-29T00:00:59").unwrap(), 1440);
    }

    #[test]
    fn test_format_mismatch_is_an_explicit_error() {
        let result = minutes_from_timestamp("29/08/2026 09:30");
        assert!(result.is_err());
    }
}
