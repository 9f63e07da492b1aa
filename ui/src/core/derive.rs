//! Calendar columns derived from the parsed timestamp.
//!
//! Computed once per row immediately after parsing, before any filtering,
//! so they are always consistent with the timestamp column.

use time::{PrimitiveDateTime, Weekday};

/// Hour-of-day (0–23) and weekday for an event timestamp. No timezone
/// conversion happens here: an RFC 3339 timestamp keeps the clock time of
/// its own offset.
pub fn time_features(timestamp: &PrimitiveDateTime) -> (u8, Weekday) {
    (timestamp.hour(), timestamp.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn hour_and_weekday_match_the_timestamp() {
        let (hour, weekday) = time_features(&datetime!(2024-07-05 23:59:59));
        assert_eq!(hour, 23);
        assert_eq!(weekday, Weekday::Friday);

        let (hour, weekday) = time_features(&datetime!(2024-07-07 00:00:00));
        assert_eq!(hour, 0);
        assert_eq!(weekday, Weekday::Sunday);
    }
}
