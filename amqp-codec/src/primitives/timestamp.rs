use chrono::{DateTime, TimeZone, Utc};

/// An absolute point in time.
///
/// Wire encoding: a 64-bit two's-complement signed integer giving milliseconds since the
/// Unix epoch (encoding name `ms64`, code `0x83`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a `Timestamp` from a millisecond offset from the Unix epoch.
    pub fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    /// Returns the millisecond offset from the Unix epoch.
    pub fn milliseconds(&self) -> i64 {
        self.0
    }

    /// Splits the millisecond count into `(seconds, nanoseconds)` since the epoch,
    /// preserving sign for instants before 1970.
    pub fn as_secs_and_nanos(&self) -> (i64, u32) {
        let millis = self.0;
        let secs = millis.div_euclid(1000);
        let nanos = (millis.rem_euclid(1000) as u32) * 1_000_000;
        (secs, nanos)
    }

    /// Converts to a [`chrono::DateTime<Utc>`].
    pub fn to_datetime(&self) -> DateTime<Utc> {
        let (secs, nanos) = self.as_secs_and_nanos();
        Utc.timestamp_opt(secs, nanos)
            .single()
            .expect("millisecond-since-epoch values always map to a single UTC instant")
    }
}

impl From<i64> for Timestamp {
    fn from(val: i64) -> Self {
        Self(val)
    }
}

impl From<Timestamp> for i64 {
    fn from(val: Timestamp) -> Self {
        val.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(val: DateTime<Utc>) -> Self {
        Self(val.timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_round_trips() {
        let ts = Timestamp::from_milliseconds(0);
        assert_eq!(ts.as_secs_and_nanos(), (0, 0));
        assert_eq!(ts.to_datetime().timestamp_millis(), 0);
    }

    #[test]
    fn negative_offset_preserves_sign() {
        let ts = Timestamp::from_milliseconds(-1500);
        let (secs, nanos) = ts.as_secs_and_nanos();
        assert_eq!(secs, -2);
        assert_eq!(nanos, 500_000_000);
        assert_eq!(ts.to_datetime().timestamp_millis(), -1500);
    }

    #[test]
    fn positive_offset_round_trips_through_datetime() {
        let ts = Timestamp::from_milliseconds(1_700_000_123_456);
        assert_eq!(ts.to_datetime().timestamp_millis(), 1_700_000_123_456);
    }
}
