use serde::*;
use std::fmt;
use std::str::FromStr;

/// Number of minutes in a day. A section may end exactly here ("24:00").
pub const MINUTES_PER_DAY: u16 = 1440;

/// A time of day expressed as minutes since midnight.
///
/// Valid values are `0..=1440`; the upper bound is inclusive so that a
/// section may run until the end of the day. Meeting intervals built from
/// two of these are half-open (`[start, end)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct MinuteOfDay(u16);

/// Errors from constructing or parsing a [`MinuteOfDay`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("time must be formatted as HH:MM, got {0:?}")]
    Format(String),
    #[error("hour out of range in {0:?}")]
    HourRange(String),
    #[error("minute out of range in {0:?}")]
    MinuteRange(String),
    #[error("minute of day {0} exceeds {MINUTES_PER_DAY}")]
    OutOfRange(u16),
}

impl MinuteOfDay {
    pub const MIDNIGHT: MinuteOfDay = MinuteOfDay(0);
    pub const END_OF_DAY: MinuteOfDay = MinuteOfDay(MINUTES_PER_DAY);

    /// Create from raw minutes since midnight.
    pub fn new(minutes: u16) -> Result<Self, TimeParseError> {
        if minutes > MINUTES_PER_DAY {
            Err(TimeParseError::OutOfRange(minutes))
        } else {
            Ok(MinuteOfDay(minutes))
        }
    }

    /// Parse a 24-hour `"HH:MM"` clock string.
    ///
    /// `"24:00"` is accepted as the end-of-day sentinel; any other hour must
    /// be `0..=23` and the minute `0..=59`.
    pub fn parse(text: &str) -> Result<Self, TimeParseError> {
        let (h, m) = text
            .split_once(':')
            .ok_or_else(|| TimeParseError::Format(text.to_string()))?;
        let hour: u16 = h
            .trim()
            .parse()
            .map_err(|_| TimeParseError::Format(text.to_string()))?;
        let minute: u16 = m
            .trim()
            .parse()
            .map_err(|_| TimeParseError::Format(text.to_string()))?;
        if hour > 24 || (hour == 24 && minute != 0) {
            return Err(TimeParseError::HourRange(text.to_string()));
        }
        if minute > 59 {
            return Err(TimeParseError::MinuteRange(text.to_string()));
        }
        Ok(MinuteOfDay(hour * 60 + minute))
    }

    /// Raw minutes since midnight.
    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for MinuteOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MinuteOfDay::parse(s)
    }
}

impl TryFrom<u16> for MinuteOfDay {
    type Error = TimeParseError;

    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        MinuteOfDay::new(minutes)
    }
}

impl From<MinuteOfDay> for u16 {
    fn from(t: MinuteOfDay) -> u16 {
        t.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let t = MinuteOfDay::parse("09:05").unwrap();
        assert_eq!(t.value(), 545);
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 5);
    }

    #[test]
    fn test_parse_midnight_and_end_of_day() {
        assert_eq!(MinuteOfDay::parse("00:00").unwrap(), MinuteOfDay::MIDNIGHT);
        assert_eq!(MinuteOfDay::parse("24:00").unwrap(), MinuteOfDay::END_OF_DAY);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            MinuteOfDay::parse("0900"),
            Err(TimeParseError::Format(_))
        ));
        assert!(matches!(
            MinuteOfDay::parse("ab:cd"),
            Err(TimeParseError::Format(_))
        ));
        assert!(matches!(
            MinuteOfDay::parse("25:00"),
            Err(TimeParseError::HourRange(_))
        ));
        assert!(matches!(
            MinuteOfDay::parse("24:01"),
            Err(TimeParseError::HourRange(_))
        ));
        assert!(matches!(
            MinuteOfDay::parse("10:75"),
            Err(TimeParseError::MinuteRange(_))
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for text in ["00:00", "08:30", "16:45", "23:59", "24:00"] {
            let t = MinuteOfDay::parse(text).unwrap();
            assert_eq!(t.to_string(), text);
        }
    }

    #[test]
    fn test_new_bounds() {
        assert!(MinuteOfDay::new(1440).is_ok());
        assert!(matches!(
            MinuteOfDay::new(1441),
            Err(TimeParseError::OutOfRange(1441))
        ));
    }

    #[test]
    fn test_ordering() {
        let a = MinuteOfDay::parse("09:00").unwrap();
        let b = MinuteOfDay::parse("10:15").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let ok: Result<MinuteOfDay, _> = serde_json::from_str("540");
        assert_eq!(ok.unwrap().value(), 540);
        let bad: Result<MinuteOfDay, _> = serde_json::from_str("2000");
        assert!(bad.is_err());
    }
}
