//! Billing period kinds and resolved date ranges
//!
//! A period kind anchors a monthly billing cycle to a day of the month.
//! `FromFirst` means a plain calendar month; the other kinds run from day N
//! of the previous month through day N-1 of the current month.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The day a monthly billing cycle is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PeriodKind {
    /// Calendar month (default)
    #[default]
    #[serde(rename = "from1st")]
    FromFirst,

    /// From the 5th of the previous month through the 4th of the current
    #[serde(rename = "from5th")]
    FromFifth,

    /// From the 10th through the 9th
    #[serde(rename = "from10th")]
    FromTenth,

    /// From the 15th through the 14th
    #[serde(rename = "from15th")]
    FromFifteenth,

    /// From the 20th through the 19th
    #[serde(rename = "from20th")]
    FromTwentieth,

    /// From the 25th through the 24th
    #[serde(rename = "from25th")]
    FromTwentyFifth,
}

impl PeriodKind {
    /// Every kind, in anchor-day order
    pub const ALL: [PeriodKind; 6] = [
        PeriodKind::FromFirst,
        PeriodKind::FromFifth,
        PeriodKind::FromTenth,
        PeriodKind::FromFifteenth,
        PeriodKind::FromTwentieth,
        PeriodKind::FromTwentyFifth,
    ];

    /// The day of the month the cycle starts on
    pub fn anchor_day(&self) -> u32 {
        match self {
            PeriodKind::FromFirst => 1,
            PeriodKind::FromFifth => 5,
            PeriodKind::FromTenth => 10,
            PeriodKind::FromFifteenth => 15,
            PeriodKind::FromTwentieth => 20,
            PeriodKind::FromTwentyFifth => 25,
        }
    }

    /// Whether this kind resolves to a plain calendar month
    pub fn is_calendar_month(&self) -> bool {
        matches!(self, PeriodKind::FromFirst)
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PeriodKind::FromFirst => "from1st",
            PeriodKind::FromFifth => "from5th",
            PeriodKind::FromTenth => "from10th",
            PeriodKind::FromFifteenth => "from15th",
            PeriodKind::FromTwentieth => "from20th",
            PeriodKind::FromTwentyFifth => "from25th",
        };
        f.write_str(label)
    }
}

impl FromStr for PeriodKind {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "from1st" => Ok(PeriodKind::FromFirst),
            "from5th" => Ok(PeriodKind::FromFifth),
            "from10th" => Ok(PeriodKind::FromTenth),
            "from15th" => Ok(PeriodKind::FromFifteenth),
            "from20th" => Ok(PeriodKind::FromTwentieth),
            "from25th" => Ok(PeriodKind::FromTwentyFifth),
            other => Err(PeriodParseError::UnknownKind(other.to_string())),
        }
    }
}

/// Error type for period kind parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    UnknownKind(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::UnknownKind(s) => write!(f, "Unknown period kind: {}", s),
        }
    }
}

impl std::error::Error for PeriodParseError {}

/// An inclusive window of time
///
/// When derived from a day boundary, `end` is normalized to the last
/// representable moment of its day (23:59:59.999), so `date <= end`
/// behaves as "through the end of that day".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First instant of the window (inclusive)
    pub start: NaiveDateTime,

    /// Last instant of the window (inclusive)
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Create a range from two inclusive bounds
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Check if an instant falls within the range (inclusive on both ends)
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_anchor_days() {
        let days: Vec<u32> = PeriodKind::ALL.iter().map(|k| k.anchor_day()).collect();
        assert_eq!(days, vec![1, 5, 10, 15, 20, 25]);
    }

    #[test]
    fn test_parse_round_trip() {
        for kind in PeriodKind::ALL {
            let parsed: PeriodKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "from3rd".parse::<PeriodKind>().unwrap_err();
        assert_eq!(err, PeriodParseError::UnknownKind("from3rd".to_string()));
    }

    #[test]
    fn test_serde_uses_raw_values() {
        let json = serde_json::to_string(&PeriodKind::FromFifth).unwrap();
        assert_eq!(json, "\"from5th\"");
        let back: PeriodKind = serde_json::from_str("\"from25th\"").unwrap();
        assert_eq!(back, PeriodKind::FromTwentyFifth);
    }

    #[test]
    fn test_default_is_calendar_month() {
        assert!(PeriodKind::default().is_calendar_month());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 5, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap();
        let range = DateRange::new(start, end);

        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(start - chrono::Duration::milliseconds(1)));
        assert!(!range.contains(end + chrono::Duration::milliseconds(1)));
    }

    #[test]
    fn test_range_serializes_to_iso_strings() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 5, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let json = serde_json::to_string(&DateRange::new(start, end)).unwrap();
        assert_eq!(
            json,
            "{\"start\":\"2024-05-01T00:00:00\",\"end\":\"2024-05-31T23:59:59\"}"
        );
    }
}
