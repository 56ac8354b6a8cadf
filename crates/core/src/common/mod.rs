use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// # Summary
/// Candle bucket granularity accepted by the chart and analysis endpoints.
///
/// # Invariants
/// - Only `1m`, `5m`, `15m`, `1h`, `4h` and `1d` exist. Anything else is rejected
///   by `FromStr` before a request can be built.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Range {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    Minute15,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "1d")]
    Day1,
}

impl Range {
    /// Every supported range, in selector order.
    pub const ALL: [Range; 6] = [
        Range::Minute1,
        Range::Minute5,
        Range::Minute15,
        Range::Hour1,
        Range::Hour4,
        Range::Day1,
    ];

    /// Wire form used in the `range` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Range::Minute1 => "1m",
            Range::Minute5 => "5m",
            Range::Minute15 => "15m",
            Range::Hour1 => "1h",
            Range::Hour4 => "4h",
            Range::Day1 => "1d",
        }
    }

    /// Bucket length in minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            Range::Minute1 => 1,
            Range::Minute5 => 5,
            Range::Minute15 => 15,
            Range::Hour1 => 60,
            Range::Hour4 => 240,
            Range::Day1 => 1440,
        }
    }
}

/// # Summary
/// Raised when a range selection is outside the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Unsupported range: {0:?}")]
    Unsupported(String),
}

impl FromStr for Range {
    type Err = RangeError;

    /// Exact, case-sensitive match on the wire form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| RangeError::Unsupported(s.to_string()))
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_ranges() {
        for wire in ["1m", "5m", "15m", "1h", "4h", "1d"] {
            let range: Range = wire.parse().unwrap();
            assert_eq!(range.to_string(), wire);
        }
    }

    #[test]
    fn test_reject_unsupported_ranges() {
        for wire in ["", "1w", "30m", "1D", " 1d", "1d ", "day1"] {
            assert_eq!(
                wire.parse::<Range>(),
                Err(RangeError::Unsupported(wire.to_string()))
            );
        }
    }

    #[test]
    fn test_range_minutes() {
        let minutes: Vec<u32> = Range::ALL.iter().map(Range::minutes).collect();
        assert_eq!(minutes, vec![1, 5, 15, 60, 240, 1440]);
    }

    #[test]
    fn test_range_serde_uses_wire_form() {
        assert_eq!(serde_json::to_string(&Range::Hour4).unwrap(), "\"4h\"");
        let parsed: Range = serde_json::from_str("\"15m\"").unwrap();
        assert_eq!(parsed, Range::Minute15);
    }
}
