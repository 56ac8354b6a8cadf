use serde::{Deserialize, Serialize};

/// # Summary
/// Candle open time as sent by the server.
///
/// # Invariants
/// - Serialises back to exactly the form it was read from, so the charting
///   widget sees the server's value unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandleTime {
    // UNIX timestamp in seconds
    Timestamp(i64),
    // UNIX timestamp sent as a JSON float
    FractionalTimestamp(f64),
    // Business day, e.g. "2026-02-15"
    BusinessDay(String),
    // Business day as `{year, month, day}`
    BusinessDayParts(BusinessDay),
}

/// Lightweight Charts' object form of a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDay {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// # Summary
/// One OHLC bar in the shape the candlestick series consumes.
///
/// # Invariants
/// - Built only by deserialising a server record; fields are never recomputed.
/// - Extra server fields (such as `volume`) are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: CandleTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// # Summary
/// Body of `GET /api/stock/{symbol}/chart`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    // Upper-cased symbol echoed by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    // Range echoed by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    pub data: Vec<Candle>,
}

/// # Summary
/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_payload_drops_volume() {
        let body = r#"{
            "symbol": "AAPL",
            "range": "1d",
            "data": [
                {"time": 1760000000, "open": 101.5, "high": 102.25, "low": 100.75, "close": 101.0, "volume": 4200}
            ]
        }"#;
        let payload: ChartPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.symbol.as_deref(), Some("AAPL"));
        assert_eq!(
            payload.data,
            vec![Candle {
                time: CandleTime::Timestamp(1760000000),
                open: 101.5,
                high: 102.25,
                low: 100.75,
                close: 101.0,
            }]
        );

        let json = serde_json::to_value(&payload.data[0]).unwrap();
        assert!(json.get("volume").is_none());
    }

    #[test]
    fn test_business_day_time_passes_through() {
        let body = r#"{"data": [{"time": "2026-02-13", "open": 1, "high": 2, "low": 0.5, "close": 1.5}]}"#;
        let payload: ChartPayload = serde_json::from_str(body).unwrap();
        assert!(payload.symbol.is_none());
        assert_eq!(
            payload.data[0].time,
            CandleTime::BusinessDay("2026-02-13".to_string())
        );
        assert_eq!(
            serde_json::to_string(&payload.data[0].time).unwrap(),
            "\"2026-02-13\""
        );
    }

    #[test]
    fn test_float_timestamp_passes_through() {
        let body = r#"{"data": [{"time": 1760000000.5, "open": 1, "high": 2, "low": 0.5, "close": 1.5}]}"#;
        let payload: ChartPayload = serde_json::from_str(body).unwrap();
        assert_eq!(
            payload.data[0].time,
            CandleTime::FractionalTimestamp(1760000000.5)
        );
        assert_eq!(
            serde_json::to_string(&payload.data[0].time).unwrap(),
            "1760000000.5"
        );
    }

    #[test]
    fn test_business_day_object_passes_through() {
        let body = r#"{"data": [{"time": {"year": 2026, "month": 2, "day": 13}, "open": 1, "high": 2, "low": 0.5, "close": 1.5}]}"#;
        let payload: ChartPayload = serde_json::from_str(body).unwrap();
        assert_eq!(
            payload.data[0].time,
            CandleTime::BusinessDayParts(BusinessDay {
                year: 2026,
                month: 2,
                day: 13,
            })
        );
        assert_eq!(
            serde_json::to_string(&payload.data[0].time).unwrap(),
            r#"{"year":2026,"month":2,"day":13}"#
        );
    }

    #[test]
    fn test_integer_time_stays_integer() {
        let time: CandleTime = serde_json::from_str("1760000000").unwrap();
        assert_eq!(time, CandleTime::Timestamp(1760000000));
        assert_eq!(serde_json::to_string(&time).unwrap(), "1760000000");
    }
}
