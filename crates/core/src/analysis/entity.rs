use serde::{Deserialize, Deserializer, Serialize};

/// # Summary
/// Server-computed summary for a symbol/range pair.
///
/// # Invariants
/// - `notes` keeps the server's order.
/// - Indicator fields are `None` both when the key is missing and when it is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    // 0..=100 on the reference server, rendered as-is
    pub score: f64,
    pub recommendation: String,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub sma10: Option<f64>,
    #[serde(default)]
    pub sma50: Option<f64>,
    #[serde(default)]
    pub ema20: Option<f64>,
    #[serde(default)]
    pub rsi: Option<f64>,
    // Last MACD histogram value
    #[serde(default)]
    pub macd_hist: Option<f64>,
    // Optional extra; `null` reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub upcoming_reports: Vec<UpcomingReport>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// # Summary
/// Scheduled corporate event attached to an analysis.
///
/// # Invariants
/// - Every field may be missing; an incomplete report never fails the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingReport {
    #[serde(default)]
    pub date: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub details: String,
}
