//! User-facing strings (Hebrew UI).

pub const UNSUPPORTED_RANGE: &str = "טווח לא נתמך";
pub const CHART_LOAD_FAILED: &str = "שגיאה בטעינת נתונים";
pub const ANALYSIS_LOAD_FAILED: &str = "שגיאה בטעינת ניתוח";

pub const SCORE_HEADLINE: &str = "ציון כללי:";
pub const SCORE_SUMMARY_PREFIX: &str = "ציון מניה: ";
pub const DETAILS_HEADING: &str = "פרטים";
pub const REPORTS_HEADING: &str = "דוחות קרובים";

/// Cell content for an indicator the server did not send.
pub const MISSING_VALUE: &str = "-";
