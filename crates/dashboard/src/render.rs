//! HTML rendering of an `AnalysisResult` for the indicators and score containers.

use crate::messages::{
    DETAILS_HEADING, MISSING_VALUE, REPORTS_HEADING, SCORE_HEADLINE, SCORE_SUMMARY_PREFIX,
};
use tracker_core::analysis::entity::AnalysisResult;
use tracker_core::view::markup::escape_html;

/// Shortest round-trip decimal form; `55.0` renders as `55`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // also folds -0.0
        return "0".to_string();
    }
    value.to_string()
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), format_number)
}

/// # Summary
/// Build the indicators fragment.
///
/// # Logic
/// 1. Headline with score and recommendation.
/// 2. Bulleted notes, in server order.
/// 3. Details table: SMA10, SMA50, EMA20, RSI, each `-` when absent.
/// 4. Upcoming reports list, only when the server sent any.
///
/// # Invariants
/// - Free text is escaped; numbers are not altered.
pub fn analysis_fragment(analysis: &AnalysisResult) -> String {
    let mut html = Vec::new();

    html.push(format!(
        "<strong>{}</strong> {} — <em>{}</em>",
        SCORE_HEADLINE,
        format_number(analysis.score),
        escape_html(&analysis.recommendation)
    ));

    html.push("<ul>".to_string());
    for note in &analysis.notes {
        html.push(format!("<li>{}</li>", escape_html(note)));
    }
    html.push("</ul>".to_string());

    html.push(format!("<h6>{}</h6>", DETAILS_HEADING));
    html.push("<table class=\"table table-sm\">".to_string());
    for (label, value) in [
        ("SMA10", analysis.sma10),
        ("SMA50", analysis.sma50),
        ("EMA20", analysis.ema20),
        ("RSI", analysis.rsi),
    ] {
        html.push(format!(
            "<tr><th>{}</th><td>{}</td></tr>",
            label,
            format_optional(value)
        ));
    }
    html.push("</table>".to_string());

    if !analysis.upcoming_reports.is_empty() {
        html.push(format!("<h6>{}</h6>", REPORTS_HEADING));
        html.push("<ul>".to_string());
        for report in &analysis.upcoming_reports {
            // Blank fields are left out of the line
            let parts: Vec<String> = [&report.date, &report.kind, &report.details]
                .into_iter()
                .filter(|part| !part.trim().is_empty())
                .map(|part| escape_html(part))
                .collect();
            html.push(format!("<li>{}</li>", parts.join(" · ")));
        }
        html.push("</ul>".to_string());
    }

    html.concat()
}

/// Text for the score container.
pub fn score_summary(analysis: &AnalysisResult) -> String {
    format!("{}{}", SCORE_SUMMARY_PREFIX, format_number(analysis.score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::analysis::entity::UpcomingReport;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            symbol: Some("AAPL".to_string()),
            score: 65.0,
            recommendation: "קנה".to_string(),
            notes: vec!["MACD חיובי — מומנטום עולה.".to_string(), "RSI נייטרלי (48.5).".to_string()],
            sma10: Some(101.25),
            sma50: Some(99.5),
            ema20: Some(100.8731),
            rsi: Some(48.5),
            macd_hist: Some(0.0123),
            upcoming_reports: Vec::new(),
        }
    }

    #[test]
    fn test_fragment_layout() {
        let html = analysis_fragment(&sample());
        assert_eq!(
            html,
            concat!(
                "<strong>ציון כללי:</strong> 65 — <em>קנה</em>",
                "<ul><li>MACD חיובי — מומנטום עולה.</li><li>RSI נייטרלי (48.5).</li></ul>",
                "<h6>פרטים</h6>",
                "<table class=\"table table-sm\">",
                "<tr><th>SMA10</th><td>101.25</td></tr>",
                "<tr><th>SMA50</th><td>99.5</td></tr>",
                "<tr><th>EMA20</th><td>100.8731</td></tr>",
                "<tr><th>RSI</th><td>48.5</td></tr>",
                "</table>"
            )
        );
    }

    #[test]
    fn test_missing_indicators_render_placeholder() {
        let mut analysis = sample();
        analysis.sma10 = None;
        analysis.rsi = None;
        let html = analysis_fragment(&analysis);

        assert!(html.contains("<tr><th>SMA10</th><td>-</td></tr>"));
        assert!(html.contains("<tr><th>SMA50</th><td>99.5</td></tr>"));
        assert!(html.contains("<tr><th>EMA20</th><td>100.8731</td></tr>"));
        assert!(html.contains("<tr><th>RSI</th><td>-</td></tr>"));
    }

    #[test]
    fn test_empty_notes_keep_list() {
        let mut analysis = sample();
        analysis.notes.clear();
        assert!(analysis_fragment(&analysis).contains("<ul></ul>"));
    }

    #[test]
    fn test_free_text_is_escaped() {
        let mut analysis = sample();
        analysis.recommendation = "<script>x</script>".to_string();
        analysis.notes = vec!["a & b".to_string()];
        let html = analysis_fragment(&analysis);

        assert!(html.contains("<em>&lt;script&gt;x&lt;/script&gt;</em>"));
        assert!(html.contains("<li>a &amp; b</li>"));
    }

    #[test]
    fn test_upcoming_reports_section() {
        let mut analysis = sample();
        analysis.upcoming_reports = vec![UpcomingReport {
            date: "2026-02-15".to_string(),
            kind: "Earnings".to_string(),
            details: "דוח רבעוני".to_string(),
        }];
        let html = analysis_fragment(&analysis);

        assert!(html.ends_with(
            "</table><h6>דוחות קרובים</h6><ul><li>2026-02-15 · Earnings · דוח רבעוני</li></ul>"
        ));
    }

    #[test]
    fn test_report_with_blank_fields() {
        let mut analysis = sample();
        analysis.upcoming_reports = vec![UpcomingReport {
            date: String::new(),
            kind: "Earnings".to_string(),
            details: String::new(),
        }];
        let html = analysis_fragment(&analysis);

        assert!(html.ends_with("<h6>דוחות קרובים</h6><ul><li>Earnings</li></ul>"));
    }

    #[test]
    fn test_score_summary_and_numbers() {
        assert_eq!(score_summary(&sample()), "ציון מניה: 65");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-12.5), "-12.5");
    }
}
