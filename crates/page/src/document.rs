use crate::error::PageError;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;
use tracker_core::chart::entity::ChartOptions;
use tracker_core::common::Range;
use tracker_core::market::entity::Candle;
use tracker_core::view::markup::escape_html;
use tracker_core::view::port::{DARK_CLASS, Element, SearchForm};

/// Content written into a container element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    // Escaped on render
    Text(String),
    // Inserted as-is
    Html(String),
}

/// # Summary
/// Chart constructed in one container.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    // Unique per `createChart` call within a page
    pub id: u64,
    pub options: ChartOptions,
    // One entry per `addCandlestickSeries`, in call order
    pub series: Vec<Vec<Candle>>,
}

/// # Summary
/// In-memory model of the dashboard page.
///
/// # Invariants
/// - Containers are keyed by `Element`, so each id appears at most once.
/// - `head_scripts` keeps injection order, duplicates included.
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    pub title: String,
    pub body_classes: BTreeSet<String>,
    pub head_scripts: Vec<String>,
    pub contents: BTreeMap<Element, Content>,
    pub charts: BTreeMap<Element, ChartSpec>,
    pub form: SearchForm,
    pub alerts: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub next_chart_id: u64,
}

/// # Summary
/// Shared, thread-safe handle to an `HtmlDocument`.
///
/// # Invariants
/// - The lock is held only for synchronous updates, never across an `.await`.
#[derive(Clone, Default)]
pub struct Page {
    inner: Arc<Mutex<HtmlDocument>>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HtmlDocument {
                title: title.into(),
                ..HtmlDocument::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HtmlDocument> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the document under the lock and mark it updated.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut HtmlDocument) -> R) -> R {
        let mut doc = self.lock();
        doc.updated_at = Some(Utc::now());
        f(&mut doc)
    }

    /// Copy of the current document.
    pub fn snapshot(&self) -> HtmlDocument {
        self.lock().clone()
    }

    /// Reflect the submitted form values in the rendered inputs.
    pub fn set_form(&self, form: &SearchForm) {
        self.update(|doc| doc.form = form.clone());
    }

    /// Take every queued alert, oldest first.
    pub fn drain_alerts(&self) -> Vec<String> {
        std::mem::take(&mut self.lock().alerts)
    }

    /// # Summary
    /// Render the page as a complete HTML5 document.
    ///
    /// # Logic
    /// 1. Head: charset, title, injected library scripts.
    /// 2. Body: theme toggle and search form reflecting the current state.
    /// 3. Containers for chart, score and indicators.
    /// 4. One inline script per chart replaying the charting calls.
    pub fn render(&self) -> Result<String, PageError> {
        let doc = self.snapshot();
        let mut html = Vec::new();

        html.push("<!DOCTYPE html>".to_string());
        html.push("<html lang=\"he\" dir=\"rtl\">".to_string());
        html.push("<head>".to_string());
        html.push("<meta charset=\"utf-8\">".to_string());
        html.push(format!("<title>{}</title>", escape_html(&doc.title)));
        for src in &doc.head_scripts {
            html.push(format!("<script src=\"{}\"></script>", escape_html(src)));
        }
        html.push("</head>".to_string());

        if doc.body_classes.is_empty() {
            html.push(format!("<body id=\"{}\">", Element::PageBody.id()));
        } else {
            let classes: Vec<&str> = doc.body_classes.iter().map(String::as_str).collect();
            html.push(format!(
                "<body id=\"{}\" class=\"{}\">",
                Element::PageBody.id(),
                escape_html(&classes.join(" "))
            ));
        }

        html.push("<header>".to_string());
        html.push(format!(
            "<label><input type=\"checkbox\" id=\"{}\"{}> מצב כהה</label>",
            Element::ThemeToggle.id(),
            if doc.body_classes.contains(DARK_CLASS) { " checked" } else { "" }
        ));
        html.push(render_form(&doc.form));
        html.push("</header>".to_string());

        html.push("<main>".to_string());
        for element in [Element::Chart, Element::ScoreBox, Element::IndicatorsContent] {
            let inner = match doc.contents.get(&element) {
                Some(Content::Text(text)) => escape_html(text),
                Some(Content::Html(fragment)) => fragment.clone(),
                None => String::new(),
            };
            html.push(format!("<div id=\"{}\">{}</div>", element.id(), inner));
        }
        html.push("</main>".to_string());

        if let Some(updated_at) = doc.updated_at {
            html.push(format!(
                "<footer>עודכן: {}</footer>",
                updated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        for (container, chart) in &doc.charts {
            html.push(format!("<script>{}</script>", chart_script(*container, chart)?));
        }

        html.push("</body>".to_string());
        html.push("</html>".to_string());

        Ok(html.join("\n"))
    }

    /// # Summary
    /// Render and write the page to `path`, replacing any previous file.
    pub async fn write_to(&self, path: impl AsRef<Path>) -> Result<(), PageError> {
        let html = self.render()?;
        tokio::fs::write(path.as_ref(), html)
            .await
            .map_err(|e| PageError::Io(e.to_string()))?;
        debug!(path = %path.as_ref().display(), "Page written");
        Ok(())
    }
}

fn render_form(form: &SearchForm) -> String {
    let options: Vec<String> = Range::ALL
        .iter()
        .map(|range| {
            let selected = if form.range == range.as_str() { " selected" } else { "" };
            format!("<option value=\"{0}\"{1}>{0}</option>", range, selected)
        })
        .collect();

    format!(
        "<form id=\"{}\"><input type=\"text\" id=\"{}\" value=\"{}\"><select id=\"{}\">{}</select><button type=\"submit\">חפש</button></form>",
        Element::SearchForm.id(),
        Element::SymbolInput.id(),
        escape_html(&form.symbol),
        Element::RangeSelect.id(),
        options.concat()
    )
}

/// JSON safe to embed inside a `<script>` element.
fn script_json<T: serde::Serialize>(value: &T) -> Result<String, PageError> {
    serde_json::to_string(value)
        .map(|json| json.replace("</", "<\\/"))
        .map_err(|e| PageError::Serialize(e.to_string()))
}

fn chart_script(container: Element, chart: &ChartSpec) -> Result<String, PageError> {
    let mut js = format!(
        "(function(){{const chart=LightweightCharts.createChart(document.getElementById(\"{}\"),{});",
        container.id(),
        script_json(&chart.options)?
    );
    for data in &chart.series {
        js.push_str(&format!(
            "chart.addCandlestickSeries().setData({});",
            script_json(data)?
        ));
    }
    js.push_str("})();");
    Ok(js)
}
