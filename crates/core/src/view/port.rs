/// Body class toggled by the theme switch.
pub const DARK_CLASS: &str = "dark";

/// # Summary
/// Fixed page elements the dashboard reads from or writes to.
///
/// # Invariants
/// - `id()` values are part of the page contract and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    ThemeToggle,
    PageBody,
    SearchForm,
    SymbolInput,
    RangeSelect,
    Chart,
    IndicatorsContent,
    ScoreBox,
}

impl Element {
    pub fn id(&self) -> &'static str {
        match self {
            Element::ThemeToggle => "themeToggle",
            Element::PageBody => "page-body",
            Element::SearchForm => "searchForm",
            Element::SymbolInput => "symbolInput",
            Element::RangeSelect => "rangeSelect",
            Element::Chart => "chart",
            Element::IndicatorsContent => "indicatorsContent",
            Element::ScoreBox => "scoreBox",
        }
    }
}

/// # Summary
/// Values read from the search form at submit time.
///
/// # Invariants
/// - Holds raw user input; trimming and validation belong to the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub symbol: String,
    pub range: String,
}

impl SearchForm {
    pub fn new(symbol: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            range: range.into(),
        }
    }
}

/// # Summary
/// Output surface of the dashboard (the page's DOM).
///
/// # Invariants
/// - Calls are synchronous and never suspend; implementations must not block on I/O.
/// - Must be `Send + Sync` so the controller can be shared across tasks.
pub trait View: Send + Sync {
    /// # Summary
    /// Show a blocking, user-facing message.
    fn alert(&self, message: &str);

    /// # Summary
    /// Add (`enabled = true`) or remove a presentation class on the page body.
    fn set_body_class(&self, class: &str, enabled: bool);

    /// # Summary
    /// Replace an element's content with plain text.
    fn set_text(&self, target: Element, text: &str);

    /// # Summary
    /// Replace an element's content with an HTML fragment.
    fn set_html(&self, target: Element, html: &str);
}
