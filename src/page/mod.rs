//! Parsed page snapshot and feature extraction.
//!
//! [`PageSnapshot::parse`] is total: malformed markup degrades to empty
//! results, absent elements yield empty containers or the no-title
//! sentinel, and nothing here ever fails. All features are derived once at
//! parse time so the snapshot is plain owned data.

use scraper::{Html, Selector};
use serde::Serialize;

/// Sentinel title for pages without a `<title>` element.
pub const NO_TITLE: &str = "This website has no title.";

/// Counts of metadata, script, and stylesheet-link elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechnicalSummary {
    pub meta_tags: usize,
    pub scripts: usize,
    pub stylesheets: usize,
}

impl std::fmt::Display for TechnicalSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "- Meta Tags: {} meta tags are present, including descriptions, keywords, and viewport settings.",
            self.meta_tags
        )?;
        writeln!(
            f,
            "- Scripts: {} scripts are used for interactivity and dynamic content.",
            self.scripts
        )?;
        write!(
            f,
            "- Stylesheets: {} stylesheets are used for styling the website.",
            self.stylesheets
        )
    }
}

/// Immutable parsed representation of one fetched page.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    url: String,
    markup: String,
    title: Option<String>,
    headings: Vec<String>,
    links: Vec<String>,
    visible_text: String,
    word_count: usize,
    technical: TechnicalSummary,
}

impl PageSnapshot {
    /// Parse raw markup into a snapshot. Never fails; a page with nothing
    /// recognizable in it simply has empty features.
    pub fn parse(url: &str, markup: &str) -> Self {
        let document = Html::parse_document(markup);

        let visible_text = collect_visible_text(&document);
        let word_count = visible_text.split_whitespace().count();
        let technical = TechnicalSummary {
            meta_tags: count_elements(&document, "meta"),
            scripts: count_elements(&document, "script"),
            stylesheets: count_elements(&document, r#"link[rel="stylesheet"]"#),
        };

        Self {
            url: url.to_string(),
            markup: markup.to_string(),
            title: first_title(&document),
            headings: collect_headings(&document),
            links: collect_links(&document),
            visible_text,
            word_count,
            technical,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Text of the first `<title>` element, trimmed, or the explicit
    /// no-title sentinel.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(NO_TITLE)
    }

    /// Text of every h1–h6 element in document order. Empty headings are
    /// kept as empty strings.
    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    /// The `href` of every anchor that has one, in document order.
    /// Duplicates and relative/fragment URLs are kept as-is.
    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// All human-visible text, space-joined. Script, style, and noscript
    /// content is excluded.
    pub fn visible_text(&self) -> &str {
        &self.visible_text
    }

    /// Whitespace-delimited token count of the visible text.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn technical_summary(&self) -> &TechnicalSummary {
        &self.technical
    }
}

fn first_title(document: &Html) -> Option<String> {
    let sel = Selector::parse("title").ok()?;
    document
        .select(&sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

fn collect_headings(document: &Html) -> Vec<String> {
    let Ok(sel) = Selector::parse("h1, h2, h3, h4, h5, h6") else {
        return Vec::new();
    };
    document
        .select(&sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

fn collect_links(document: &Html) -> Vec<String> {
    let Ok(sel) = Selector::parse("a[href]") else {
        return Vec::new();
    };
    document
        .select(&sel)
        .filter_map(|el| el.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Walk every text node, skipping those inside script/style/noscript.
fn collect_visible_text(document: &Html) -> String {
    let mut chunks: Vec<&str> = Vec::new();
    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| matches!(e.name(), "script" | "style" | "noscript"))
        });
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed);
        }
    }
    chunks.join(" ")
}

fn count_elements(document: &Html, selector: &str) -> usize {
    Selector::parse(selector)
        .map(|sel| document.select(&sel).count())
        .unwrap_or(0)
}
