//! `pagelens inspect <url>` — one-shot page inspection.
//!
//! Fetches and parses a single page, then prints every extracted feature
//! as pretty JSON. Bypasses the conversation session and the revisit log;
//! this is a diagnostic surface, not a visit.

use crate::classify;
use crate::fetch::Fetch;
use crate::page::{PageSnapshot, TechnicalSummary};
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct InspectReport<'a> {
    url: &'a str,
    title: &'a str,
    headings: &'a [String],
    links: &'a [String],
    word_count: usize,
    category: &'static str,
    matched_terms: Vec<&'static str>,
    technical: &'a TechnicalSummary,
}

/// Run the inspect command.
pub async fn run(fetcher: &dyn Fetch, url: &str) -> Result<()> {
    let markup = fetcher
        .fetch(url)
        .await
        .with_context(|| format!("failed to fetch {url}"))?;
    let snapshot = PageSnapshot::parse(url, &markup);
    let classification = classify::classify(&snapshot);

    let report = InspectReport {
        url: snapshot.url(),
        title: snapshot.title(),
        headings: snapshot.headings(),
        links: snapshot.links(),
        word_count: snapshot.word_count(),
        category: classification.category,
        matched_terms: classification.matched_terms.iter().copied().collect(),
        technical: snapshot.technical_summary(),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
