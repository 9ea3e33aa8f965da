//! Weighted-keyword category classification.
//!
//! Tokenizes the page's visible text, sums the weight of every taxonomy
//! term present at least once (presence-based — repeated occurrences do
//! not accumulate), and picks the highest-scoring category. Ties resolve
//! to the first-declared category in taxonomy order; this is deliberate
//! policy, not an accident of iteration. When nothing matches at all the
//! result is the "information" default.

use crate::page::PageSnapshot;
use crate::taxonomy::{CategoryDef, CATEGORIES, DEFAULT_CATEGORY};
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

/// Outcome of classifying one snapshot. Scores are internal; only the
/// winning category and its matched terms are exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub category: &'static str,
    pub matched_terms: BTreeSet<&'static str>,
}

fn token_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w+\b").expect("valid token pattern"))
}

/// Split text into lowercase word-character tokens.
fn tokenize(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn score(category: &CategoryDef, tokens: &HashSet<String>) -> u32 {
    category
        .terms
        .iter()
        .filter(|(term, _)| tokens.contains(*term))
        .map(|(_, weight)| weight)
        .sum()
}

/// Classify a snapshot's visible text against the taxonomy.
pub fn classify(snapshot: &PageSnapshot) -> ClassificationResult {
    classify_text(snapshot.visible_text())
}

/// Classify arbitrary text. Deterministic: same input, same result.
pub fn classify_text(text: &str) -> ClassificationResult {
    let tokens = tokenize(text);

    // First strictly-highest score wins; declaration order breaks ties.
    let mut best: Option<(&CategoryDef, u32)> = None;
    for category in CATEGORIES {
        let total = score(category, &tokens);
        if total > 0 && best.is_none_or(|(_, top)| total > top) {
            best = Some((category, total));
        }
    }

    match best {
        Some((category, _)) => ClassificationResult {
            category: category.name,
            matched_terms: category
                .terms
                .iter()
                .filter(|(term, _)| tokens.contains(*term))
                .map(|(term, _)| *term)
                .collect(),
        },
        None => ClassificationResult {
            category: DEFAULT_CATEGORY,
            matched_terms: BTreeSet::new(),
        },
    }
}
