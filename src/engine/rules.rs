//! Ordered content-query dispatch.
//!
//! Each rule pairs a substring predicate with an answer template. Rules
//! are evaluated top to bottom against the case-folded input and the first
//! match wins, so the order below is behavior, not style.

use super::responses;
use crate::page::PageSnapshot;

/// One (predicate, handler) dispatch rule.
pub struct QueryRule {
    pub name: &'static str,
    matches: fn(&str) -> bool,
    answer: fn(&PageSnapshot) -> String,
}

impl QueryRule {
    /// Test the rule against case-folded input.
    pub fn matches(&self, input: &str) -> bool {
        (self.matches)(input)
    }

    pub fn answer(&self, snapshot: &PageSnapshot) -> String {
        (self.answer)(snapshot)
    }
}

/// Dispatch table in priority order.
pub const QUERY_RULES: &[QueryRule] = &[
    QueryRule {
        name: "title",
        matches: |input| input.contains("title"),
        answer: responses::title,
    },
    QueryRule {
        name: "headings",
        matches: |input| input.contains("heading"),
        answer: responses::headings,
    },
    QueryRule {
        name: "links",
        matches: |input| input.contains("link"),
        answer: responses::links,
    },
    QueryRule {
        name: "word-count",
        matches: |input| input.contains("word") && input.contains("count"),
        answer: responses::word_count,
    },
    QueryRule {
        name: "describe-website",
        matches: |input| input.contains("describe") && input.contains("website"),
        answer: responses::describe,
    },
    QueryRule {
        name: "describe-technical",
        matches: |input| input.contains("describe") && input.contains("technical"),
        answer: responses::technical,
    },
];

/// Find the first rule matching the input, if any.
pub fn first_match(input: &str) -> Option<&'static QueryRule> {
    QUERY_RULES.iter().find(|rule| rule.matches(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_priority_title_before_headings() {
        // "title" outranks "heading" when both substrings appear.
        let rule = first_match("compare the title with the headings").unwrap();
        assert_eq!(rule.name, "title");
    }

    #[test]
    fn test_word_count_needs_both_substrings() {
        assert!(first_match("how many words").is_none());
        assert_eq!(first_match("what is the word count").unwrap().name, "word-count");
    }

    #[test]
    fn test_describe_variants() {
        assert_eq!(
            first_match("describe the website").unwrap().name,
            "describe-website"
        );
        assert_eq!(
            first_match("describe the technical details").unwrap().name,
            "describe-technical"
        );
        assert!(first_match("describe it").is_none());
    }

    #[test]
    fn test_unmatched_input_has_no_rule() {
        assert!(first_match("tell me a joke").is_none());
        assert!(first_match("").is_none());
    }
}
