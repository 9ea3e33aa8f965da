//! User-facing response texts.
//!
//! The presentation layer renders these verbatim, so every template here
//! is final copy. List answers use dash bullets, one item per line.

use crate::classify;
use crate::page::PageSnapshot;
use crate::taxonomy;

pub const READY: &str = "Ask me anything about the website.";

pub const FAREWELL: &str = "Goodbye! You can leave or start over by entering a new URL.";

pub const FETCH_ERROR: &str =
    "Error fetching the website. This is either due to blocked access or invalid URL. Please try again.";

pub const REVISIT_PROMPT: &str =
    "We see you have visited this site more than once in the last 24 hours... Do you want to connect to a sales representative? (yes/no)";

pub const SALES_CONTACT: &str = "Please call our sales representative at +1-800-123-4567.";

pub const NEED_URL: &str = "Please enter a valid URL.";

pub const NO_HEADINGS: &str = "There are no headings associated with this website.";

pub const NO_LINKS: &str = "There are no links associated with this website.";

pub const FALLBACK: &str = "I'm not capable of answering this yet.\nYou can ask something about the website's title, headings, links, word count, or ask me to describe the website or its technical details.";

pub fn title(snapshot: &PageSnapshot) -> String {
    format!("Website Title: {}.", snapshot.title())
}

pub fn headings(snapshot: &PageSnapshot) -> String {
    bullet_list("Website Headings:", snapshot.headings(), NO_HEADINGS)
}

pub fn links(snapshot: &PageSnapshot) -> String {
    bullet_list("Website Links:", snapshot.links(), NO_LINKS)
}

pub fn word_count(snapshot: &PageSnapshot) -> String {
    format!(
        "The website has approximately {} words.",
        snapshot.word_count()
    )
}

/// Category guess plus the taxonomy terms that drove it.
pub fn describe(snapshot: &PageSnapshot) -> String {
    let result = classify::classify(snapshot);
    let blurb = taxonomy::blurb_for(result.category);

    if result.matched_terms.is_empty() {
        format!("{blurb}\n\nNo keywords matched.")
    } else {
        let terms: Vec<&str> = result.matched_terms.iter().copied().collect();
        format!("{blurb}\n\nMatched Keywords: {}", terms.join(", "))
    }
}

pub fn technical(snapshot: &PageSnapshot) -> String {
    format!(
        "Technical details about the website:\n{}",
        snapshot.technical_summary()
    )
}

fn bullet_list(header: &str, items: &[String], empty_message: &str) -> String {
    if items.is_empty() {
        return empty_message.to_string();
    }
    format!("{header}\n- {}", items.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_template() {
        let snap = PageSnapshot::parse("https://example.com", "<title>Shop</title>");
        assert_eq!(title(&snap), "Website Title: Shop.");
    }

    #[test]
    fn test_bullet_list_rendering() {
        let snap = PageSnapshot::parse(
            "https://example.com",
            "<body><h1>One</h1><h2>Two</h2></body>",
        );
        assert_eq!(headings(&snap), "Website Headings:\n- One\n- Two");
    }

    #[test]
    fn test_empty_lists_use_their_messages() {
        let snap = PageSnapshot::parse("https://example.com", "<body></body>");
        assert_eq!(headings(&snap), NO_HEADINGS);
        assert_eq!(links(&snap), NO_LINKS);
    }

    #[test]
    fn test_describe_names_category_and_terms() {
        let snap = PageSnapshot::parse(
            "https://example.com",
            "<body><p>hotel flight booking</p></body>",
        );
        let text = describe(&snap);
        assert!(text.contains("travel platform"));
        assert!(text.contains("Matched Keywords:"));
        assert!(text.contains("flight"));
    }

    #[test]
    fn test_describe_with_no_matches() {
        let snap = PageSnapshot::parse("https://example.com", "<body><p>xyzzy</p></body>");
        let text = describe(&snap);
        assert!(text.contains("meaningful information"));
        assert!(text.contains("No keywords matched."));
    }

    #[test]
    fn test_technical_block() {
        let snap = PageSnapshot::parse(
            "https://example.com",
            r#"<head><meta charset="utf-8"><script></script></head>"#,
        );
        let text = technical(&snap);
        assert!(text.starts_with("Technical details about the website:"));
        assert!(text.contains("1 meta tags are present"));
        assert!(text.contains("1 scripts are used"));
        assert!(text.contains("0 stylesheets are used"));
    }
}
