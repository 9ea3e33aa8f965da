//! Conversation state machine.
//!
//! One turn = one line of input, one text payload out (possibly empty,
//! meaning "no reply needed"). The [`Session`] value carries everything a
//! turn can mutate: the active page snapshot and the pending
//! revisit-confirmation flag. The engine holds the collaborators (fetcher
//! and revisit store), and the wall clock is passed in per turn so every
//! decision is reproducible.

pub mod responses;
pub mod rules;

use crate::fetch::Fetch;
use crate::page::PageSnapshot;
use crate::revisit::RevisitStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

/// True iff the text is treated as a URL: a case-insensitive
/// `http://` / `https://` scheme prefix, nothing more.
pub fn is_url(text: &str) -> bool {
    let text = text.trim();
    text.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("http://"))
        || text.get(..8).is_some_and(|p| p.eq_ignore_ascii_case("https://"))
}

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No active snapshot; only a URL (or "exit") does anything useful.
    Fresh,
    /// Snapshot loaded, ready for content queries.
    AwaitingQuery,
    /// Snapshot loaded and the sales-contact confirmation is pending.
    AwaitingRevisitConfirm,
}

/// Mutable per-conversation state: at most one snapshot plus the pending
/// confirmation flag. Reset on "exit" or fetch failure.
#[derive(Default)]
pub struct Session {
    snapshot: Option<PageSnapshot>,
    awaiting_revisit_confirmation: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match (&self.snapshot, self.awaiting_revisit_confirmation) {
            (None, _) => SessionState::Fresh,
            (Some(_), true) => SessionState::AwaitingRevisitConfirm,
            (Some(_), false) => SessionState::AwaitingQuery,
        }
    }

    pub fn snapshot(&self) -> Option<&PageSnapshot> {
        self.snapshot.as_ref()
    }

    /// Drop the snapshot and clear the confirmation flag.
    pub fn reset(&mut self) {
        self.snapshot = None;
        self.awaiting_revisit_confirmation = false;
    }
}

/// The conversation engine: drives [`Session`] transitions and produces
/// one response payload per input line.
pub struct Engine {
    fetcher: Arc<dyn Fetch>,
    store: RevisitStore,
}

impl Engine {
    pub fn new(fetcher: Arc<dyn Fetch>, store: RevisitStore) -> Self {
        Self { fetcher, store }
    }

    /// Process one turn. Every failure path recovers into a user-visible
    /// message; the returned payload is rendered verbatim by the caller.
    pub async fn handle_turn(
        &mut self,
        session: &mut Session,
        input: &str,
        now: DateTime<Utc>,
    ) -> String {
        let input = input.trim();
        let folded = input.to_lowercase();

        if folded == "exit" {
            session.reset();
            return responses::FAREWELL.to_string();
        }

        if is_url(input) {
            return self.submit_url(session, input, now).await;
        }

        let Some(snapshot) = session.snapshot.as_ref() else {
            return responses::NEED_URL.to_string();
        };

        if session.awaiting_revisit_confirmation {
            match folded.as_str() {
                "yes" => {
                    session.awaiting_revisit_confirmation = false;
                    return responses::SALES_CONTACT.to_string();
                }
                "no" => {
                    session.awaiting_revisit_confirmation = false;
                    // Silent acknowledgement: empty payload, nothing rendered.
                    return String::new();
                }
                // Anything else falls through to query matching with the
                // confirmation still pending.
                _ => {}
            }
        }

        match rules::first_match(&folded) {
            Some(rule) => {
                debug!(rule = rule.name, "answering content query");
                rule.answer(snapshot)
            }
            None => responses::FALLBACK.to_string(),
        }
    }

    /// Submit a URL: consult the revisit log, then fetch and parse. The
    /// revisit decision uses only records from prior submissions, and the
    /// log is written before the fetch, so a failed fetch still counts as
    /// a visit.
    async fn submit_url(
        &mut self,
        session: &mut Session,
        url: &str,
        now: DateTime<Utc>,
    ) -> String {
        let returning = match self.store.observe(url, now) {
            Ok(returning) => returning,
            Err(e) => {
                warn!("revisit log unavailable, treating URL as new: {e:#}");
                false
            }
        };

        match self.fetcher.fetch(url).await {
            Ok(markup) => {
                session.snapshot = Some(PageSnapshot::parse(url, &markup));
                session.awaiting_revisit_confirmation = returning;
                debug!(url, returning, "page loaded");
                if returning {
                    responses::REVISIT_PROMPT.to_string()
                } else {
                    responses::READY.to_string()
                }
            }
            Err(e) => {
                warn!(url, "fetch failed: {e}");
                session.reset();
                responses::FETCH_ERROR.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use async_trait::async_trait;
    use chrono::TimeZone;

    struct CannedFetcher {
        body: Option<&'static str>,
    }

    #[async_trait]
    impl Fetch for CannedFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            match self.body {
                Some(body) => Ok(body.to_string()),
                None => Err(FetchError::Status(503)),
            }
        }
    }

    fn engine_with(body: Option<&'static str>) -> Engine {
        Engine::new(
            Arc::new(CannedFetcher { body }),
            RevisitStore::open_in_memory().unwrap(),
        )
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_is_url_scheme_prefix_only() {
        assert!(is_url("http://example.com"));
        assert!(is_url("https://example.com"));
        assert!(is_url("HTTPS://EXAMPLE.COM"));
        assert!(is_url("  https://example.com  "));
        assert!(!is_url("example.com"));
        assert!(!is_url("ftp://example.com"));
        assert!(!is_url("httpx://example.com"));
        assert!(!is_url("what is the title"));
        assert!(!is_url(""));
    }

    #[tokio::test]
    async fn test_query_without_snapshot_asks_for_url() {
        let mut engine = engine_with(Some("<title>T</title>"));
        let mut session = Session::new();
        let reply = engine.handle_turn(&mut session, "what is the title", now()).await;
        assert_eq!(reply, responses::NEED_URL);
        assert_eq!(session.state(), SessionState::Fresh);
    }

    #[tokio::test]
    async fn test_exit_resets_session() {
        let mut engine = engine_with(Some("<title>T</title>"));
        let mut session = Session::new();
        engine.handle_turn(&mut session, "https://example.com", now()).await;
        assert_eq!(session.state(), SessionState::AwaitingQuery);

        let reply = engine.handle_turn(&mut session, "EXIT", now()).await;
        assert_eq!(reply, responses::FAREWELL);
        assert_eq!(session.state(), SessionState::Fresh);
    }

    #[tokio::test]
    async fn test_fetch_failure_resets_session() {
        let mut engine = engine_with(None);
        let mut session = Session::new();
        let reply = engine.handle_turn(&mut session, "https://down.example", now()).await;
        assert_eq!(reply, responses::FETCH_ERROR);
        assert_eq!(session.state(), SessionState::Fresh);
    }

    #[tokio::test]
    async fn test_unrecognized_confirm_reply_falls_through_and_keeps_prompt_pending() {
        let mut engine = engine_with(Some("<title>T</title>"));
        let mut session = Session::new();
        engine.handle_turn(&mut session, "https://example.com", now()).await;
        engine.handle_turn(&mut session, "https://example.com", now()).await;
        assert_eq!(session.state(), SessionState::AwaitingRevisitConfirm);

        // A content query answers normally without consuming the prompt.
        let reply = engine.handle_turn(&mut session, "what is the title", now()).await;
        assert_eq!(reply, "Website Title: T.");
        assert_eq!(session.state(), SessionState::AwaitingRevisitConfirm);

        // "yes" still works afterwards.
        let reply = engine.handle_turn(&mut session, "yes", now()).await;
        assert_eq!(reply, responses::SALES_CONTACT);
        assert_eq!(session.state(), SessionState::AwaitingQuery);
    }

    #[tokio::test]
    async fn test_empty_input_with_snapshot_gets_fallback() {
        let mut engine = engine_with(Some("<title>T</title>"));
        let mut session = Session::new();
        engine.handle_turn(&mut session, "https://example.com", now()).await;
        let reply = engine.handle_turn(&mut session, "", now()).await;
        assert_eq!(reply, responses::FALLBACK);
    }
}
