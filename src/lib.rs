//! PageLens — conversational web page analysis.
//!
//! Feed the engine one line of input per turn: a URL loads a page into the
//! session, anything else is answered against the currently loaded page
//! (title, headings, links, word count, category guess, technical summary).
//! Repeat submissions of a URL within 24 hours trigger a sales-contact
//! offer, backed by a persistent revisit log.

pub mod classify;
pub mod cli;
pub mod engine;
pub mod fetch;
pub mod page;
pub mod revisit;
pub mod taxonomy;

pub use engine::{Engine, Session, SessionState};
pub use fetch::{Fetch, FetchError, HttpFetcher};
pub use page::PageSnapshot;
pub use revisit::RevisitStore;
