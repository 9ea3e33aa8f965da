//! Interactive terminal front end for the conversation engine.

pub mod inspect_cmd;
pub mod output;
pub mod repl;

use std::path::PathBuf;

/// Application home directory (~/.pagelens): revisit log, REPL history.
pub fn pagelens_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(".pagelens")
}
