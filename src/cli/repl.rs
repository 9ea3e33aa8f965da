//! Interactive REPL for PageLens.
//!
//! One line in, one payload out. Payloads print verbatim to stdout; an
//! empty payload prints nothing. Banner, hints, and errors go to stderr.

use crate::cli::output::Styled;
use crate::cli::pagelens_home;
use crate::engine::{Engine, Session};
use anyhow::Result;
use chrono::Utc;
use rustyline::config::Config;
use rustyline::error::ReadlineError;

/// History file location.
fn history_path() -> std::path::PathBuf {
    pagelens_home().join("repl_history")
}

/// Print the welcome banner.
fn print_banner() {
    let s = Styled::new();

    eprintln!();
    eprintln!(
        "  {} {}",
        s.bold(&format!("PageLens v{}", env!("CARGO_PKG_VERSION"))),
        s.dim("— conversational web page analyst")
    );
    eprintln!();
    eprintln!("    Paste a URL to load a page, then ask about its title,");
    eprintln!("    headings, links, word count, or ask me to describe the");
    eprintln!("    website or its technical details.");
    eprintln!();
    eprintln!(
        "    Type {} to clear the session, {} to quit.",
        s.cyan("exit"),
        s.dim("Ctrl+D")
    );
    eprintln!();
}

/// Run the interactive REPL until EOF.
pub async fn run(mut engine: Engine, quiet: bool) -> Result<()> {
    if !quiet {
        print_banner();
    }

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();
    let mut rl = rustyline::DefaultEditor::with_config(config)?;

    let hist_path = history_path();
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let mut session = Session::new();

    loop {
        match rl.readline("pagelens> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let reply = engine.handle_turn(&mut session, line, Utc::now()).await;
                if !reply.is_empty() {
                    println!("{reply}");
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C — don't exit, just show a hint.
                let s = Styled::new();
                eprintln!("  {} Press {} to quit.", s.dim("(Ctrl+C)"), s.bold("Ctrl+D"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                let s = Styled::new();
                eprintln!("  {} {err}", s.warn_sym());
                break;
            }
        }
    }

    let _ = std::fs::create_dir_all(pagelens_home());
    let _ = rl.save_history(&hist_path);

    Ok(())
}
