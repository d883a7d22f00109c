//! Interactive prompt.
//!
//! Input lines and search completions are multiplexed with
//! [`tokio::select!`], so a slow fetch never blocks typing and a late,
//! stale response is dropped without redrawing.

use std::io::Write;

use finder_core::{Completion, SearchSession};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::{Error, Result};
use crate::render::{render_state, HELP_TEXT};

/// A parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// `search <city>`, or `search` alone to resubmit the last typed city.
    Search(Option<String>),
    /// `page <n>`
    Page(u32),
    /// `next`
    Next,
    /// `prev`
    Prev,
    /// `clear`
    Clear,
    /// `help`
    Help,
    /// `quit`
    Quit,
    /// A blank line.
    Nothing,
}

impl ReplCommand {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Command`] for unknown commands and bad page numbers.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "" => Self::Nothing,
            "search" | "s" if rest.is_empty() => Self::Search(None),
            "search" | "s" => Self::Search(Some(rest.to_string())),
            "page" | "g" => {
                let page: u32 = rest
                    .parse()
                    .map_err(|_| Error::command(format!("Not a page number: '{rest}'")))?;
                if page == 0 {
                    return Err(Error::command("Page numbers start at 1"));
                }
                Self::Page(page)
            }
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "clear" => Self::Clear,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(Error::command(format!(
                    "Unknown command '{other}'. Type 'help' for a list."
                )));
            }
        };
        Ok(command)
    }
}

/// Prompt behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplOptions {
    /// Wait for each command's fetch to settle before reading the next line.
    /// Used when input is piped.
    pub wait_for_results: bool,
    /// Print a `> ` prompt before reading.
    pub show_prompt: bool,
}

/// Run the prompt until `quit` or end of input.
///
/// # Errors
///
/// Fails on I/O errors reading `input` or writing `out`.
pub async fn run<R, W>(
    session: &mut SearchSession,
    input: R,
    out: &mut W,
    options: ReplOptions,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    prompt(out, options)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let command = match ReplCommand::parse(&line) {
                    Ok(ReplCommand::Quit) => return Ok(()),
                    Ok(command) => command,
                    Err(e) => {
                        writeln!(out, "{e}")?;
                        prompt(out, options)?;
                        continue;
                    }
                };

                let spawned = execute(session, command, out)?;
                if spawned {
                    if options.wait_for_results {
                        session.settle().await;
                    }
                    write!(out, "{}", render_state(session.controller()))?;
                }
                prompt(out, options)?;
            }
            Some(completion) = session.next_completion(), if session.pending() > 0 => {
                tracing::debug!(?completion, "Search completed");
                if completion != Completion::Discarded {
                    write!(out, "{}", render_state(session.controller()))?;
                    prompt(out, options)?;
                }
            }
        }
    }

    if session.pending() > 0 {
        session.settle().await;
        write!(out, "{}", render_state(session.controller()))?;
    }
    out.flush()?;
    Ok(())
}

/// Apply one command. Returns `true` if a fetch was spawned.
fn execute<W: Write>(session: &mut SearchSession, command: ReplCommand, out: &mut W) -> Result<bool> {
    let spawned = match command {
        ReplCommand::Search(city) => {
            if let Some(city) = city {
                session.set_query_input(city);
            }
            let spawned = session.submit_input();
            if !spawned {
                writeln!(out, "Type a city to search, e.g. 'search Helsinki'")?;
            }
            spawned
        }
        ReplCommand::Page(page) => {
            let spawned = session.go_to_page(page)?;
            if !spawned {
                writeln!(out, "Nothing to page through yet")?;
            }
            spawned
        }
        ReplCommand::Next => {
            let spawned = session.next_page();
            if !spawned {
                writeln!(out, "Already on the last page")?;
            }
            spawned
        }
        ReplCommand::Prev => {
            let spawned = session.previous_page();
            if !spawned {
                writeln!(out, "Already on the first page")?;
            }
            spawned
        }
        ReplCommand::Clear => {
            session.clear();
            writeln!(out, "Cleared")?;
            false
        }
        ReplCommand::Help => {
            writeln!(out, "{HELP_TEXT}")?;
            false
        }
        ReplCommand::Quit | ReplCommand::Nothing => false,
    };
    Ok(spawned)
}

fn prompt<W: Write>(out: &mut W, options: ReplOptions) -> Result<()> {
    if options.show_prompt {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
