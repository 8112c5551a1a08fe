//! `unveil print`: run a reveal without the TUI.

use std::io::{self, Write};

use anyhow::{Context, Result};
use unveil_core::interrupt::{self, InterruptedError};
use unveil_core::source::TextSource;
use unveil_core::{RevealController, tokenize};

/// Reveals `steps` lines (all when `None`), then prints the revealed text
/// followed by the current line as `> line`.
pub fn run(source: &TextSource, steps: Option<usize>) -> Result<()> {
    let text = source.read()?;
    if interrupt::is_interrupted() {
        return Err(InterruptedError.into());
    }

    let lines = tokenize(&text);
    if lines.is_empty() {
        anyhow::bail!("Nothing to reveal in {source}");
    }

    let mut reveal = RevealController::new(lines);
    let steps = steps.unwrap_or(reveal.total());
    for _ in 0..steps {
        if !reveal.advance() {
            break;
        }
    }

    let mut out = io::stdout().lock();
    if !reveal.revealed_text().is_empty() {
        writeln!(out, "{}", reveal.revealed_text()).context("write to stdout")?;
    }
    if let Some(current) = reveal.current_line() {
        writeln!(out, "> {current}").context("write to stdout")?;
    }
    Ok(())
}
