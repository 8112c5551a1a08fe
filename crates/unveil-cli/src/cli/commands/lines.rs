//! `unveil lines`: show how a text is split before revealing it.

use std::io::{self, Write};

use anyhow::{Context, Result};
use unveil_core::interrupt::{self, InterruptedError};
use unveil_core::source::TextSource;
use unveil_core::tokenize;

pub fn run(source: &TextSource) -> Result<()> {
    let text = source.read()?;
    if interrupt::is_interrupted() {
        return Err(InterruptedError.into());
    }

    let lines = tokenize(&text);
    let mut out = io::stdout().lock();
    for line in &lines {
        writeln!(out, "{line}").context("write to stdout")?;
    }
    Ok(())
}
