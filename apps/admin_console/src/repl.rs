use std::io::{BufRead, Write};

use anyhow::Result;
use clap::error::ErrorKind;
use program_core::AdminSession;
use shared::error::{AdminError, ErrorCode};

use crate::{
    commands::{execute, parse_line, ParseError, Reply},
    config::OutputFormat,
    render,
};

const PROMPT: &str = "admin> ";

/// Reads one command per line until `quit` or end of input. Command failures
/// are printed and the loop carries on; only IO errors end it early.
pub fn run(
    session: &mut AdminSession,
    input: impl BufRead,
    out: &mut impl Write,
    format: OutputFormat,
    interactive: bool,
) -> Result<()> {
    if interactive {
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            tracing::debug!(command = trimmed, "console command");
            if handle_line(session, trimmed, out, format)? {
                return Ok(());
            }
        }
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Returns `true` when the session should end.
fn handle_line(
    session: &mut AdminSession,
    line: &str,
    out: &mut impl Write,
    format: OutputFormat,
) -> Result<bool> {
    let command = match parse_line(line) {
        Ok(command) => command,
        Err(ParseError::Clap(err))
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            write!(out, "{}", err.render())?;
            return Ok(false);
        }
        Err(err) => {
            let rendered = err.to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ");
            let error = AdminError::new(ErrorCode::InvalidCommand, message);
            tracing::warn!(line, error = %err, "unparsable console command");
            write_error(out, &error, format)?;
            return Ok(false);
        }
    };

    match execute(session, command) {
        Ok(Reply::Quit) => Ok(true),
        Ok(reply) => {
            let rendered = match format {
                OutputFormat::Table => render::reply_text(&reply),
                OutputFormat::Json => render::reply_json(&reply)?,
            };
            writeln!(out, "{rendered}")?;
            Ok(false)
        }
        Err(err) => {
            tracing::warn!(error = %err, "console command failed");
            write_error(out, &AdminError::from(&err), format)?;
            Ok(false)
        }
    }
}

fn write_error(out: &mut impl Write, error: &AdminError, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Table => render::error_text(error),
        OutputFormat::Json => render::error_json(error)?,
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/repl_tests.rs"]
mod tests;
