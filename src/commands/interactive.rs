//! Interactive Session
//!
//! Reads messages from a line source, one per blank-line-terminated
//! paragraph, and analyzes each through the shared orchestrator. End of
//! input submits whatever is pending and ends the session.

use std::io::Write;

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use super::analyze::{analyze_message, format_analysis, is_rejected};
use crate::models::response::AnalysisReport;
use crate::services::analysis::{Phase, SUBMIT_LABEL};
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::view::Painter;

/// Counts for one interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub submitted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Options for rendering the session output
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub painter: Painter,
    pub json: bool,
}

/// Run the session until `reader` is exhausted.
pub async fn run_interactive<R, W>(
    state: &AppState,
    reader: R,
    out: &mut W,
    options: SessionOptions,
) -> AppResult<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut summary = SessionSummary::default();
    let mut lines = reader.lines();
    let mut buffer = String::new();

    if !options.json {
        write_prompt(out)?;
    }

    loop {
        let line = lines.next_line().await?;
        let at_eof = line.is_none();

        match line {
            Some(line) if !line.trim().is_empty() => {
                buffer.push_str(&line);
                buffer.push('\n');
                continue;
            }
            _ => {}
        }

        if !buffer.trim().is_empty() {
            submit_one(state, &buffer, out, options, &mut summary).await?;
            if !at_eof && !options.json {
                write_prompt(out)?;
            }
        }
        buffer.clear();

        if at_eof {
            break;
        }
    }

    debug!(?summary, "interactive session finished");
    Ok(summary)
}

async fn submit_one<W: Write>(
    state: &AppState,
    text: &str,
    out: &mut W,
    options: SessionOptions,
    summary: &mut SessionSummary,
) -> AppResult<()> {
    let response = analyze_message(state, text).await;
    if is_rejected(&response) {
        return Ok(());
    }

    summary.submitted += 1;
    match response.data.as_ref().map(AnalysisReport::phase) {
        Some(Phase::Success) => summary.succeeded += 1,
        _ => summary.failed += 1,
    }

    let rendered = if options.json {
        // One compact document per line
        format!("{}\n", serde_json::to_string(&response)?)
    } else {
        format!("\n{}", format_analysis(&response, options.painter, false)?)
    };
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn write_prompt<W: Write>(out: &mut W) -> AppResult<()> {
    writeln!(
        out,
        "\nPaste a recruiter message, then an empty line to {}. Ctrl-D quits.",
        SUBMIT_LABEL.to_lowercase()
    )?;
    out.flush()?;
    Ok(())
}
