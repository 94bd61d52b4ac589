//! Output formatting for Lectern CLI.

use std::io::Write;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::search::Answer;

/// Write an answer in the requested format.
pub fn write_answer<W: Write>(
    out: &mut W,
    answer: &Answer,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_human(out, answer),
        OutputFormat::Json => write_json(out, answer, pretty),
    }
}

/// One sentence per line, best first. No answer prints nothing.
fn write_human<W: Write>(out: &mut W, answer: &Answer) -> Result<()> {
    for sentence in &answer.sentences {
        writeln!(out, "{}", sentence.text)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, answer: &Answer, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, answer)?;
    } else {
        serde_json::to_writer(&mut *out, answer)?;
    }
    writeln!(out)?;
    Ok(())
}
