//! Command implementation for Lectern CLI.

use std::io::{self, BufRead, Write};

use log::info;

use crate::cli::args::{LecternArgs, OutputFormat};
use crate::cli::output::write_answer;
use crate::error::Result;
use crate::search::QuestionAnswerer;

const PROMPT: &str = "Query: ";

/// Load the corpus, read one query, and print its answer.
pub fn execute_command(args: LecternArgs) -> Result<()> {
    let config = args.to_config()?;
    info!("Loading corpus from {}", args.corpus.display());
    let qa = QuestionAnswerer::from_directory(&args.corpus, config)?;

    let query = match &args.query {
        Some(query) => query.clone(),
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            // Keep the prompt out of machine-readable output.
            match args.output_format {
                OutputFormat::Human => read_query(&mut input, &mut io::stdout())?,
                OutputFormat::Json => read_query(&mut input, &mut io::stderr())?,
            }
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_query(&qa, &query, &args, &mut out)
}

/// Answer `query` and write the result to `out`.
pub fn run_query<W: Write>(
    qa: &QuestionAnswerer,
    query: &str,
    args: &LecternArgs,
    out: &mut W,
) -> Result<()> {
    let answer = qa.answer_detailed(query)?;
    info!(
        "{} sentence(s) from {} document(s)",
        answer.sentences.len(),
        answer.documents.len()
    );
    write_answer(out, &answer, args.output_format, args.pretty)
}

/// Print the prompt, then read a single line. End of input reads as an empty query.
pub fn read_query<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> Result<String> {
    write!(prompt, "{PROMPT}")?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
