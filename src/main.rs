//! CLI for citeprep - Convert Markdown footnotes to Pandoc citations.

use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use thiserror::Error;

use citeprep::{preprocess, resolve_language, PreprocessOptions};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Convert Markdown footnotes to Pandoc citations for PDF conversion
#[derive(Parser)]
#[command(name = "citeprep")]
#[command(version)]
#[command(after_help = "\
Examples:
  citeprep < article.md > article.pandoc.md
  citeprep -l de < bericht.md | pandoc --citeproc -o bericht.pdf
  citeprep --no-fallback-fonts < notes.md

Reads the whole document from stdin and writes the transformed document to stdout.")]
struct Cli {
    /// Language tag for citations: 'de' and 'en' expand to de-DE and en-US,
    /// full tags like 'fr-FR' pass through
    #[arg(short, long, default_value = "en-US")]
    language: String,

    /// Don't inject font-fallback fields into the front matter
    #[arg(long)]
    no_fallback_fonts: bool,
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
enum AppError {
    /// Exit 10 — stdin could not be read
    #[error("failed to read from stdin: {0}\n  hint: pipe a Markdown document into citeprep")]
    Input(#[source] io::Error),
    /// Exit 15 — stdout could not be written
    #[error("failed to write to stdout: {0}")]
    Output(#[source] io::Error),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::Input(_) => 10,
            AppError::Output(_) => 15,
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    // 1. Read the whole document from stdin
    let mut markdown = String::new();
    io::stdin()
        .read_to_string(&mut markdown)
        .map_err(AppError::Input)?;

    // 2. Run the transform; the result is fully buffered so nothing reaches
    //    stdout unless the whole document processed
    let options = PreprocessOptions {
        language: resolve_language(&cli.language),
        fallback_fonts: !cli.no_fallback_fonts,
    };
    let result = preprocess(&markdown, &options);

    // 3. Write to stdout
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(result.as_bytes())
        .map_err(AppError::Output)?;

    Ok(())
}
