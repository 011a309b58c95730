//! Command-line interface for the extractor.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use console::style;

use crate::error::Result;
use crate::extractor::extract_doc_number_entries;
use crate::input::read_xml_file;
use crate::types::DocNumberEntry;

/// Extract doc-numbers from patent XML in format priority order.
#[derive(Parser)]
#[command(name = "docnumber-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// XML file, or text file with embedded <root> blocks
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log extraction details (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// How extracted doc-numbers are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line with a header.
    Text,
    /// JSON array of entries with format and bucket.
    Json,
}

/// Run the CLI with already parsed arguments.
pub fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    extract_command(&cli.file, cli.output, &mut out)
}

/// Execute an extraction and render the result.
fn extract_command(file: &Path, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    let content = read_xml_file(file)?;
    let entries = extract_doc_number_entries(&content)?;
    tracing::debug!(file = %file.display(), count = entries.len(), "extraction finished");

    match output {
        OutputFormat::Text => render_text(&entries, out)?,
        OutputFormat::Json => render_json(&entries, out)?,
    }

    Ok(())
}

/// Render entries as human-readable text.
pub fn render_text(entries: &[DocNumberEntry], out: &mut impl Write) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "{}", style("No doc-numbers found in the XML file.").yellow())?;
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        style("Extracted doc-numbers (in priority order):").bold()
    )?;
    for entry in entries {
        writeln!(out, "  {}", entry.value)?;
    }
    Ok(())
}

/// Render entries as a pretty-printed JSON array.
pub fn render_json(entries: &[DocNumberEntry], out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out)?;
    Ok(())
}
