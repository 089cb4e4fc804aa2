use clap::Parser;
use std::path::PathBuf;

use tanzu_records::application::dto::{OutputFormat, PayloadInput};
use tanzu_records::records::RecordKind;

/// Materialize download-portal payloads into typed records
#[derive(Parser, Debug)]
#[command(name = "tanzu-records")]
#[command(version)]
#[command(
    about = "Materialize download-portal payloads into typed records",
    long_about = None
)]
pub struct Args {
    /// Record kind to materialize (see --list-kinds)
    #[arg(short, long, value_name = "KIND", required_unless_present = "list_kinds")]
    pub kind: Option<RecordKind>,

    /// Payload file, or '-' to read stdin (default: stdin)
    #[arg(value_name = "INPUT", conflicts_with = "json")]
    pub input: Option<String>,

    /// Inline JSON payload instead of a file
    #[arg(long, value_name = "TEXT")]
    pub json: Option<String>,

    /// Treat the payload as a top-level sequence of records
    #[arg(short, long)]
    pub sequence: bool,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file path (default: ./tanzu-records.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log materialization details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// List the supported record kinds and exit
    #[arg(long)]
    pub list_kinds: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Where the payload comes from: `--json` wins, then the positional path.
    pub fn payload_input(&self) -> PayloadInput {
        match &self.json {
            Some(text) => PayloadInput::Inline(text.clone()),
            None => PayloadInput::from_arg(self.input.as_deref()),
        }
    }
}
