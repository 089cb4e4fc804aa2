mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use tanzu_records::adapters::outbound::filesystem::FileSystemReader;
use tanzu_records::application::dto::{MaterializeRequest, OutputFormat};
use tanzu_records::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use tanzu_records::application::use_cases::MaterializePayloadUseCase;
use tanzu_records::records::RecordKind;
use tanzu_records::shared::{AppError, ExitCode, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
const LOG_ENV: &str = "TANZU_RECORDS_LOG";

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tanzu_records=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // try_init: a subscriber may already be installed when run under a test harness
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

fn run(args: Args) -> Result<()> {
    if args.list_kinds {
        print!("{}", kinds_listing());
        return Ok(());
    }

    let kind = args.kind.ok_or_else(|| AppError::Validation {
        message: "--kind is required unless --list-kinds is given".to_string(),
    })?;

    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(&args, config.as_ref());
    tracing::debug!(?settings, "resolved settings");

    // Create use case with injected reader
    let use_case = MaterializePayloadUseCase::new(FileSystemReader::new());
    let request = MaterializeRequest::new(kind, args.payload_input(), settings.sequence);
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format, settings.pretty);
    let formatted_output = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

/// Output settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    format: OutputFormat,
    pretty: bool,
    sequence: bool,
}

impl Settings {
    /// Flags win over config values, which win over defaults. Boolean flags
    /// can only switch a setting on.
    fn resolve(args: &Args, config: Option<&ConfigFile>) -> Self {
        let format = args
            .format
            .or_else(|| config.and_then(ConfigFile::output_format))
            .unwrap_or_default();
        let pretty = args.pretty || config.and_then(|c| c.pretty).unwrap_or(false);
        let sequence = args.sequence || config.and_then(|c| c.sequence).unwrap_or(false);

        Self {
            format,
            pretty,
            sequence,
        }
    }
}

fn kinds_listing() -> String {
    RecordKind::ALL
        .iter()
        .map(|kind| format!("{:<28}{}\n", kind.slug(), kind.name()))
        .collect()
}
