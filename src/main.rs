//! interactive-page CLI
//!
//! Launch the terminal page, or validate a signup without it.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use interactive_page::config::PageConfig;
use interactive_page::report::format_report;
use interactive_page::types::{OutputFormat, SignupValues};
use interactive_page::validate::validate_all;

#[derive(Parser)]
#[command(name = "interactive-page")]
#[command(about = "Theme toggle, click challenge, FAQ, tabs and a validated signup form")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Config file for the page opened without a subcommand
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive page (default)
    Tui {
        /// Config file (default: <config dir>/interactive-page/config.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate signup values and report per-field results
    Validate {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,

        #[arg(long, default_value = "")]
        confirm_password: String,

        /// Read values from a JSON file instead ("-" for stdin)
        #[arg(long, conflicts_with_all = ["name", "email", "password", "confirm_password"])]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Exit code for a signup that failed validation.
const EXIT_INVALID: u8 = 1;
/// Exit code for configuration or I/O failures.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Tui { config: cli.config });
    let result = match command {
        Commands::Tui { config } => cmd_tui(config.as_deref()),
        Commands::Validate {
            name,
            email,
            password,
            confirm_password,
            input,
            format,
        } => {
            init_stderr_logging();
            let values = SignupValues {
                name,
                email,
                password,
                confirm_password,
            };
            cmd_validate(values, input.as_deref(), format.into())
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "interactive_page=info".into())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

/// Log to a file so the alternate screen stays clean.
///
/// On Linux: ~/.cache/interactive-page/interactive-page.log
fn init_file_logging() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("interactive-page");
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join("interactive-page.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(path)
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(config_path: Option<&Path>) -> Result<ExitCode> {
    // Logging is optional in the TUI; a read-only cache dir must not block it.
    if let Err(e) = init_file_logging() {
        eprintln!("Note: logging disabled ({:#})", e);
    }

    let config = PageConfig::load(config_path)?;
    tracing::info!(
        game_seconds = config.game_seconds,
        tick_millis = config.tick_millis,
        "starting tui"
    );
    interactive_page::tui::run(config).context("terminal error")?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_validate(
    values: SignupValues,
    input: Option<&Path>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let values = match input {
        Some(path) => read_values(path)?,
        None => values,
    };

    let report = validate_all(&values);
    print!("{}", format_report(&report, format));
    if format == OutputFormat::Json {
        println!();
    }

    if report.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_INVALID))
    }
}

/// Read signup values from a JSON file, or stdin for "-".
fn read_values(path: &Path) -> Result<SignupValues> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

// ============================================================================
// TESTS
// ============================================================================
