//! xlsx2ics command-line front end
//!
//! Converts the event sheet of a spreadsheet into an iCalendar file.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use xlsx2ics::{ConverterBuilder, DEFAULT_SHEET_NAME};

#[derive(Parser, Debug)]
#[command(
    name = "xlsx2ics",
    version,
    about = "Convert an Excel event sheet (Date, Start Time, End Time, Subject) to an iCalendar file"
)]
struct Cli {
    /// Source spreadsheet (.xlsx, .xls, .ods)
    input: PathBuf,

    /// Destination calendar file (.ics)
    output: PathBuf,

    /// Sheet holding the event table
    #[arg(long, default_value = DEFAULT_SHEET_NAME)]
    sheet: String,

    /// PRODID written into the calendar header
    #[arg(long = "product-id", allow_hyphen_values = true)]
    product_id: Option<String>,

    /// Print the conversion report as JSON instead of a message
    #[arg(long)]
    json: bool,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    quiet: u8,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.verbose, cli.quiet)?;

    let mut builder = ConverterBuilder::new().with_sheet_name(cli.sheet);
    if let Some(product_id) = cli.product_id {
        builder = builder.with_product_id(product_id);
    }
    let converter = builder.build()?;

    let report = converter
        .convert_file(&cli.input, &cli.output)
        .with_context(|| format!("{} -> {}", cli.input.display(), cli.output.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.message());
    }

    Ok(())
}

fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
