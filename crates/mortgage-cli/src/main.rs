mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::mortgage::LoanArgs;

/// Fixed-rate mortgage payments and amortization schedules
#[derive(Parser)]
#[command(
    name = "mortgage",
    version,
    about = "Fixed-rate mortgage payments and amortization schedules",
    long_about = "Computes the level monthly payment of a fixed-rate mortgage and its \
                  month-by-month amortization schedule with decimal precision. Inputs come \
                  from flags, a JSON/YAML file (--input) or piped stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Emit debug logs to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full month-by-month amortization schedule
    Schedule(LoanArgs),
    /// Level monthly payment only
    Payment(LoanArgs),
    /// Lifetime totals and per-year breakdown
    Summary(LoanArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::mortgage::run_schedule(args),
        Commands::Payment(args) => commands::mortgage::run_payment(args),
        Commands::Summary(args) => commands::mortgage::run_summary(args),
        Commands::Version => {
            println!("mortgage {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
