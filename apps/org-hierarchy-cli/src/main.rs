use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "org-hierarchy")]
#[command(about = "Validate org hierarchy CSV files and query salary budgets")]
#[command(version)]
struct Cli {
    /// YAML file with parser settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a hierarchy file and print a summary
    Validate {
        /// Hierarchy CSV file
        file: PathBuf,
    },

    /// Print the salary budget of an employee and everyone below them
    Budget {
        /// Hierarchy CSV file
        file: PathBuf,

        /// Employee id, e.g. Employee2
        employee: String,
    },

    /// List the direct reports of an employee
    Reports {
        /// Hierarchy CSV file
        file: PathBuf,

        /// Employee id, e.g. Employee1
        employee: String,
    },

    /// Print the whole hierarchy
    Tree {
        /// Hierarchy CSV file
        file: PathBuf,

        /// Print JSON instead of an indented outline
        #[arg(long)]
        json: bool,
    },

    /// Write a budget report for every employee as CSV
    Export {
        /// Hierarchy CSV file
        file: PathBuf,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Validate { file } => commands::validate::execute(&config, file),

        Commands::Budget { file, employee } => {
            commands::budget::execute(&config, file, employee)
        }

        Commands::Reports { file, employee } => {
            commands::reports::execute(&config, file, employee)
        }

        Commands::Tree { file, json } => commands::tree::execute(&config, file, json),

        Commands::Export { file, output } => commands::export::execute(&config, file, output),
    }
}

/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
