//! qlingua command-line interface
//!
//! Reads, converts and simulates circuits in the canonical token format and
//! the supported toolkit formats.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use qlingua_cli::commands::{convert, formats, parse, simulate, version};
use qlingua_cli::{CliConfig, Format, log_filter};

/// qlingua - a line-based interchange format for quantum circuits
#[derive(Parser)]
#[command(name = "qlingua")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML configuration file
    #[arg(long, global = true, env = "QLINGUA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a canonical circuit and print each gate record
    Parse {
        /// Input file, one gate token per line
        #[arg(short, long)]
        input: String,
    },

    /// Convert a circuit between formats
    Convert {
        /// Input file
        #[arg(short, long)]
        input: String,

        /// Format of the input file
        #[arg(long, value_enum)]
        from: Format,

        /// Format to convert to
        #[arg(long, value_enum)]
        to: Format,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the measurement probability distribution of a circuit
    Simulate {
        /// Input file
        #[arg(short, long)]
        input: String,

        /// Format of the input file
        #[arg(short, long, value_enum, default_value = "canonical")]
        format: Format,

        /// Print the distribution as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported circuit formats
    Formats,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let result = CliConfig::load(cli.config.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|config| {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new(log_filter(cli.verbose, &config.logging.level)))
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            run(cli.command, &config)
        });

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &CliConfig) -> anyhow::Result<()> {
    match command {
        Commands::Parse { input } => parse::execute(&input, &config.output),

        Commands::Convert {
            input,
            from,
            to,
            output,
        } => convert::execute(&input, from, to, output.as_deref(), &config.output),

        Commands::Simulate {
            input,
            format,
            json,
        } => simulate::execute(&input, format, json, &config.output),

        Commands::Formats => {
            formats::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}
