//! Inspect and check ALN protocol constants
//!
//! Usage:
//!   aln-constants show --format toml
//!   aln-constants --config ~/.aln/constants.toml validate
//!   aln-constants check-address ALN18sd2ujv24ual9c9pshtxys6j8knh6xaek9z83t
//!   aln-constants check-jurisdiction GDPR EU

use aln_config::{load_constants, ProtocolConstants};
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "aln-constants")]
#[command(about = "ALN protocol constants registry")]
#[command(version)]
struct Args {
    /// Optional TOML file with constant overrides
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the effective registry
    Show {
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Load and validate the registry
    Validate,
    /// Exit non-zero unless ADDRESS is the treasury address
    CheckAddress { address: String },
    /// Exit non-zero unless every TAG is a supported jurisdiction
    CheckJurisdiction {
        #[arg(required = true)]
        tags: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Json,
    Toml,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(&args);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let constants = load_constants(args.config.as_deref())?;

    match &args.command {
        Command::Show { format } => {
            println!("{}", render(&constants, *format)?);
            Ok(true)
        }
        Command::Validate => {
            // load_constants already validated
            info!("Protocol constants are valid");
            println!("ok");
            Ok(true)
        }
        Command::CheckAddress { address } => {
            let valid = constants.is_valid_treasury_address(address);
            println!("{}: {}", address, verdict(valid));
            if valid && !constants.is_treasury_live() {
                println!("note: treasury is reserved and not yet live");
            }
            Ok(valid)
        }
        Command::CheckJurisdiction { tags } => {
            let mut all_valid = true;
            for tag in tags {
                let valid = constants.is_valid_jurisdiction(tag);
                all_valid &= valid;
                println!("{}: {}", tag, verdict(valid));
            }
            Ok(all_valid)
        }
    }
}

fn render(constants: &ProtocolConstants, format: Format) -> Result<String> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(constants)?,
        Format::Toml => toml::to_string_pretty(constants)?,
    })
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}

fn init_logging(args: &Args) {
    let log_level = match args.log_level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
}
