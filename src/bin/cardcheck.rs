//! CLI tool for card number validation, generation and classification.
//!
//! # Usage
//!
//! ```bash
//! # Validate numbers (OK / INCORRECT per number, exit 1 if any is invalid)
//! cardcheck validate 4532015112830366 4532015112830367
//! echo "4532015112830366" | cardcheck validate --stdin
//!
//! # List every valid completion of a template, or pick one
//! cardcheck generate "453201511283****"
//! cardcheck generate --pick "453201511283****"
//!
//! # Classify numbers against brand and issuer tables
//! cardcheck information --brands=brands.txt --issuers=issuers.txt 4400430180300003
//!
//! # Generate numbers for a brand whose stored prefix is a template
//! cardcheck issue --brands=brands.txt --issuers=issuers.txt --brand=VISA --issuer="Kaspi Gold"
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use cardcheck::commands::{self, OutputFormat, Outcome};
use cardcheck::generate::rng_from_seed;
use cardcheck::input::collect_numbers;
use cardcheck::{BatchValidator, Error, MIN_LENGTH};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(
    author,
    version,
    about = "Luhn validation, test number generation and card classification"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate card numbers
    Validate {
        /// Card numbers to validate
        #[arg(required_unless_present = "stdin")]
        numbers: Vec<String>,

        /// Also read whitespace-separated numbers from standard input
        #[arg(long)]
        stdin: bool,

        /// Minimum accepted length
        #[arg(long, default_value_t = MIN_LENGTH)]
        min_length: usize,
    },

    /// Generate valid numbers from a template ending in four '*'
    Generate {
        /// Template, e.g. 453201511283****
        template: String,

        /// Print a single randomly chosen number
        #[arg(long)]
        pick: bool,

        /// Seed for the random pick (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show validity, brand and issuer of card numbers
    Information {
        /// Brand table file (name: prefix per line)
        #[arg(long)]
        brands: PathBuf,

        /// Issuer table file (name: prefix per line)
        #[arg(long)]
        issuers: PathBuf,

        /// Card numbers to classify
        numbers: Vec<String>,

        /// Also read whitespace-separated numbers from standard input
        #[arg(long)]
        stdin: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Generate numbers for a brand and issuer
    Issue {
        /// Brand table file (name: prefix per line)
        #[arg(long)]
        brands: PathBuf,

        /// Issuer table file (name: prefix per line)
        #[arg(long)]
        issuers: PathBuf,

        /// Brand name; its prefix must end in four '*'
        #[arg(long)]
        brand: String,

        /// Issuer name
        #[arg(long)]
        issuer: String,

        /// Print a single randomly chosen number
        #[arg(long)]
        pick: bool,

        /// Seed for the random pick (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(outcome) => ExitCode::from(outcome.code() as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<Outcome, Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = match command {
        Commands::Validate {
            numbers,
            stdin,
            min_length,
        } => {
            let numbers = collect_numbers(numbers, stdin, io::stdin().lock())?;
            let validator = BatchValidator::new().with_min_length(min_length);
            commands::validate(&numbers, &validator, &mut out, &mut io::stderr())?
        }
        Commands::Generate {
            template,
            pick,
            seed,
        } => commands::generate(&template, pick, &mut rng_from_seed(seed), &mut out)?,
        Commands::Information {
            brands,
            issuers,
            numbers,
            stdin,
            output,
        } => {
            let numbers = collect_numbers(numbers, stdin, io::stdin().lock())?;
            let (brands, issuers) = commands::load_tables(brands, issuers)?;
            commands::information(&numbers, &brands, &issuers, output, &mut out)?
        }
        Commands::Issue {
            brands,
            issuers,
            brand,
            issuer,
            pick,
            seed,
        } => {
            let (brands, issuers) = commands::load_tables(brands, issuers)?;
            commands::issue(
                &brands,
                &issuers,
                &brand,
                &issuer,
                pick,
                &mut rng_from_seed(seed),
                &mut out,
            )?
        }
    };

    out.flush()?;
    Ok(outcome)
}
