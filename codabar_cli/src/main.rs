use codabar_core::*;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codabar")]
#[command(about = "Codabar barcode string builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read defaults from this config file instead of the standard location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a Codabar string from a numeric body
    Compose {
        /// Numeric body (leading zeros are kept)
        body: String,

        /// Start symbol (A, B, C or D)
        #[arg(long)]
        prefix: Option<String>,

        /// Stop symbol (A, B, C or D)
        #[arg(long)]
        suffix: Option<String>,

        /// Check-digit algorithm name or alias
        #[arg(long, conflicts_with = "no_check_digit")]
        algorithm: Option<String>,

        /// Do not insert a check digit, even if the config names an algorithm
        #[arg(long)]
        no_check_digit: bool,

        /// Ignore this many trailing body digits when computing the check digit
        #[arg(long)]
        exclude_trailing: Option<usize>,

        /// Print a JSON report instead of the bare string
        #[arg(long)]
        json: bool,
    },

    /// Compute a single check digit
    CheckDigit {
        /// Seed value
        seed: String,

        /// Check-digit algorithm name or alias
        #[arg(long)]
        algorithm: String,
    },

    /// List the available check-digit algorithms
    Algorithms,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        codabar_core::logging::init_with_level("debug");
    } else {
        codabar_core::logging::init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Compose {
            body,
            prefix,
            suffix,
            algorithm,
            no_check_digit,
            exclude_trailing,
            json,
        } => cmd_compose(
            &config,
            ComposeArgs {
                body,
                prefix,
                suffix,
                algorithm,
                no_check_digit,
                exclude_trailing,
            },
            json,
        ),
        Commands::CheckDigit { seed, algorithm } => cmd_check_digit(&seed, &algorithm),
        Commands::Algorithms => {
            cmd_algorithms();
            Ok(())
        }
    }
}

struct ComposeArgs {
    body: String,
    prefix: Option<String>,
    suffix: Option<String>,
    algorithm: Option<String>,
    no_check_digit: bool,
    exclude_trailing: Option<usize>,
}

/// JSON report for `compose --json`
#[derive(Serialize)]
struct ComposeReport<'a> {
    prefix: &'a Prefix,
    body: &'a Body,
    suffix: &'a Suffix,
    algorithm: Option<Algorithm>,
    check_digit: Option<&'a CheckDigit>,
    codabar: &'a str,
}

fn cmd_compose(config: &Config, args: ComposeArgs, json: bool) -> Result<()> {
    // Command-line values win over the config file
    let prefix = match args.prefix {
        Some(text) => Prefix::new(&text)?,
        None => config.prefix()?,
    };
    let suffix = match args.suffix {
        Some(text) => Suffix::new(&text)?,
        None => config.suffix()?,
    };
    let body = Body::new(&args.body)?;

    let mut check_digit = config.check_digit.clone();
    if args.no_check_digit {
        check_digit.algorithm = None;
    } else if let Some(name) = args.algorithm {
        check_digit.algorithm = Some(name.parse()?);
    }
    if let Some(count) = args.exclude_trailing {
        check_digit.exclude_trailing_digits = count;
    }
    let algorithm = check_digit.algorithm;
    let exclude = check_digit.exclude_trailing_digits;
    let options = Config {
        check_digit,
        ..config.clone()
    }
    .options();

    tracing::debug!(?algorithm, exclude, "Composing {}", body);
    let codabar = Codabar::new(&prefix, &body, &suffix, &options)?;

    if json {
        let report = ComposeReport {
            prefix: &prefix,
            body: &body,
            suffix: &suffix,
            algorithm,
            check_digit: codabar.check_digit(),
            codabar: codabar.as_str(),
        };
        let line = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        println!("{}", line);
    } else {
        println!("{}", codabar);
    }

    Ok(())
}

fn cmd_check_digit(seed: &str, algorithm: &str) -> Result<()> {
    let algorithm: Algorithm = algorithm.parse()?;
    let seed = Seed::new(seed)?;
    println!("{}", algorithm.check_digit(seed));
    Ok(())
}

fn cmd_algorithms() {
    for algorithm in Algorithm::ALL {
        println!(
            "{:<20} {:<8} {}",
            algorithm.name(),
            algorithm.alias(),
            algorithm.description()
        );
    }
}
