use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use config::Config;
use error::{print_error_and_exit, CliError};

#[derive(Parser)]
#[command(name = "seqprep")]
#[command(about = "SeqPrep - fixed-length nucleotide sequence preparation")]
#[command(version)]
#[command(long_about = "
SeqPrep reads FASTA input into a single concatenated sequence and either encodes it
into a fixed-length vector for a classifier, or splits it into fixed-length,
header-free FASTA chunk files.

Examples:
  seqprep split --input genome.fa --out-dir chunks --chunk-length 4242 --num-files 168
  seqprep encode --input sample.fa --target-length 4242 --format json
  seqprep predict --input sample.fa --model model.json
  seqprep stats --input genome.fa
  seqprep config --example > seqprep.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of threads to use
    #[arg(short, long, global = true)]
    pub threads: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a sequence into fixed-length, header-free FASTA files
    Split {
        /// Input FASTA file ('-' for stdin, .gz supported)
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for chunk files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Bases per chunk
        #[arg(long)]
        chunk_length: Option<NonZeroUsize>,

        /// Number of chunk files (default: as many full chunks as fit)
        #[arg(short, long)]
        num_files: Option<NonZeroUsize>,

        /// Bases per output line
        #[arg(long)]
        line_width: Option<NonZeroUsize>,

        /// Chunk file name prefix
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Encode a sequence into a fixed-length integer vector
    Encode {
        /// Input FASTA file ('-' for stdin, .gz supported)
        #[arg(short, long)]
        input: PathBuf,

        /// Encoded vector length
        #[arg(long)]
        target_length: Option<NonZeroUsize>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Encode a sequence and score it with a model
    Predict {
        /// Input FASTA file ('-' for stdin, .gz supported)
        #[arg(short, long)]
        input: PathBuf,

        /// Model file (JSON logistic model)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Encoded vector length
        #[arg(long)]
        target_length: Option<NonZeroUsize>,

        /// Decision threshold for a positive label
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Show composition and chunk capacity of a sequence
    Stats {
        /// Input FASTA file ('-' for stdin, .gz supported)
        #[arg(short, long)]
        input: PathBuf,

        /// Chunk length used for the capacity estimate
        #[arg(long)]
        chunk_length: Option<NonZeroUsize>,
    },

    /// Show or write configuration
    Config {
        /// Print the default configuration
        #[arg(long)]
        example: bool,

        /// Write the default configuration to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).map_err(|e| CliError::config(format!("{:#}", e)))?;

    let threads = cli.threads.unwrap_or(config.general.threads);
    if threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to set thread count")?;
    }

    match cli.command {
        Commands::Split {
            input,
            out_dir,
            chunk_length,
            num_files,
            line_width,
            prefix,
        } => commands::split::execute(&config, input, out_dir, chunk_length, num_files, line_width, prefix),

        Commands::Encode {
            input,
            target_length,
            format,
        } => commands::encode::execute(&config, input, target_length, format),

        Commands::Predict {
            input,
            model,
            target_length,
            threshold,
        } => commands::predict::execute(&config, input, model, target_length, threshold),

        Commands::Stats { input, chunk_length } => commands::stats::execute(&config, input, chunk_length),

        Commands::Config { example, output } => commands::config::execute(&config, example, output),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Err(err) => match err.downcast_ref::<CliError>() {
            Some(cli_err) => print_error_and_exit(cli_err),
            None => Err(err),
        },
        ok => ok,
    }
}
