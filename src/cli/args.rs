use crate::primality::CheckAlgorithm;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prime_pool")]
#[command(about = "Check a batch of 64-bit integers for primality on a pool of workers")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a batch of numbers in parallel and report each result as it arrives
    Check {
        /// Numbers to check (defaults to the built-in batch)
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Number of workers (defaults to the number of CPUs)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Primality algorithm to use
        #[arg(short = 'a', long, value_enum, default_value_t)]
        algorithm: CheckAlgorithm,

        /// Output format for results
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Log every job/result channel operation at debug level
        #[arg(long)]
        trace_channels: bool,
    },

    /// Check a single number without the worker pool
    IsPrime {
        /// Number to check
        #[arg(allow_negative_numbers = true)]
        number: i64,

        /// Primality algorithm to use
        #[arg(short = 'a', long, value_enum, default_value_t)]
        algorithm: CheckAlgorithm,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
