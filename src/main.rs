use clap::Parser;
use std::process::ExitCode;

use prime_pool::{
    cli::{execute_check, execute_is_prime, failure_exit_code, Cli, Commands},
    logging::{self, LogConfig},
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(LogConfig::from_verbosity(cli.verbose).with_env_overrides());

    match cli.command {
        Commands::Check {
            numbers,
            workers,
            algorithm,
            format,
            trace_channels,
        } => {
            // -vv 以上ならチャンネル操作も追跡する
            let trace_channels = trace_channels || cli.verbose >= 2;
            match execute_check(numbers, workers, algorithm, format, trace_channels).await {
                Ok(_) => ExitCode::SUCCESS,
                Err(error) => {
                    eprintln!("❌ エラー: {error:#}");
                    ExitCode::from(failure_exit_code(&error))
                }
            }
        }
        Commands::IsPrime { number, algorithm } => {
            execute_is_prime(number, algorithm);
            ExitCode::SUCCESS
        }
    }
}
