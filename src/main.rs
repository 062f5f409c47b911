//! ghrm - GitHub Repository Manager.
//!
//! This is the binary entry point. It parses arguments, installs logging and
//! maps the outcome of the run to an exit code:
//!
//! - `0`: every repository was processed successfully
//! - `1`: configuration, credential or session failure, or a repository failed
//! - `2`: invalid command-line usage (handled by clap)

mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.log_level());

    match cli.execute().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
