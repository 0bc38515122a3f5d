mod cli;
mod commands;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use stegvault_core::{ErrorCode, StegVaultError};

use crate::cli::CliArgs;

pub type CliResult<T> = Result<T, StegVaultError>;

fn main() -> ExitCode {
    // stderr carries exactly one diagnostic line unless RUST_LOG asks for more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            // clap would exit with 2, which is taken by MISSING_PASSWORD
            let message = e.to_string();
            let message = message
                .trim_start_matches("error: ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            eprintln!("ERROR [{}]: {message}", ErrorCode::Usage);
            return ExitCode::from(ErrorCode::Usage.exit_code());
        }
    };

    match args.run() {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            let code = e.code();
            eprintln!("ERROR [{code}]: {e}");
            ExitCode::from(code.exit_code())
        }
    }
}
