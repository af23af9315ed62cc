mod app;
mod board;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::Config;
use error::AppError;
use utils::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let cli = cli.with_config(&Config::load());

    match app::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            match e {
                AppError::InvalidDate { .. } => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
