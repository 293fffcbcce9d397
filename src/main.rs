mod cli;
mod commands;
mod logging;
mod models;
mod services;
mod utils;

use crate::cli::parser::Cli;
use crate::logging::init::init_logging;
use crate::models::config::Config;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.debug, cli.quiet);

    let config = match cli.steamapps {
        Some(dir) => Config::with_primary_library(dir),
        None => match Config::new() {
            Ok(config) => config,
            Err(e) => {
                log::error!("{:#}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    match commands::uninstall::run(&config, &cli.query, cli.yes) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
