//! probebench command line driver.

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use probebench_console::LevelFilter;

mod cli;
mod commands;
mod error;

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command();

    if !matches!(command, Command::Base { .. }) {
        probebench_console::print_banner();
        probebench_console::init_with_level(if cli.global.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        });
    }

    match commands::run(&command, &cli.global) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
