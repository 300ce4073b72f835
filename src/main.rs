//! # Elia - terminal chat client
//!
//! Entry point: parses arguments, loads the launch configuration, then either runs a
//! subcommand (`models`, `config`, `tokens`, `completions`) or opens the TUI.

mod cli;
mod core;
mod run;
mod tui;

use clap::Parser;
use dotenv::dotenv;

use cli::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let mut args = Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let config = match args.model.as_deref() {
        Some(model) => config.with_default_model(model),
        None => config,
    };

    if let Some(command) = args.command.take() {
        return run::run_command(command, &args, &config);
    }

    run::launch_tui(config)
}
