//! Application run modes: logger init, subcommands, TUI launch.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use clap::CommandFactory;

use crate::cli::{Args, Commands, generate};
use crate::core;
use crate::core::config::LaunchConfig;

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.command.is_none() {
        let log_path = core::paths::cache_dir().map(|d| d.join(format!("{}.log", core::app::NAME)));
        if let Some(path) = log_path
            && std::fs::create_dir_all(path.parent().unwrap_or(path.as_path())).is_ok()
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Run a subcommand to completion.
pub fn run_command(
    command: Commands,
    args: &Args,
    config: &LaunchConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Config => core::cli::run_config(config, args.config.as_deref()),
        Commands::Models { query, long } => core::cli::run_models(config, query.as_deref(), long),
        Commands::Tokens {
            model,
            text,
            breakdown,
        } => core::cli::run_tokens(&model, text.as_deref(), breakdown)?,
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }
    Ok(())
}

/// Launch the TUI. A panic inside the loop is reported after the terminal is restored.
pub fn launch_tui(config: LaunchConfig) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    match panic::catch_unwind(AssertUnwindSafe(|| crate::tui::run(Arc::clone(&config)))) {
        Ok(io_result) => io_result?,
        Err(payload) => {
            let msg = if let Some(s) = payload.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                format!("{:?}", payload)
            };
            log::error!("TUI panic: {}", msg);
            eprintln!("TUI panic: {}", msg);
            return Err(Box::new(io::Error::other("TUI panicked")) as Box<dyn std::error::Error>);
        }
    }
    Ok(())
}
