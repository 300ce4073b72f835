//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  elia                               Launch interactive TUI
  elia --model gpt-4-turbo           Launch with a specific model selected
  elia models --query claude         List configured and builtin models
  elia config                        Show config path, default model and system prompt
  elia tokens --model gpt-4-turbo -  Count tokens of stdin
  elia completions bash              Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "A terminal chat client for OpenAI and Anthropic models",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Model to select at startup (overrides default_model from config.toml)
    #[arg(short = 'm', long, help = "Model name (e.g. gpt-4-turbo)")]
    pub model: Option<String>,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show config path, default model, and system prompt
    Config,
    /// List available models (user-configured first, then builtin)
    Models {
        /// Filter models by name or display name
        #[arg(long)]
        query: Option<String>,
        /// Show every field of each model
        #[arg(long)]
        long: bool,
    },
    /// Count the tokens of a text for a model
    Tokens {
        /// Model whose tokenizer to use
        #[arg(long)]
        model: String,
        /// Text to tokenize ('-' or omitted reads stdin)
        text: Option<String>,
        /// Print each token id and its text
        #[arg(long)]
        breakdown: bool,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
