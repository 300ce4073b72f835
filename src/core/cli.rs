//! CLI-only commands: config info, models list, token counts.
//!
//! These run without opening the TUI and produce plain text output.

use std::io::{self, Read};
use std::path::Path;

use secrecy::ExposeSecret;

use crate::core::app;
use crate::core::config::LaunchConfig;
use crate::core::models::{self, ChatModel};
use crate::core::paths;
use crate::core::tokens::{self, TokenizerError};

/// Run the `config` command: display config path, default model, and system prompt.
pub fn run_config(config: &LaunchConfig, config_path: Option<&Path>) {
    let path = config_path
        .map(Path::to_path_buf)
        .or_else(paths::config_file)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());

    println!("{} {}", app::NAME, app::VERSION);
    println!("Config:        {}", path);
    println!("Default model: {}", config.default_model());
    println!("System prompt: {}", config.system_prompt());
    println!(
        "Models:        {} configured, {} builtin",
        config.models().len(),
        config.builtin_models().len()
    );
}

/// One-line summary: name, display name, provider.
fn model_row(model: &ChatModel) -> String {
    format!(
        "{:<28} {:<20} {}",
        model.name(),
        model.label(),
        model.provider().unwrap_or("—")
    )
}

/// Every field of a model; the API key is only reported as set or not.
fn model_details(model: &ChatModel) -> Vec<String> {
    let or_dash = |v: Option<&str>| v.unwrap_or("—").to_string();
    vec![
        model.name().to_string(),
        format!("  display name: {}", or_dash(model.display_name())),
        format!("  provider:     {}", or_dash(model.provider())),
        format!("  product:      {}", or_dash(model.product())),
        format!("  description:  {}", or_dash(model.description())),
        format!(
            "  api base:     {}",
            or_dash(model.api_base().map(|u| u.as_str()))
        ),
        format!("  organization: {}", or_dash(model.organization())),
        format!(
            "  api key:      {}",
            match model.api_key() {
                Some(key) if !key.expose_secret().is_empty() => "set ✓",
                _ => "not set",
            }
        ),
        format!("  temperature:  {}", model.temperature()),
        format!("  max retries:  {}", model.max_retries()),
    ]
}

/// Run the `models` command: list all models, optionally filtered.
pub fn run_models(config: &LaunchConfig, query: Option<&str>, long: bool) {
    let all = config.all_models();
    let filtered = models::filter_models(&all, query.unwrap_or(""));
    if filtered.is_empty() {
        println!("No models match filter");
        return;
    }
    for model in filtered {
        if long {
            for line in model_details(model) {
                println!("{}", line);
            }
        } else {
            println!("{}", model_row(model));
        }
    }
}

/// Run the `tokens` command: print the token count (and optional breakdown) of `text`.
/// `None` or `-` reads the text from stdin.
pub fn run_tokens(
    model: &str,
    text: Option<&str>,
    breakdown: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = match text {
        Some(t) if t != "-" => t.to_string(),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let (count, pieces) = count_tokens(model, &text, breakdown)?;
    for piece in pieces.into_iter().flatten() {
        println!("{:>8}  {:?}", piece.id, piece.text);
    }
    println!("{} tokens", count);
    Ok(())
}

/// Token count of `text`; the per-token breakdown is only decoded when asked for.
fn count_tokens(
    model: &str,
    text: &str,
    breakdown: bool,
) -> Result<(usize, Option<Vec<tokens::TokenPiece>>), TokenizerError> {
    let encoder = tokens::encoding_for_model(model)?;
    let ids = encoder.encode(text);
    let pieces = breakdown.then(|| tokens::analyze(&ids, &encoder));
    Ok((ids.len(), pieces))
}
