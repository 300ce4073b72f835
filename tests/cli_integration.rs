//! Integration tests that run the CLI binary.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Command running in an empty temp dir (so dotenv() won't load .env from the project root).
fn bin_with_config(tmp: &TempDir, config_path: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_elia"));
    cmd.current_dir(tmp.path())
        .env_remove("ELIA_SYSTEM_PROMPT")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config_path);
    cmd
}

/// Same, with a config path that does not exist.
fn bin(tmp: &TempDir) -> Command {
    bin_with_config(tmp, &tmp.path().join("missing.toml"))
}

fn run(cmd: &mut Command) -> Output {
    cmd.output()
        .expect("binary not found - run cargo build first")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let tmp = TempDir::new().expect("temp dir");
    let output = run(bin(&tmp).arg("--help"));
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("elia"));
    assert!(out.contains("models"));
    assert!(out.contains("tokens"));
}

#[test]
fn cli_version_succeeds() {
    let tmp = TempDir::new().expect("temp dir");
    let output = run(bin(&tmp).arg("--version"));
    assert_success(&output);
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn models_without_config_lists_builtins_in_order() {
    let tmp = TempDir::new().expect("temp dir");
    let output = run(bin(&tmp).arg("models"));
    assert_success(&output);
    let out = stdout(&output);
    let names: Vec<&str> = out
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(
        names,
        [
            "gpt-3.5-turbo",
            "gpt-4-turbo",
            "claude-3-haiku-20240307",
            "claude-3-sonnet-20240229",
            "claude-3-opus-20240229",
        ]
    );
}

#[test]
fn models_query_filters() {
    let tmp = TempDir::new().expect("temp dir");
    let output = run(bin(&tmp).args(["models", "--query", "opus"]));
    assert_success(&output);
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("claude-3-opus-20240229"));
}

#[test]
fn user_models_come_before_builtins_and_hide_keys() {
    let tmp = TempDir::new().expect("temp dir");
    let config_path = tmp.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
default_model = "local-llama"

[[models]]
name = "local-llama"
display_name = "Local Llama"
provider = "Ollama"
api_key = "super-secret-key"
api_base = "http://localhost:11434/v1"
"#,
    )
    .expect("write config");

    let output = run(bin_with_config(&tmp, &config_path).args(["models", "--long"]));
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.starts_with("local-llama"));
    assert!(out.contains("http://localhost:11434/v1"));
    assert!(out.contains("set ✓"));
    assert!(!out.contains("super-secret-key"));
}

#[test]
fn config_uses_system_prompt_from_env() {
    let tmp = TempDir::new().expect("temp dir");
    let output = run(bin(&tmp)
        .env("ELIA_SYSTEM_PROMPT", "Answer in haiku.")
        .arg("config"));
    assert_success(&output);
    assert!(stdout(&output).contains("System prompt: Answer in haiku."));
}

#[test]
fn config_defaults_without_file_or_env() {
    let tmp = TempDir::new().expect("temp dir");
    let output = run(bin(&tmp).arg("config"));
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("Default model: gpt-3.5-turbo"));
    assert!(out.contains("System prompt: You are a helpful assistant named Elia."));
    assert!(out.contains("0 configured, 5 builtin"));
}

#[test]
fn model_flag_overrides_default_model() {
    let tmp = TempDir::new().expect("temp dir");
    let output = run(bin(&tmp).args(["--model", "gpt-4-turbo", "config"]));
    assert_success(&output);
    assert!(stdout(&output).contains("Default model: gpt-4-turbo"));
}

#[test]
fn invalid_config_exits_with_error() {
    let tmp = TempDir::new().expect("temp dir");
    let config_path = tmp.path().join("config.toml");
    fs::write(&config_path, "default_model = [").expect("write config");
    let output = run(bin_with_config(&tmp, &config_path).arg("config"));
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
}

#[test]
fn tokens_counts_text_argument() {
    let tmp = TempDir::new().expect("temp dir");
    let output = run(bin(&tmp).args(["tokens", "--model", "gpt-3.5-turbo", "hello world"]));
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "2 tokens");
}

#[test]
fn tokens_reads_stdin_with_breakdown() {
    let tmp = TempDir::new().expect("temp dir");
    let mut child = bin(&tmp)
        .args(["tokens", "--model", "gpt-4-turbo", "--breakdown", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"hello")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("\"hello\""));
    assert!(out.trim_end().ends_with("1 tokens"));
}

#[test]
fn tokens_for_unknown_model_fails() {
    let tmp = TempDir::new().expect("temp dir");
    let output = run(bin(&tmp).args(["tokens", "--model", "not-a-real-model", "hi"]));
    assert!(!output.status.success());
}
