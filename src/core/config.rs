//! Launch configuration: default model, system prompt, and the model list.
//!
//! Values are sourced from `config.toml`, the environment, and CLI overrides, then
//! frozen into a [`LaunchConfig`] for the lifetime of the process.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::models::{self, ChatModel};
use crate::core::paths;

/// Model used when neither the config file nor the CLI names one.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// System prompt used when neither the config file nor the environment sets one.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant named Elia.";

/// Environment variable overriding the default system prompt.
pub const SYSTEM_PROMPT_ENV: &str = "ELIA_SYSTEM_PROMPT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("model name must not be empty")]
    EmptyModelName,
    #[error("invalid api_base {value:?}: {reason}")]
    InvalidApiBase { value: String, reason: String },
}

/// The config of the application at launch.
///
/// Frozen after construction: there are no mutating methods, and "changes" such as
/// [`LaunchConfig::with_default_model`] return a new value.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchConfig {
    default_model: String,
    system_prompt: String,
    models: Vec<ChatModel>,
    builtin_models: Vec<ChatModel>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self::new(None, None, Vec::new())
    }
}

impl LaunchConfig {
    /// Build a config. `None` selects the default model and the environment/default
    /// system prompt. `default_model` is not checked against the model list.
    pub fn new(
        default_model: Option<String>,
        system_prompt: Option<String>,
        models: Vec<ChatModel>,
    ) -> Self {
        Self {
            default_model: default_model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            system_prompt: system_prompt
                .unwrap_or_else(|| resolve_system_prompt(env::var(SYSTEM_PROMPT_ENV).ok())),
            models,
            builtin_models: models::builtin_models(),
        }
    }

    /// Copy of this config with a different default model.
    pub fn with_default_model(&self, default_model: impl Into<String>) -> Self {
        Self {
            default_model: default_model.into(),
            ..self.clone()
        }
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// User-configured models, in config order.
    pub fn models(&self) -> &[ChatModel] {
        &self.models
    }

    pub fn builtin_models(&self) -> &[ChatModel] {
        &self.builtin_models
    }

    /// User models followed by builtin models. Names are not de-duplicated.
    pub fn all_models(&self) -> Vec<ChatModel> {
        self.models
            .iter()
            .chain(self.builtin_models.iter())
            .cloned()
            .collect()
    }

    /// First model named `name` in `all_models()` order.
    pub fn find_model(&self, name: &str) -> Option<&ChatModel> {
        models::find_model(&self.models, name)
            .or_else(|| models::find_model(&self.builtin_models, name))
    }

    /// The model named by `default_model`, or the first known model when that name is unknown.
    pub fn default_chat_model(&self) -> Option<&ChatModel> {
        if let Some(model) = self.find_model(&self.default_model) {
            return Some(model);
        }
        log::warn!(
            "Default model {:?} is not configured; falling back to the first known model",
            self.default_model
        );
        self.models.iter().chain(self.builtin_models.iter()).next()
    }
}

/// Environment value when present, otherwise the builtin prompt.
fn resolve_system_prompt(env_value: Option<String>) -> String {
    env_value.unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string())
}

/// Shape of config.toml.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_model: Option<String>,
    system_prompt: Option<String>,
    #[serde(default)]
    models: Vec<ChatModel>,
}

/// Parse config.toml contents. `path` is only used in error messages.
pub fn parse(contents: &str, path: &Path) -> Result<LaunchConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LaunchConfig::new(
        file.default_model,
        file.system_prompt,
        file.models,
    ))
}

/// Load the launch config from `path`, or from the default config file when `path` is None.
/// A missing file yields the defaults.
pub fn load(path: Option<&Path>) -> Result<LaunchConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match paths::config_file() {
            Some(p) => p,
            None => {
                log::debug!("No config directory available; using defaults");
                return Ok(LaunchConfig::default());
            }
        },
    };

    let contents = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No config file at {}; using defaults", path.display());
            return Ok(LaunchConfig::default());
        }
        Err(source) => return Err(ConfigError::Io { path, source }),
    };

    log::debug!("Loading config from {}", path.display());
    parse(&contents, &path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_model(name: &str) -> ChatModel {
        ChatModel::new(name).unwrap()
    }

    #[test]
    fn empty_models_all_models_equals_builtins() {
        let config = LaunchConfig::new(None, Some("p".into()), Vec::new());
        assert_eq!(config.all_models(), config.builtin_models().to_vec());
        assert_eq!(config.all_models().len(), 5);
        assert_eq!(config.all_models()[0].provider(), Some("OpenAI"));
        assert_eq!(config.all_models()[4].provider(), Some("Anthropic"));
    }

    #[test]
    fn user_models_come_first_in_order() {
        let users = vec![user_model("b-model"), user_model("a-model")];
        let config = LaunchConfig::new(None, Some("p".into()), users.clone());
        let all = config.all_models();
        assert_eq!(all.len(), 2 + 5);
        assert_eq!(&all[..2], &users[..]);
        assert_eq!(all[2].name(), "gpt-3.5-turbo");
    }

    #[test]
    fn duplicate_names_are_kept_and_user_model_wins() {
        let users = vec![user_model("gpt-3.5-turbo").with_display_name("Local 3.5")];
        let config = LaunchConfig::new(None, Some("p".into()), users);
        assert_eq!(config.all_models().len(), 6);
        assert_eq!(
            config.find_model("gpt-3.5-turbo").unwrap().label(),
            "Local 3.5"
        );
    }

    #[test]
    fn defaults() {
        let config = LaunchConfig::new(None, Some("p".into()), Vec::new());
        assert_eq!(config.default_model(), DEFAULT_MODEL);
        assert!(config.models().is_empty());
    }

    #[test]
    fn system_prompt_falls_back_to_builtin() {
        assert_eq!(
            resolve_system_prompt(None),
            "You are a helpful assistant named Elia."
        );
    }

    #[test]
    fn system_prompt_uses_environment_value() {
        assert_eq!(resolve_system_prompt(Some("X".into())), "X");
    }

    #[test]
    fn explicit_system_prompt_is_kept() {
        let config = LaunchConfig::new(None, Some("Be terse.".into()), Vec::new());
        assert_eq!(config.system_prompt(), "Be terse.");
    }

    #[test]
    fn unknown_default_model_is_accepted() {
        let config = LaunchConfig::new(Some("not-a-real-model".into()), None, Vec::new());
        assert_eq!(config.default_model(), "not-a-real-model");
        assert_eq!(config.default_chat_model().unwrap().name(), "gpt-3.5-turbo");
    }

    #[test]
    fn with_default_model_returns_new_value() {
        let config = LaunchConfig::new(None, Some("p".into()), Vec::new());
        let changed = config.with_default_model("gpt-4-turbo");
        assert_eq!(config.default_model(), "gpt-3.5-turbo");
        assert_eq!(changed.default_model(), "gpt-4-turbo");
        assert_eq!(changed.default_chat_model().unwrap().label(), "GPT-4 Turbo");
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            default_model = "llama3"
            system_prompt = "You are a pirate."

            [[models]]
            name = "llama3"
            display_name = "Llama 3"
            provider = "LocalAI"
            api_base = "http://localhost:8080/v1"
            temperature = 0.2
            max_retries = 3
        "#;
        let config = parse(toml, Path::new("config.toml")).unwrap();
        assert_eq!(config.default_model(), "llama3");
        assert_eq!(config.system_prompt(), "You are a pirate.");
        assert_eq!(config.models().len(), 1);
        let llama = config.default_chat_model().unwrap();
        assert_eq!(llama.label(), "Llama 3");
        assert_eq!(llama.temperature(), 0.2);
        assert_eq!(llama.max_retries(), 3);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let err = parse("colour = \"blue\"", Path::new("config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = load(Some(&dir.path().join("config.toml"))).unwrap();
        assert_eq!(config.default_model(), DEFAULT_MODEL);
        assert!(config.models().is_empty());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_model = \"gpt-4-turbo\"\n").unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.default_model(), "gpt-4-turbo");
    }

    #[test]
    fn load_reports_invalid_model_entry() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[[models]]\nname = \"\"\n").unwrap();
        assert!(matches!(
            load(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }
}
