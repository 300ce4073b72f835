//! The `ChatModel` descriptor: one invocable LLM endpoint.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use url::Url;

use crate::core::config::ConfigError;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 1.0;

/// Placeholder written instead of a secret when serializing.
const REDACTED: &str = "**********";

/// Describes a model the user can chat with.
///
/// `name` must match the provider's own model name (e.g. `gpt-3.5-turbo`); it is not
/// checked locally beyond being non-empty. Values are immutable once built: the `with_*`
/// setters consume `self` and return the updated descriptor.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "ChatModelEntry")]
pub struct ChatModel {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<String>,
    /// Used in place of the provider's environment variable (OPENAI_API_KEY, ...).
    #[serde(
        serialize_with = "serialize_redacted",
        skip_serializing_if = "Option::is_none"
    )]
    api_key: Option<SecretString>,
    /// Base URL override, e.g. a LocalAI server.
    #[serde(skip_serializing_if = "Option::is_none")]
    api_base: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Grouping label such as `ChatGPT` or `Claude 3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    product: Option<String>,
    temperature: f32,
    /// Retries after a failed request; passed through to the request layer.
    max_retries: u32,
}

/// Raw shape of a `[[models]]` table in config.toml.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ChatModelEntry {
    name: String,
    display_name: Option<String>,
    provider: Option<String>,
    api_key: Option<String>,
    api_base: Option<String>,
    organization: Option<String>,
    description: Option<String>,
    product: Option<String>,
    temperature: Option<f32>,
    max_retries: Option<u32>,
}

impl TryFrom<ChatModelEntry> for ChatModel {
    type Error = ConfigError;

    fn try_from(entry: ChatModelEntry) -> Result<Self, Self::Error> {
        let mut model = ChatModel::new(entry.name)?
            .with_temperature(entry.temperature.unwrap_or(DEFAULT_TEMPERATURE))
            .with_max_retries(entry.max_retries.unwrap_or(0));
        if let Some(display_name) = entry.display_name {
            model = model.with_display_name(display_name);
        }
        if let Some(provider) = entry.provider {
            model = model.with_provider(provider);
        }
        if let Some(api_key) = entry.api_key {
            model = model.with_api_key(api_key);
        }
        if let Some(api_base) = entry.api_base {
            model = model.with_api_base(&api_base)?;
        }
        if let Some(organization) = entry.organization {
            model = model.with_organization(organization);
        }
        if let Some(description) = entry.description {
            model = model.with_description(description);
        }
        if let Some(product) = entry.product {
            model = model.with_product(product);
        }
        Ok(model)
    }
}

fn serialize_redacted<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match secret {
        Some(_) => serializer.serialize_str(REDACTED),
        None => serializer.serialize_none(),
    }
}

impl ChatModel {
    /// Create a model with default settings. Fails if `name` is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyModelName);
        }
        Ok(Self::with_defaults(name))
    }

    /// Entry of a builtin catalog table. Table names are non-empty literals.
    pub(super) fn builtin(name: &'static str) -> Self {
        debug_assert!(!name.trim().is_empty(), "builtin model without a name");
        Self::with_defaults(name.to_string())
    }

    fn with_defaults(name: String) -> Self {
        Self {
            name,
            display_name: None,
            provider: None,
            api_key: None,
            api_base: None,
            organization: None,
            description: None,
            product: None,
            temperature: DEFAULT_TEMPERATURE,
            max_retries: 0,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key.into()));
        self
    }

    /// Set the base URL. Fails with `InvalidApiBase` when `api_base` does not parse
    /// or is not an http(s) URL.
    pub fn with_api_base(mut self, api_base: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidApiBase {
            value: api_base.to_string(),
            reason,
        };
        let url = Url::parse(api_base).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "scheme {:?} is not http or https",
                url.scheme()
            )));
        }
        self.api_base = Some(url);
        Ok(self)
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Display name when set, otherwise the provider model name.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }

    pub fn api_base(&self) -> Option<&Url> {
        self.api_base.as_ref()
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

impl PartialEq for ChatModel {
    fn eq(&self, other: &Self) -> bool {
        let same_key = match (&self.api_key, &other.api_key) {
            (Some(a), Some(b)) => a.expose_secret() == b.expose_secret(),
            (None, None) => true,
            _ => false,
        };
        same_key
            && self.name == other.name
            && self.display_name == other.display_name
            && self.provider == other.provider
            && self.api_base == other.api_base
            && self.organization == other.organization
            && self.description == other.description
            && self.product == other.product
            && self.temperature == other.temperature
            && self.max_retries == other.max_retries
    }
}
