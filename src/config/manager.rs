use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::assist::{AssistSettings, ConversationRules};
use crate::paths;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Settings in the `[context]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Model name sent with every request.
    pub model: Option<String>,
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
    pub temperature: Option<f32>,
    /// Cap on reply length, in tokens.
    pub max_tokens: Option<u32>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/context/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub context: ContextConfig,
    /// Conversation heuristic thresholds.
    #[serde(default)]
    pub classifier: ConversationRules,
}

/// Resolved configuration after merging CLI arguments, environment, and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    pub settings: AssistSettings,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// The API key comes from `--api-key`, then the environment variable named by
/// `api_key_env`, then `api_key` in the file. A missing key is not an error
/// here; it is reported when a request actually needs it.
///
/// # Errors
///
/// Returns an error if a configured value is out of range.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let file = &config_file.context;

    let api_key_env = file
        .api_key_env
        .clone()
        .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
    if api_key_env.trim().is_empty() {
        bail!("Invalid configuration: 'api_key_env' must name an environment variable");
    }

    let api_key = non_empty(options.api_key.clone())
        .or_else(|| non_empty(std::env::var(&api_key_env).ok()))
        .or_else(|| non_empty(file.api_key.clone()));

    let temperature = file.temperature.unwrap_or(DEFAULT_TEMPERATURE);
    if !(0.0..=2.0).contains(&temperature) {
        bail!(
            "Invalid configuration: 'temperature' must be between 0.0 and 2.0 (got {temperature})"
        );
    }

    let max_tokens = file.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);
    if max_tokens == 0 {
        bail!("Invalid configuration: 'max_tokens' must be greater than 0");
    }

    let rules = config_file.classifier;
    if rules.scan_lines == 0 || rules.min_matches == 0 {
        bail!(
            "Invalid configuration: [classifier] 'scan_lines' and 'min_matches' must be greater than 0"
        );
    }

    Ok(ResolvedConfig {
        endpoint: options
            .endpoint
            .clone()
            .or_else(|| file.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        settings: AssistSettings {
            model: options
                .model
                .clone()
                .or_else(|| file.model.clone())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            max_tokens,
            api_key,
            api_key_env,
            rules,
        },
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/context/config.toml`
    /// or `~/.config/context/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }
}
