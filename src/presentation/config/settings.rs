use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::{CostPerToken, MaxTokens, Temperature};

use super::environment::Environment;
use super::ui::UiSettings;

pub const ENV_PREFIX: &str = "DOCPROMPT";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub completion: CompletionSettings,
    pub translation: TranslationSettings,
    pub costing: CostingSettings,
    pub ui: UiSettings,
    pub session: SessionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Azure,
    Local,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub container: String,
    #[serde(default)]
    pub account_url: Option<String>,
    #[serde(default)]
    pub access_key: Option<String>,
    pub local_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionSettings {
    pub api_base: String,
    #[serde(default)]
    pub api_key: String,
    pub api_version: String,
    pub deployment: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_seconds: u64,
}

impl CompletionSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub endpoint: String,
    #[serde(default)]
    pub key: String,
    pub region: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CostingSettings {
    pub cost_per_token: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// Idle time after which a session's state is discarded.
    pub idle_timeout_seconds: u64,
    pub sweep_interval_seconds: u64,
}

impl SessionSettings {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_seconds)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("environment: {0}")]
    Environment(String),
    #[error("config: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl Settings {
    /// Loads settings from `./config` and `DOCPROMPT__*` variables.
    pub fn load() -> Result<(Self, Environment), SettingsError> {
        let environment = Environment::detect().map_err(SettingsError::Environment)?;
        let settings = Self::load_from(Path::new("config"), environment)?;
        Ok((settings, environment))
    }

    /// Layers defaults, `default.toml`, `{environment}.toml`, then the
    /// environment. Both files are optional.
    pub fn load_from(config_dir: &Path, environment: Environment) -> Result<Self, SettingsError> {
        let settings: Settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("storage.provider", "azure")?
            .set_default("storage.container", "documents")?
            .set_default("storage.local_path", "./data")?
            .set_default("completion.api_base", "https://localhost")?
            .set_default("completion.api_version", "2023-05-15")?
            .set_default("completion.deployment", "restaurant")?
            .set_default("completion.temperature", f64::from(Temperature::DEFAULT))?
            .set_default("completion.max_tokens", i64::from(MaxTokens::DEFAULT))?
            .set_default("completion.timeout_seconds", 120_i64)?
            .set_default(
                "translation.endpoint",
                "https://api.cognitive.microsofttranslator.com",
            )?
            .set_default("translation.region", "global")?
            .set_default("costing.cost_per_token", CostPerToken::DEFAULT)?
            .set_default("ui.language_labels", true)?
            .set_default("ui.costing_page", true)?
            .set_default("ui.default_page", "chat")?
            .set_default("session.idle_timeout_seconds", 3600_i64)?
            .set_default("session.sweep_interval_seconds", 300_i64)?
            .set_default("logging.level", "info,docprompt=debug,tower_http=debug")?
            .set_default("logging.json", false)?
            .add_source(config::File::from(config_dir.join("default")).required(false))
            .add_source(config::File::from(config_dir.join(environment.as_str())).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        Temperature::new(self.completion.temperature).map_err(|e| SettingsError::Invalid {
            key: "completion.temperature",
            reason: e.to_string(),
        })?;
        MaxTokens::new(self.completion.max_tokens).map_err(|e| SettingsError::Invalid {
            key: "completion.max_tokens",
            reason: e.to_string(),
        })?;
        CostPerToken::new(self.costing.cost_per_token).ok_or_else(|| SettingsError::Invalid {
            key: "costing.cost_per_token",
            reason: format!("{} is not a positive rate", self.costing.cost_per_token),
        })?;
        if self.session.idle_timeout_seconds == 0 || self.session.sweep_interval_seconds == 0 {
            return Err(SettingsError::Invalid {
                key: "session",
                reason: "idle timeout and sweep interval must be positive".to_string(),
            });
        }
        if self.storage.container.trim().is_empty() {
            return Err(SettingsError::Invalid {
                key: "storage.container",
                reason: "container name is empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn temperature(&self) -> Temperature {
        Temperature::new(self.completion.temperature).unwrap_or_default()
    }

    pub fn max_tokens(&self) -> MaxTokens {
        MaxTokens::new(self.completion.max_tokens).unwrap_or_default()
    }

    pub fn cost_per_token(&self) -> CostPerToken {
        CostPerToken::new(self.costing.cost_per_token).unwrap_or_default()
    }
}
