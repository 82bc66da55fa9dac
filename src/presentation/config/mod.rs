mod environment;
mod settings;
mod ui;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    CompletionSettings, CostingSettings, ENV_PREFIX, LoggingSettings, ServerSettings,
    SessionSettings, Settings, SettingsError, StorageProviderSetting, StorageSettings,
    TranslationSettings,
};
pub use ui::{LanguageOption, Page, UiSettings};
