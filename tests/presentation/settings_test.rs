use std::fs;
use std::time::Duration;

use docprompt::domain::CostPerToken;
use docprompt::presentation::config::{
    Environment, Page, Settings, SettingsError, StorageProviderSetting,
};

fn write_config(dir: &tempfile::TempDir, file: &str, contents: &str) {
    fs::write(dir.path().join(file), contents).unwrap();
}

#[test]
fn given_empty_config_dir_when_loading_then_defaults_apply() {
    let dir = tempfile::TempDir::new().unwrap();

    let settings = Settings::load_from(dir.path(), Environment::Test).unwrap();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.completion.deployment, "restaurant");
    assert_eq!(settings.max_tokens().value(), 1000);
    assert_eq!(settings.temperature().value(), 0.7);
    assert_eq!(settings.cost_per_token(), CostPerToken::default());
    assert_eq!(settings.storage.provider, StorageProviderSetting::Azure);
    assert!(settings.ui.language_labels);
    assert!(settings.ui.costing_page);
    assert_eq!(settings.ui.default_page, Page::Chat);
    assert_eq!(settings.session.idle_timeout(), Duration::from_secs(3600));
    assert_eq!(settings.session.sweep_interval(), Duration::from_secs(300));
}

#[test]
fn given_environment_file_when_loading_then_it_overrides_default_file() {
    let dir = tempfile::TempDir::new().unwrap();
    write_config(
        &dir,
        "default.toml",
        "[storage]\nprovider = \"local\"\ncontainer = \"base\"\n",
    );
    write_config(&dir, "test.toml", "[storage]\ncontainer = \"override\"\n");

    let settings = Settings::load_from(dir.path(), Environment::Test).unwrap();

    assert_eq!(settings.storage.provider, StorageProviderSetting::Local);
    assert_eq!(settings.storage.container, "override");
}

#[test]
fn given_out_of_range_temperature_when_loading_then_validation_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    write_config(&dir, "default.toml", "[completion]\ntemperature = 1.7\n");

    let result = Settings::load_from(dir.path(), Environment::Test);

    assert!(matches!(
        result,
        Err(SettingsError::Invalid {
            key: "completion.temperature",
            ..
        })
    ));
}

#[test]
fn given_zero_cost_per_token_when_loading_then_validation_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    write_config(&dir, "default.toml", "[costing]\ncost_per_token = 0.0\n");

    let result = Settings::load_from(dir.path(), Environment::Test);

    assert!(matches!(
        result,
        Err(SettingsError::Invalid {
            key: "costing.cost_per_token",
            ..
        })
    ));
}

#[test]
fn given_raw_code_variant_when_loading_then_ui_flags_are_read() {
    let dir = tempfile::TempDir::new().unwrap();
    write_config(
        &dir,
        "default.toml",
        "[ui]\nlanguage_labels = false\ncosting_page = false\ndefault_page = \"upload\"\n",
    );

    let settings = Settings::load_from(dir.path(), Environment::Test).unwrap();

    assert!(!settings.ui.language_labels);
    assert!(!settings.ui.costing_page);
    assert_eq!(settings.ui.default_page, Page::Upload);
}

#[test]
fn given_environment_names_when_parsing_then_aliases_are_accepted() {
    assert_eq!(
        Environment::try_from("Production".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(
        Environment::try_from("dev".to_string()),
        Ok(Environment::Local)
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_session_section_when_loading_then_idle_timeout_is_read() {
    let dir = tempfile::TempDir::new().unwrap();
    write_config(&dir, "default.toml", "[session]\nidle_timeout_seconds = 90\n");

    let settings = Settings::load_from(dir.path(), Environment::Test).unwrap();

    assert_eq!(settings.session.idle_timeout(), Duration::from_secs(90));
}

#[test]
fn given_zero_idle_timeout_when_loading_then_validation_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    write_config(&dir, "default.toml", "[session]\nidle_timeout_seconds = 0\n");

    let result = Settings::load_from(dir.path(), Environment::Test);

    assert!(matches!(
        result,
        Err(SettingsError::Invalid { key: "session", .. })
    ));
}
