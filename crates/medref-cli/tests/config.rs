use medref_cli::cli::{Command, ConfigAction};
use medref_cli::commands;
use medref_cli::config::{
    CURRENT_VERSION, MedrefConfig, OutputFormat, load_from, migrate, save_to,
};
use serde_json::json;
use tempfile::tempdir;

#[test]
fn v0_config_gains_disclaimer_flag() {
    let migrated = migrate(json!({ "output_format": "json" }), 0).unwrap();
    assert_eq!(migrated["config_version"], json!(1));
    assert_eq!(migrated["show_disclaimer"], json!(true));
    assert_eq!(migrated["output_format"], json!("json"));
}

#[test]
fn v0_migration_keeps_existing_values() {
    let migrated = migrate(json!({ "show_disclaimer": false }), 0).unwrap();
    assert_eq!(migrated["show_disclaimer"], json!(false));
}

#[test]
fn current_version_is_untouched() {
    let raw = json!({ "config_version": 1, "show_disclaimer": false, "log_filter": "debug" });
    assert_eq!(migrate(raw.clone(), CURRENT_VERSION).unwrap(), raw);
}

#[test]
fn newer_config_is_rejected() {
    let err = migrate(json!({ "config_version": 9 }), 9).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(json!(["text"]), 0).is_err());
}

#[test]
fn missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let config = load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, MedrefConfig::default());
    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.log_filter, "warn");
    assert!(config.show_disclaimer);
}

#[test]
fn pre_versioned_file_loads_through_migration() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "output_format": "json" }"#).unwrap();

    let config = load_from(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(config.show_disclaimer);
}

#[test]
fn saved_config_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = MedrefConfig {
        config_version: 0,
        output_format: OutputFormat::Json,
        log_filter: "medref_scores=debug".to_string(),
        show_disclaimer: false,
    };

    save_to(&config, &path).unwrap();
    assert!(!path.with_extension("json.tmp").exists());

    let loaded = load_from(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.output_format, OutputFormat::Json);
    assert_eq!(loaded.log_filter, "medref_scores=debug");
    assert!(!loaded.show_disclaimer);
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_to(&MedrefConfig::default(), &path).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn invalid_json_is_reported_with_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_from(&path).unwrap_err();
    assert!(err.to_string().contains("is not valid JSON"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    commands::init_config(&path, false).unwrap();
    assert!(commands::init_config(&path, false).is_err());
    assert!(commands::init_config(&path, true).is_ok());
    assert_eq!(load_from(&path).unwrap(), MedrefConfig::default());
}

#[test]
fn v1_file_without_disclaimer_key_defaults_to_on() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"config_version":1,"output_format":"text","log_filter":"warn"}"#,
    )
    .unwrap();

    let config = load_from(&path).unwrap();
    assert!(config.show_disclaimer);
    assert_eq!(config, MedrefConfig::default());
}

#[test]
fn forced_init_replaces_a_corrupt_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let init = Command::Config {
        action: ConfigAction::Init { force: true },
    };
    let (config, load_error) = commands::load_config_for(&init, &path).unwrap();
    assert_eq!(config, MedrefConfig::default());
    assert!(
        load_error
            .unwrap()
            .to_string()
            .contains("is not valid JSON")
    );

    commands::init_config(&path, true).unwrap();
    assert_eq!(load_from(&path).unwrap(), MedrefConfig::default());
}

#[test]
fn forced_init_replaces_a_newer_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"config_version": 9}"#).unwrap();

    let init = Command::Config {
        action: ConfigAction::Init { force: true },
    };
    let (_, load_error) = commands::load_config_for(&init, &path).unwrap();
    assert!(load_error.is_some());

    commands::init_config(&path, true).unwrap();
    assert_eq!(load_from(&path).unwrap().config_version, CURRENT_VERSION);
}

#[test]
fn other_commands_still_fail_on_a_corrupt_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(commands::load_config_for(&Command::List, &path).is_err());
    let show = Command::Config {
        action: ConfigAction::Show,
    };
    assert!(commands::load_config_for(&show, &path).is_err());
}
