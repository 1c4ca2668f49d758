//! Configuration tests
//!
//! The template written by `ensure_config_exists` must stay parseable by
//! `FileConfig`; the round-trip tests guard that when fields are added.

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn default_template_round_trips() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config template should parse.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let file = parsed.unwrap();
    assert_eq!(file.batch_size, Some(DEFAULT_BATCH_SIZE));
    assert_eq!(file.theme.as_deref(), Some("Dark"));
    // Commented out in the template, so absent after parsing
    assert!(file.unsplash_access_key.is_none());
}

#[test]
fn template_logging_section_round_trips() {
    let parsed: FileConfig = toml::from_str(&Config::default().to_toml()).unwrap();
    let logging = parsed.logging.expect("[logging] section should be present");
    assert_eq!(logging.level.as_deref(), Some("info"));
    assert_eq!(logging.file_enabled, Some(false));
}

// ─────────────────────────────────────────────────────────────────────────────
// File parsing and assembly
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn file_values_override_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
        unsplash_access_key = "abc123"
        batch_size = 3
        timeout_secs = 5
        theme = "Ocean"

        [logging]
        level = "debug"
        file_enabled = true
        file_dir = "/tmp/petgal-logs"
        "#,
    )
    .unwrap();

    let config = Config::from_parts(file);
    assert_eq!(config.unsplash_access_key.as_deref(), Some("abc123"));
    assert_eq!(config.batch_size, 3);
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.theme, "Ocean");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file_enabled);
    assert_eq!(
        config.logging.file_dir,
        std::path::PathBuf::from("/tmp/petgal-logs")
    );
}

#[test]
fn empty_file_yields_defaults() {
    let file: FileConfig = toml::from_str("").unwrap();
    let config = Config::from_parts(file);

    assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.theme, "Dark");
    assert!(!config.demo_mode);
    assert!(config.enable_tui);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file_enabled);
}

#[test]
fn batch_size_is_clamped_to_fixed_page_size() {
    let file: FileConfig = toml::from_str("batch_size = 50").unwrap();
    assert_eq!(Config::from_parts(file).batch_size, DEFAULT_BATCH_SIZE);

    let file: FileConfig = toml::from_str("batch_size = 0").unwrap();
    assert_eq!(Config::from_parts(file).batch_size, 1);
}

#[test]
fn empty_access_key_counts_as_unset() {
    let file: FileConfig = toml::from_str(r#"unsplash_access_key = """#).unwrap();
    assert!(Config::from_parts(file).unsplash_access_key.is_none());
}

#[test]
fn extra_keys_tolerated_malformed_rejected() {
    // Extra keys are tolerated (forward compatibility)...
    let parsed: Result<FileConfig, _> = toml::from_str("future_knob = true");
    assert!(parsed.is_ok());

    // ...but malformed TOML is a hard parse error
    let parsed: Result<FileConfig, _> = toml::from_str("batch_size = [not valid");
    assert!(parsed.is_err());
}
