//! Integration tests for configuration management

use grade_pro::config::{Config, ConfigOverrides};
use grade_pro::core::models::{RigorClass, WeightConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.storage.profile.is_empty(),
        "Default profile should not be empty"
    );
    assert!(
        !config.storage.data_dir.is_empty(),
        "Default data_dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.default_weights(), WeightConfig::new(50, 35, 15));
    assert_eq!(config.default_rigor(), RigorClass::Academic);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[grading]
major = 60
minor = 30
other = 10
rigor = "AP"

[storage]
profile = "junior"
data_dir = "/srv/grades"

[paths]
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.default_weights(), WeightConfig::new(60, 30, 10));
    assert_eq!(config.default_rigor(), RigorClass::Ap);
    assert_eq!(config.storage.profile, "junior");
    assert_eq!(config.storage.data_dir, "/srv/grades");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    // Test that missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[storage]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert_eq!(config.storage.profile, "");
    assert_eq!(config.grading.major, 0);
    // Unknown or empty rigor falls back to Academic
    assert_eq!(config.default_rigor(), RigorClass::Academic);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GRADE_PRO/test.log"

[storage]
data_dir = "$GRADE_PRO/data"

[paths]
reports_dir = "$GRADE_PRO/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    // Variable should be expanded to actual path
    assert!(config.logging.file.contains("gradepro"));
    assert!(!config.logging.file.contains("$GRADE_PRO"));
    assert!(config.storage.data_dir.contains("gradepro"));
    assert!(!config.storage.data_dir.contains("$GRADE_PRO"));
    assert!(!config.paths.reports_dir.contains("$GRADE_PRO"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    // Test get
    let level = config.get("level");
    assert!(level.is_some());

    // Test set
    config.set("level", "DEBUG").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");
    assert!(config.set("level", "loud").is_err());

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config.set("major", "40").expect("Failed to set major");
    assert_eq!(config.default_weights().major, 40);
    assert!(config.set("minor", "-5").is_err());
    assert!(config.set("other", "ten").is_err());

    config.set("rigor", "kap").expect("Failed to set rigor");
    assert_eq!(config.get("rigor").unwrap(), "KAP");
    assert!(config.set("rigor", "Honors").is_err());

    config.set("profile", "senior").expect("Failed to set profile");
    assert_eq!(config.get("profile").unwrap(), "senior");
    assert!(config.set("profile", "  ").is_err());

    config
        .set("data-dir", "/tmp/grades")
        .expect("Failed to set data dir");
    assert_eq!(config.get("data_dir").unwrap(), "/tmp/grades");

    // Test unknown key
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    // Change a value
    config.set("level", "debug").expect("Failed to set level");
    config.set("major", "70").expect("Failed to set major");
    assert_eq!(config.logging.level, "debug");

    // Unset should restore default
    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("major", &defaults)
        .expect("Failed to unset major");
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.grading.major, defaults.grading.major);
    assert!(config.unset("unknown_key", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    // Create and save a config
    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("rigor", "DC").expect("Failed to set rigor");

    // Manually save to our test location
    if let Some(parent) = config_file.parent() {
        fs::create_dir_all(parent).expect("Failed to create dir");
    }
    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    // Load and verify
    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.default_rigor(), RigorClass::DualCredit);
    assert_eq!(loaded_config.storage.profile, config.storage.profile);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        profile: Some("sophomore".to_string()),
        data_dir: Some("/custom/data".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.storage.profile, "sophomore");
    assert_eq!(config.storage.data_dir, "/custom/data");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    // Apply partial overrides - only profile changes
    let overrides = ConfigOverrides {
        profile: Some("freshman".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.storage.profile, "freshman");
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.storage.data_dir, defaults.storage.data_dir);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    // Should contain section headers (lowercase)
    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[grading]"));
    assert!(display_str.contains("[storage]"));
    assert!(display_str.contains("[paths]"));

    // Should contain field names
    assert!(display_str.contains("level"));
    assert!(display_str.contains("major = 50"));
    assert!(display_str.contains("rigor = \"Aca\""));
    assert!(display_str.contains("profile"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    // Create a minimal config with empty fields
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[storage]
profile = ""
data_dir = ""

[paths]
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    // Merge should add missing fields from defaults
    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.storage.profile, defaults.storage.profile);
    assert_eq!(config.default_weights(), defaults.default_weights());
    assert_eq!(config.grading.rigor, defaults.grading.rigor);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[grading]
major = 0
minor = 0
other = 100
rigor = "GT"

[storage]
profile = "me"
data_dir = "/my/data"

[paths]
reports_dir = "/my/reports"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));

    // Custom values should be preserved, including a deliberate zero weight
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.default_weights(), WeightConfig::new(0, 0, 100));
    assert_eq!(config.default_rigor(), RigorClass::GiftedTalented);
    assert_eq!(config.storage.profile, "me");
}

#[test]
fn test_get_gradepro_dir() {
    let dir = Config::get_gradepro_dir();

    // Should contain "gradepro" in the path
    assert!(dir.to_string_lossy().contains("gradepro"));

    // Should not be empty or just "."
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    // Should end with config.toml or dconfig.toml
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
