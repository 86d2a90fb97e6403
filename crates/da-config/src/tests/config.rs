use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};
use crate::validation_config::{
    DEFAULT_MAX_BATCH_LINES, DEFAULT_MAX_DESCRIPTION_LENGTH, DEFAULT_MAX_TITLE_LENGTH,
};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(
        config.validation.max_title_length,
        eq(DEFAULT_MAX_TITLE_LENGTH)
    );
    assert_that!(
        config.validation.max_description_length,
        eq(DEFAULT_MAX_DESCRIPTION_LENGTH)
    );
    assert_that!(config.validation.max_batch_lines, eq(DEFAULT_MAX_BATCH_LINES));
    assert_that!(config.validation.status_fallback, eq(true));
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
    assert!(config.work_items.types.is_empty());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [logging]
            level = "debug"
            colored = false

            [validation]
            max_batch_lines = 20
            status_fallback = false

            [work_items.types]
            51311 = "task"
            67890 = "user story"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.validation.max_batch_lines, eq(20));
    assert_that!(config.validation.status_fallback, eq(false));
    assert_that!(
        config.work_items.types.get("67890").map(String::as_str),
        eq(Some("user story"))
    );
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [validation]
            max_title_length = 100
        "#,
    )
    .unwrap();
    let _title = EnvGuard::set("DA_VALIDATION_MAX_TITLE_LENGTH", "300");
    let _fallback = EnvGuard::set("DA_VALIDATION_STATUS_FALLBACK", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validation.max_title_length, eq(300));
    assert_that!(config.validation.status_fallback, eq(false));
}

#[test]
#[serial]
fn given_log_file_env_var_when_load_then_file_set() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("DA_LOG_FILE", "da.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.file.as_deref(), eq(Some("da.log")));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[validation\nmax = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_non_numeric_work_item_id_when_validate_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [work_items.types]
            abc = "task"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_default_kept() {
    // Given
    let _temp = setup_config_dir();
    let _lines = EnvGuard::set("DA_VALIDATION_MAX_BATCH_LINES", "lots");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validation.max_batch_lines, eq(DEFAULT_MAX_BATCH_LINES));
}
