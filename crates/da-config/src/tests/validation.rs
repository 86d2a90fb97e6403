use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};
use crate::validation_config::{
    MAX_BATCH_LINES, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, MIN_BATCH_LINES, MIN_TITLE_LENGTH,
};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

const BELOW_MIN_TITLE: usize = MIN_TITLE_LENGTH - 1;
const ABOVE_MAX_TITLE: usize = MAX_TITLE_LENGTH + 1;
const ABOVE_MAX_DESCRIPTION: usize = MAX_DESCRIPTION_LENGTH + 1;
const BELOW_MIN_BATCH_LINES: usize = MIN_BATCH_LINES - 1;
const ABOVE_MAX_BATCH_LINES: usize = MAX_BATCH_LINES + 1;
const VALID_BATCH_LINES: usize = (MIN_BATCH_LINES + MAX_BATCH_LINES) / 2;

// =========================================================================
// Validation Tests - Validation Config
// =========================================================================

#[test]
#[serial]
fn given_max_title_length_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set(
        "DA_VALIDATION_MAX_TITLE_LENGTH",
        &BELOW_MIN_TITLE.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_title_length_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set(
        "DA_VALIDATION_MAX_TITLE_LENGTH",
        &ABOVE_MAX_TITLE.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_description_length_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set(
        "DA_VALIDATION_MAX_DESCRIPTION_LENGTH",
        &ABOVE_MAX_DESCRIPTION.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_batch_lines_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _lines = EnvGuard::set(
        "DA_VALIDATION_MAX_BATCH_LINES",
        &BELOW_MIN_BATCH_LINES.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_batch_lines_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _lines = EnvGuard::set(
        "DA_VALIDATION_MAX_BATCH_LINES",
        &ABOVE_MAX_BATCH_LINES.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_batch_lines_in_range_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _lines = EnvGuard::set(
        "DA_VALIDATION_MAX_BATCH_LINES",
        &VALID_BATCH_LINES.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
