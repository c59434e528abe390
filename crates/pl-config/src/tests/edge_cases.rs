use crate::{Config, Environment, LogLevel};
use crate::tests::{EnvGuard, setup_config_dir};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_loaded_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unparseable_port_override_when_loaded_then_ignored() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("PL_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then: the override is skipped, default survives
    assert_that!(config.server.port, eq(5000));
}

#[test]
fn given_log_level_strings_when_parsed_then_match_level_filters() {
    assert_that!(*LogLevel::from_str("error").unwrap(), eq(LevelFilter::Error));
    assert_that!(*LogLevel::from_str("WARN").unwrap(), eq(LevelFilter::Warn));
    assert_that!(*LogLevel::from_str("trace").unwrap(), eq(LevelFilter::Trace));

    // Unknown values fall back to Info rather than failing startup
    assert_that!(*LogLevel::from_str("verbose").unwrap(), eq(LevelFilter::Info));
}

#[test]
fn given_environment_strings_when_parsed_then_strict() {
    assert_that!(
        Environment::from_str("production").unwrap(),
        eq(Environment::Production)
    );
    assert_that!(
        Environment::from_str("prod").unwrap(),
        eq(Environment::Production)
    );
    assert_that!(
        Environment::from_str("Development").unwrap(),
        eq(Environment::Development)
    );
    assert_that!(Environment::from_str("staging").is_err(), eq(true));
}
