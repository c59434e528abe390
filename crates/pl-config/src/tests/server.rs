use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Server
// =========================================================================

#[test]
#[serial]
fn given_privileged_port_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("PL_SERVER_PORT", "80");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("server.port"));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok_as_auto_assign() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("PL_SERVER_PORT", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_blank_host_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _host = EnvGuard::set("PL_SERVER_HOST", "   ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_host_and_port_when_formatting_bind_addr_then_joined() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _host = EnvGuard::set("PL_SERVER_HOST", "0.0.0.0");
    let _port = EnvGuard::set("PL_SERVER_PORT", "5000");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.bind_addr(), eq("0.0.0.0:5000"));
}
