use super::*;
use std::sync::Mutex;

/// `Config::load` reads process-global environment variables, so these
/// tests must not run concurrently with each other.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn defaults_when_unset() {
    let _guard = ENV_LOCK.lock().unwrap();
    for var in ["JOB_RUNNER_URL", "BIND_ADDRESS", "BIND_PORT", "WEBHOOK_URL"] {
        std::env::remove_var(var);
    }
    let config = Config::load().unwrap();
    assert_eq!(config.job_runner_url, DEFAULT_JOB_RUNNER_URL);
    assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
    assert_eq!(config.bind_port, DEFAULT_BIND_PORT);
    assert_eq!(config.webhook_url, DEFAULT_WEBHOOK_URL);
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn reads_every_variable_when_set() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var("JOB_RUNNER_URL", "http://runner.internal:9000");
    std::env::set_var("BIND_ADDRESS", "127.0.0.1");
    std::env::set_var("BIND_PORT", "9090");
    std::env::set_var("WEBHOOK_URL", "http://conduit.internal/webhook");

    let config = Config::load().unwrap();
    assert_eq!(config.job_runner_url, "http://runner.internal:9000");
    assert_eq!(config.bind_address, "127.0.0.1");
    assert_eq!(config.bind_port, 9090);
    assert_eq!(config.webhook_url, "http://conduit.internal/webhook");
    assert_eq!(config.bind_addr(), "127.0.0.1:9090");

    for var in ["JOB_RUNNER_URL", "BIND_ADDRESS", "BIND_PORT", "WEBHOOK_URL"] {
        std::env::remove_var(var);
    }
}

#[test]
fn rejects_non_numeric_port() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var("BIND_PORT", "not-a-port");
    let err = Config::load().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort("BIND_PORT", _)));
    std::env::remove_var("BIND_PORT");
}
