//! Integration tests for the health-probe switch and probe outcomes.

mod common;

use common::{MockTransport, client_with};
use phishforge_app::{AppConfig, ENV_HEALTH_CHECK};
use phishforge_client::TransportError;

fn health_check_from_env() -> bool {
    AppConfig::from_env()
        .expect("default config should load")
        .health_check
}

#[test]
fn health_check_switch_tests_disables_probe_when_env_is_false() {
    // Safety:
    // - Integration tests mutate process env in a single-threaded test body.
    // - We reset the variable before returning.
    unsafe { std::env::set_var(ENV_HEALTH_CHECK, "false") };
    assert!(!health_check_from_env());

    // Safety: see rationale above.
    unsafe { std::env::set_var(ENV_HEALTH_CHECK, "yes") };
    assert!(health_check_from_env());

    // Safety: see rationale above.
    unsafe { std::env::remove_var(ENV_HEALTH_CHECK) };
    assert!(health_check_from_env());
}

#[test]
fn health_check_switch_tests_probe_failures_are_reported_not_raised() {
    let healthy = MockTransport::responding(200, r#"{"status":"ok"}"#);
    assert!(client_with(healthy.clone()).check_health());
    assert_eq!(healthy.calls()[0].method, "GET");
    assert_eq!(healthy.calls()[0].url, "http://localhost:8000/health");

    let degraded = MockTransport::responding(503, "");
    assert!(!client_with(degraded).check_health());

    let offline = MockTransport::failing(TransportError::Connection("refused".to_string()));
    assert!(!client_with(offline).check_health());
}
