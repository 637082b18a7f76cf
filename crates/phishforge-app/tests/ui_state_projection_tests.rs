//! Integration tests for driving UI state through one analysis.

mod common;

use common::{MockTransport, client_with};
use phishforge_analysis_contract::RiskTier;
use phishforge_app::{AppError, run_analysis, version_label};
use phishforge_client::{CONNECTION_ERROR, DEFAULT_ANALYSIS_ERROR, TransportError};
use phishforge_core::{AnalysisMode, AnalysisRequest, ExampleKind};
use phishforge_translate::TranslationTable;
use phishforge_ui::{ResultView, UiState, mode_badge};

#[test]
fn ui_state_projection_tests_shows_assessment_after_success() {
    let transport = MockTransport::responding(200, &common::response_fixture("v1"));
    let client = client_with(transport);
    let mut state = UiState::new(version_label());

    let assessment = run_analysis(
        &client,
        &ExampleKind::Phishing.request(),
        TranslationTable::builtin(),
        &mut state,
    )
    .expect("analysis should succeed");

    assert_eq!(assessment.risk_tier, RiskTier::High);
    assert!(!state.busy());
    assert_eq!(state.view(), &ResultView::Result(Box::new(assessment)));
    assert_eq!(state.status_text(), "HIGH RISK (82/100)");
}

#[test]
fn ui_state_projection_tests_url_result_carries_mode() {
    let transport = MockTransport::responding(200, &common::response_fixture("v4"));
    let client = client_with(transport);
    let mut state = UiState::new(version_label());

    let assessment = run_analysis(
        &client,
        &AnalysisRequest::url("https://www.company.com").expect("url should be valid"),
        TranslationTable::builtin(),
        &mut state,
    )
    .expect("analysis should succeed");

    assert_eq!(assessment.mode, AnalysisMode::Url);
    assert_eq!(state.mode, AnalysisMode::Url);
    assert_eq!(mode_badge(assessment.mode), Some("Mode: URL only"));
}

#[test]
fn ui_state_projection_tests_translates_backend_error() {
    let transport = MockTransport::responding(
        422,
        r#"{"error":"Errore durante l'analisi. Riprova più tardi."}"#,
    );
    let client = client_with(transport);
    let mut state = UiState::new(version_label());

    let error = run_analysis(
        &client,
        &ExampleKind::Legitimate.request(),
        TranslationTable::builtin(),
        &mut state,
    )
    .expect_err("422 should fail");

    assert!(matches!(error, AppError::Client(_)));
    assert_eq!(
        state.view(),
        &ResultView::Error(DEFAULT_ANALYSIS_ERROR.to_string())
    );
}

#[test]
fn ui_state_projection_tests_reports_connection_failure() {
    let transport = MockTransport::failing(TransportError::Connection("dns".to_string()));
    let client = client_with(transport);
    let mut state = UiState::new(version_label());

    run_analysis(
        &client,
        &ExampleKind::PhishingUrl.request(),
        TranslationTable::builtin(),
        &mut state,
    )
    .expect_err("offline backend should fail");

    assert_eq!(state.view(), &ResultView::Error(CONNECTION_ERROR.to_string()));
    assert!(!state.busy());
}

#[test]
fn ui_state_projection_tests_switching_mode_clears_result() {
    let transport = MockTransport::responding(200, &common::response_fixture("v2"));
    let client = client_with(transport);
    let mut state = UiState::new(version_label());
    run_analysis(
        &client,
        &ExampleKind::Phishing.request(),
        TranslationTable::builtin(),
        &mut state,
    )
    .expect("analysis should succeed");

    assert!(state.toggle_finding(0));
    state.switch_mode(AnalysisMode::Url);
    assert_eq!(state.view(), &ResultView::Idle);
    assert!(!state.is_finding_expanded(0));
}
