//! Integration tests for request routing: one user action, one request.

mod common;

use common::{MockTransport, client_with};
use phishforge_client::TransportError;
use phishforge_core::{AnalysisRequest, ExampleKind};
use serde_json::{Value, json};

#[test]
fn single_request_routing_tests_email_goes_to_analyze() {
    let transport = MockTransport::responding(200, "{}");
    let client = client_with(transport.clone());
    let request = AnalysisRequest::email("a@b.test", "Hi", "Body text").expect("valid email");

    client.analyze(&request).expect("analysis should succeed");

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].url, "http://localhost:8000/analyze");
    let body: Value = serde_json::from_slice(&calls[0].body).expect("body should be json");
    assert_eq!(
        body,
        json!({"sender": "a@b.test", "subject": "Hi", "body": "Body text"})
    );
}

#[test]
fn single_request_routing_tests_url_goes_to_analyze_url() {
    let transport = MockTransport::responding(200, "{}");
    let client = client_with(transport.clone());

    client
        .analyze(&ExampleKind::LegitimateUrl.request())
        .expect("analysis should succeed");

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].url, "http://localhost:8000/analyze-url");
    let body: Value = serde_json::from_slice(&calls[0].body).expect("body should be json");
    assert_eq!(body, json!({"url": "https://www.paypal.com"}));
}

#[test]
fn single_request_routing_tests_failures_are_not_retried() {
    let transport = MockTransport::failing(TransportError::Connection("refused".to_string()));
    let client = client_with(transport.clone());

    client
        .analyze(&ExampleKind::Phishing.request())
        .expect_err("offline backend should fail");
    assert_eq!(transport.calls().len(), 1);

    let rejecting = MockTransport::responding(500, "");
    let client = client_with(rejecting.clone());
    client
        .analyze(&ExampleKind::Phishing.request())
        .expect_err("500 should fail");
    assert_eq!(rejecting.calls().len(), 1);
}
