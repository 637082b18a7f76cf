#![warn(missing_docs)]
//! # phishforge-benchmarks
//!
//! Synthetic payloads for normalization latency smoke tests.

use serde_json::{Value, json};

/// Builds a response body that exercises every canonical field, with
/// `findings` well-formed findings and one malformed finding.
pub fn full_featured_payload(findings: usize) -> Value {
    let mut entries: Vec<Value> = (0..findings)
        .map(|index| {
            json!({
                "risk_score": 5 + (index % 20),
                "detail": "Link sospetto verso un dominio registrato di recente",
                "educational": {
                    "title": "Link sospetto",
                    "explanation": "Il testo del link e la destinazione non corrispondono: rischio alto.",
                    "tips": ["Non cliccare sui link", "Verifica sempre il mittente", "Consigli"],
                },
            })
        })
        .collect();
    entries.push(json!({"risk_score": 10, "detail": "orphan"}));

    json!({
        "label": "sospetto",
        "risk_level": "alto",
        "risk_score": "87",
        "confidence": 0.93,
        "recommendation": "🔴 Rischio ALTO: questa email presenta numerosi indicatori di phishing. Non cliccare sui link e non fornire credenziali.",
        "analysisDetails": [
            "Mittente sospetto",
            {"description": "Linguaggio urgente"},
            {"message": "Richiesta di credenziali"},
            {"code": 42},
        ],
        "findings": entries,
        "urls": ["http://bit.ly/x", "http://paypal-verify.xyz/login"],
        "attachment_score": 72.4,
        "attachment_details": {
            "double_extension": true,
            "html_disguised": true,
            "mime_mismatch": true,
            "high_risk_type": false,
            "attachments": [
                {"filename": "fattura.pdf.html", "size": 20480},
                {"name": ""},
            ],
        },
        "risk_factors": [
            {"reason": "Allegato pericoloso"},
            "Dominio sospetto",
        ],
    })
}
