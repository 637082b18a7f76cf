#![warn(missing_docs)]
//! # phishforge-contract-tests
//!
//! Fixture and schema loaders for the frozen contracts under the workspace
//! `contracts/` directory. The assertions live in `tests/`.

use std::path::PathBuf;

use serde_json::Value;

/// Backend response generations with a frozen fixture, oldest first.
pub const RESPONSE_GENERATIONS: [&str; 5] = ["v1", "v2", "v3", "v4", "v5"];

/// Returns the workspace `contracts/` directory.
pub fn contracts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("contracts")
}

/// Reads `contracts/<relative>` as text.
///
/// # Panics
/// Panics when the file is missing; fixtures are part of the repository.
pub fn read_contract(relative: &str) -> String {
    let path = contracts_dir().join(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|error| panic!("{} should be readable: {error}", path.display()))
}

/// Reads and decodes `contracts/<relative>`.
///
/// # Panics
/// Panics when the file is missing or not JSON.
pub fn load_contract(relative: &str) -> Value {
    let raw = read_contract(relative);
    serde_json::from_str(&raw)
        .unwrap_or_else(|error| panic!("{relative} should be valid json: {error}"))
}

/// Path of one generation's response fixture, relative to `contracts/`.
pub fn response_fixture(generation: &str) -> String {
    format!("fixtures/analysis-response.{generation}.json")
}
