/// Fixture loader
///
/// Each entry is either a comment string or an object with `base`,
/// `input` and the `expected` resolution.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum TestCase {
    /// A resolution case
    Translate {
        base: String,
        input: String,
        expected: String,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub test_num: usize,
    pub base: String,
    pub input: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

const TRANSLATE_DATA: &str = include_str!("../data/translate.json");

pub fn load_translate_tests() -> Vec<TestCase> {
    serde_json::from_str(TRANSLATE_DATA).unwrap_or_else(|e| panic!("invalid fixture file: {e}"))
}
