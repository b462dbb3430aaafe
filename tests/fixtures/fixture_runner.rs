#![allow(clippy::unwrap_used, clippy::panic)]

use super::fixture_loader::{FixtureFailure, FixtureResult, TestCase, load_translate_tests};
/// Fixture runner
///
/// Resolves every fixture case and collects mismatches
use relurl::BaseUrl;

pub fn run_fixtures(tests: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::Translate {
            base,
            input,
            expected,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let actual = BaseUrl::parse(&base).unwrap().translate(&input);
        if actual == expected {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.push(FixtureFailure {
                test_num,
                base,
                input,
                expected,
                actual,
            });
        }
    }

    result
}

#[test]
fn test_translate_fixtures() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let tests = load_translate_tests();
    assert!(tests.len() > 1, "fixture file should not be empty");

    let result = run_fixtures(tests);
    for failure in &result.failures {
        eprintln!(
            "#{} base={:?} input={:?}\n  expected: {:?}\n  actual:   {:?}",
            failure.test_num, failure.base, failure.input, failure.expected, failure.actual
        );
    }
    assert_eq!(result.failed, 0, "{}", result.summary());
}
