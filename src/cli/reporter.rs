//! Result reporting: console summary and optional output file.
//!
//! Everything here writes plain status text to stdout; logging goes to
//! stderr so results stay pipeable.

use std::path::Path;

use crate::domain::errors::{RunError, RunResult};
use crate::infrastructure::alex::models::{LearnerResult, TestReport};

/// Print one `passed <name>` / `failed <name>` line per test result,
/// followed by the summary line.
pub fn print_test_report(report: &TestReport) {
    for result in &report.test_results {
        let verdict = if result.passed { "passed" } else { "failed" };
        println!("{verdict} {}", result.test.name);
    }
    println!("{}", summary_line(report));
}

/// `"<n>/<total> tests passed."` when everything passed, otherwise
/// `"<failed>/<total> tests failed."`.
pub fn summary_line(report: &TestReport) -> String {
    if report.passed() {
        format!(
            "{}/{} tests passed.",
            report.num_tests_passed, report.num_tests
        )
    } else {
        format!(
            "{}/{} tests failed.",
            report.num_tests_failed(),
            report.num_tests
        )
    }
}

/// Print the learned hypothesis, pretty-printed.
pub fn print_hypothesis(result: &LearnerResult) {
    match &result.hypothesis {
        Some(hypothesis) => {
            println!(
                "{}",
                serde_json::to_string_pretty(hypothesis).unwrap_or_default()
            );
        }
        None => println!("The learner finished without producing a hypothesis."),
    }
}

/// Write the report or hypothesis body to `path`, overwriting any existing
/// file.
pub async fn write_output(path: &Path, body: &str) -> RunResult<()> {
    tokio::fs::write(path, body).await.map_err(|err| {
        RunError::ConfigValidation(format!(
            "cannot write output file {}: {err}",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::alex::models::{NamedTest, TestResult};

    fn report(passed: usize, total: usize, results: Vec<(&str, bool)>) -> TestReport {
        TestReport {
            id: 1,
            num_tests: total,
            num_tests_passed: passed,
            test_results: results
                .into_iter()
                .map(|(name, passed)| TestResult {
                    test: NamedTest {
                        name: name.to_string(),
                    },
                    passed,
                })
                .collect(),
        }
    }

    #[test]
    fn test_summary_all_passed() {
        let report = report(1, 1, vec![("click works", true)]);
        assert_eq!(summary_line(&report), "1/1 tests passed.");
    }

    #[test]
    fn test_summary_all_failed() {
        let report = report(0, 1, vec![("click works", false)]);
        assert_eq!(summary_line(&report), "1/1 tests failed.");
    }

    #[test]
    fn test_summary_partial_failure_counts_failures() {
        let report = report(2, 3, vec![("a", true), ("b", true), ("c", false)]);
        assert_eq!(summary_line(&report), "1/3 tests failed.");
    }

    #[tokio::test]
    async fn test_write_output_overwrites() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "old").unwrap();
        write_output(file.path(), "<testsuite/>").await.unwrap();
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "<testsuite/>");
    }

    #[tokio::test]
    async fn test_write_output_bad_path_is_config_error() {
        let err = write_output(Path::new("/nonexistent/dir/out.xml"), "x")
            .await
            .unwrap_err();
        assert!(matches!(err, RunError::ConfigValidation(_)));
    }
}
