//! ALEX REST API request and response models.
//!
//! These structs map to the JSON payloads of the ALEX endpoints the
//! pipeline drives. They are used internally by the client and the action
//! runners and are not part of the public domain model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `POST /rest/users/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// JWT attached as `Authorization: Bearer <token>` to every later call.
    pub token: String,
}

/// Request body for `POST /rest/projects`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub urls: Vec<ProjectUrl>,
}

/// A target URL attached to a project. The first supplied URL is the
/// default target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub url: String,
    pub default: bool,
}

/// A project as returned by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub urls: Vec<ProjectUrl>,
}

impl Project {
    /// Server id of the default target URL, falling back to the first URL.
    pub fn default_url_id(&self) -> Option<i64> {
        self.urls
            .iter()
            .find(|url| url.default)
            .or_else(|| self.urls.first())
            .and_then(|url| url.id)
    }
}

/// A test created by `POST /rest/projects/{id}/tests/batch`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTest {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Response of the status endpoints polled while work is running.
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveStatus {
    #[serde(default)]
    pub active: bool,
}

/// Test report returned by `GET /rest/projects/{id}/tests/reports/latest`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    pub id: i64,
    #[serde(default)]
    pub num_tests: usize,
    #[serde(default)]
    pub num_tests_passed: usize,
    #[serde(default)]
    pub test_results: Vec<TestResult>,
}

impl TestReport {
    /// A run is passed iff every contained result's `passed` flag is true.
    pub fn passed(&self) -> bool {
        self.num_tests_passed == self.num_tests
            && self.test_results.iter().all(|result| result.passed)
    }

    /// Number of failed tests according to the report counters.
    pub fn num_tests_failed(&self) -> usize {
        self.num_tests.saturating_sub(self.num_tests_passed)
    }
}

/// A single test outcome inside a report.
#[derive(Debug, Clone, Deserialize)]
pub struct TestResult {
    #[serde(default)]
    pub test: NamedTest,
    pub passed: bool,
}

/// Name reference of the test a result belongs to.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedTest {
    #[serde(default)]
    pub name: String,
}

/// Response of `GET /rest/projects/{id}/results/latest` after learning.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerResult {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub error_text: Option<String>,
    /// The learned automaton model, present on successful sessions.
    #[serde(default)]
    pub hypothesis: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_default_url() {
        let json = r#"{
            "id": 3,
            "name": "alex-cli-x",
            "urls": [
                { "id": 30, "url": "http://a.example", "default": false },
                { "id": 31, "url": "http://b.example", "default": true }
            ]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.default_url_id(), Some(31));
    }

    #[test]
    fn test_project_default_url_falls_back_to_first() {
        let json = r#"{
            "id": 3,
            "name": "alex-cli-x",
            "urls": [{ "id": 30, "url": "http://a.example", "default": false }]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.default_url_id(), Some(30));
    }

    #[test]
    fn test_report_passed() {
        let json = r#"{
            "id": 5,
            "numTests": 2,
            "numTestsPassed": 2,
            "testResults": [
                { "test": { "name": "a" }, "passed": true },
                { "test": { "name": "b" }, "passed": true }
            ]
        }"#;
        let report: TestReport = serde_json::from_str(json).unwrap();
        assert!(report.passed());
        assert_eq!(report.num_tests_failed(), 0);
    }

    #[test]
    fn test_report_failed_by_counters_alone() {
        // Some server versions omit testResults from the latest report.
        let json = r#"{ "id": 5, "numTests": 1, "numTestsPassed": 0 }"#;
        let report: TestReport = serde_json::from_str(json).unwrap();
        assert!(!report.passed());
        assert_eq!(report.num_tests_failed(), 1);
    }

    #[test]
    fn test_report_failed_by_result_flag() {
        let json = r#"{
            "id": 5,
            "numTests": 1,
            "numTestsPassed": 1,
            "testResults": [{ "test": { "name": "a" }, "passed": false }]
        }"#;
        let report: TestReport = serde_json::from_str(json).unwrap();
        assert!(!report.passed());
    }

    #[test]
    fn test_learner_result_error() {
        let json = r#"{ "error": true, "errorText": "equivalence oracle crashed" }"#;
        let result: LearnerResult = serde_json::from_str(json).unwrap();
        assert!(result.error);
        assert_eq!(
            result.error_text.as_deref(),
            Some("equivalence oracle crashed")
        );
        assert!(result.hypothesis.is_none());
    }

    #[test]
    fn test_learner_result_with_hypothesis() {
        let json = r#"{
            "error": false,
            "hypothesis": { "nodes": [0, 1], "initNode": 0, "edges": [] },
            "statistics": { "mqsUsed": 12 }
        }"#;
        let result: LearnerResult = serde_json::from_str(json).unwrap();
        assert!(!result.error);
        assert!(result.hypothesis.is_some());
        assert_eq!(result.extra["statistics"]["mqsUsed"], 12);
    }
}
