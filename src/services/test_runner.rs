//! Test-mode action runner: submit, execute, poll, fetch report.

use std::time::Duration;

use serde_json::{json, Map, Value};
use tracing::info;

use crate::domain::errors::{RunError, RunResult};
use crate::domain::models::TestDefinition;
use crate::infrastructure::alex::models::{Project, TestReport};
use crate::infrastructure::alex::AlexClient;

use super::poll::{self, PollSettings};

/// Interval between test status probes.
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Submit the resolved test tree, trigger execution against the project's
/// default target, wait for the executor to go inactive, and return the
/// latest report.
pub async fn run(
    client: &AlexClient,
    project: &Project,
    tests: &[TestDefinition],
    driver_config: Map<String, Value>,
    settings: PollSettings,
) -> RunResult<TestReport> {
    let created = client.create_tests(project.id, tests).await?;
    let test_ids: Vec<i64> = created.iter().map(|test| test.id).collect();
    info!(count = test_ids.len(), "tests created");

    let url_id = project.default_url_id().ok_or_else(|| {
        RunError::Network(format!(
            "project {} came back without a target URL id",
            project.id
        ))
    })?;

    let mut config = driver_config;
    config.insert("tests".to_string(), json!(test_ids));
    config.insert("url".to_string(), json!(url_id));
    config.insert("createReport".to_string(), json!(true));

    client
        .execute_tests(project.id, &Value::Object(config))
        .await?;
    info!("test execution triggered");

    let project_id = project.id;
    poll::wait_until_inactive(settings, move || async move {
        client.test_status(project_id).await.map(|status| status.active)
    })
    .await?;

    let report = client.latest_test_report(project.id).await?;
    info!(
        passed = report.num_tests_passed,
        total = report.num_tests,
        "execution finished"
    );
    Ok(report)
}
