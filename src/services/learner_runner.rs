//! Learn-mode action runner: start the session, poll, fetch the result.

use std::time::Duration;

use tracing::info;

use crate::domain::errors::RunResult;
use crate::domain::models::LearnerConfig;
use crate::infrastructure::alex::models::{LearnerResult, Project};
use crate::infrastructure::alex::AlexClient;

use super::poll::{self, PollSettings};

/// Interval between learner status probes. Learning rounds are slower than
/// test execution, so this polls less aggressively.
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Start a learning session with the resolved config, wait for it to go
/// inactive, and return the latest result. The caller decides whether the
/// result is a hypothesis or a server-reported error.
pub async fn run(
    client: &AlexClient,
    project: &Project,
    config: &LearnerConfig,
    settings: PollSettings,
) -> RunResult<LearnerResult> {
    client.start_learning(project.id, config).await?;
    info!(symbols = config.symbols.len(), "learning session started");

    let project_id = project.id;
    poll::wait_until_inactive(settings, move || async move {
        client.learner_active(project_id).await.map(|status| status.active)
    })
    .await?;

    let result = client.latest_learner_result(project.id).await?;
    info!(error = result.error, "learning finished");
    Ok(result)
}
