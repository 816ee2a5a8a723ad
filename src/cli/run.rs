//! The linear run pipeline: validate inputs, log in, provision a project,
//! upload files, import symbols, resolve names, run the action, report,
//! clean up.
//!
//! All state is threaded stage to stage through explicit values; any error
//! short-circuits to the optional project clean-up.

use std::path::PathBuf;
use std::time::Duration;

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::domain::errors::{RunError, RunResult};
use crate::domain::models::{Credentials, LearnerConfig, SymbolFile, TestDefinition};
use crate::infrastructure::alex::models::{CreateProjectRequest, Project, ProjectUrl};
use crate::infrastructure::alex::AlexClient;
use crate::services::catalog::SymbolCatalog;
use crate::services::{inputs, learner_runner, resolver, test_runner, PollSettings};

use super::reporter;
use super::types::{Action, Cli};

/// Terminal outcome of a run that completed without aborting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Everything the server executed succeeded.
    Success,
    /// Tests executed but at least one failed.
    TestsFailed,
}

/// Everything read from disk before the first network call.
#[derive(Debug)]
struct RunInputs {
    symbols: SymbolFile,
    uploads: Vec<PathBuf>,
    action: ActionInputs,
}

#[derive(Debug)]
enum ActionInputs {
    Test {
        tests: Vec<TestDefinition>,
        driver_config: Map<String, Value>,
    },
    Learn {
        config: LearnerConfig,
    },
}

/// Run the whole pipeline for one invocation.
pub async fn execute(cli: Cli) -> RunResult<RunStatus> {
    let credentials = Credentials::parse(&cli.user)?;
    let run_inputs = load_inputs(&cli).await?;

    let mut client = AlexClient::new(&cli.uri)?;
    client.login(&credentials).await?;
    info!(email = %credentials.email, "logged in");

    let project = provision_project(&client, &cli.targets).await?;
    info!(project = %project.name, id = project.id, "project created");

    let outcome = run_project(&client, &project, run_inputs, &cli).await;

    if cli.clean_up {
        // Best-effort: a failed delete is logged but never changes the
        // run's exit status.
        match client.delete_project(project.id).await {
            Ok(()) => info!(id = project.id, "project deleted"),
            Err(err) => warn!(id = project.id, error = %err, "could not delete project"),
        }
    }

    outcome
}

/// Read and validate all input files. Flag combinations that clap cannot
/// express (they depend on the action's value) are checked here.
async fn load_inputs(cli: &Cli) -> RunResult<RunInputs> {
    let action = match cli.action {
        Action::Test => {
            let tests_path = cli.tests.as_ref().ok_or_else(|| {
                RunError::ConfigValidation("the test action requires --tests".to_string())
            })?;
            let tests = inputs::load_test_file(tests_path).await?;
            let driver_config = inputs::load_driver_config(&cli.config).await?;
            ActionInputs::Test {
                tests,
                driver_config,
            }
        }
        Action::Learn => {
            if cli.tests.is_some() {
                return Err(RunError::ConfigValidation(
                    "--tests cannot be combined with the learn action".to_string(),
                ));
            }
            let config = inputs::load_learner_config(&cli.config).await?;
            ActionInputs::Learn { config }
        }
    };

    let symbols = inputs::load_symbol_file(&cli.symbols).await?;

    let uploads = match &cli.files {
        Some(path) => inputs::collect_upload_files(path).await?,
        None => vec![],
    };

    Ok(RunInputs {
        symbols,
        uploads,
        action,
    })
}

/// Create the scratch project. The generated name keeps concurrent
/// invocations from colliding; the first target URL is the default.
async fn provision_project(client: &AlexClient, targets: &[String]) -> RunResult<Project> {
    let request = CreateProjectRequest {
        name: generate_project_name(),
        urls: targets
            .iter()
            .enumerate()
            .map(|(index, url)| ProjectUrl {
                id: None,
                url: url.clone(),
                default: index == 0,
            })
            .collect(),
    };
    Ok(client.create_project(&request).await?)
}

fn generate_project_name() -> String {
    let stamp = chrono::Utc::now().format("%Y%m%d-%H%M%S");
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("alex-cli-{stamp}-{}", &suffix[..8])
}

async fn run_project(
    client: &AlexClient,
    project: &Project,
    run_inputs: RunInputs,
    cli: &Cli,
) -> RunResult<RunStatus> {
    // Uploads go strictly one at a time; the next file is sent only after
    // the previous response arrived.
    for path in &run_inputs.uploads {
        let bytes = tokio::fs::read(path).await.map_err(|err| {
            RunError::ConfigValidation(format!(
                "cannot read upload file {}: {err}",
                path.display()
            ))
        })?;
        let name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
        client.upload_file(project.id, &name, bytes).await?;
        info!(file = %path.display(), "file uploaded");
    }

    let catalog = import_symbols(client, project.id, run_inputs.symbols).await?;
    info!(count = catalog.len(), "symbols imported");

    let max_wait = Duration::from_secs(cli.max_wait);
    match run_inputs.action {
        ActionInputs::Test {
            mut tests,
            driver_config,
        } => {
            resolver::resolve_tests(&mut tests, &catalog)?;
            let settings = PollSettings {
                interval: test_runner::STATUS_POLL_INTERVAL,
                max_wait,
            };
            let report = test_runner::run(client, project, &tests, driver_config, settings).await?;
            reporter::print_test_report(&report);

            if let Some(out) = &cli.out {
                let xml = client.junit_report(project.id, report.id).await?;
                reporter::write_output(out, &xml).await?;
                info!(path = %out.display(), "JUnit report written");
            }

            if report.passed() {
                Ok(RunStatus::Success)
            } else {
                Ok(RunStatus::TestsFailed)
            }
        }
        ActionInputs::Learn { mut config } => {
            resolver::resolve_learner_config(&mut config, &catalog)?;
            let settings = PollSettings {
                interval: learner_runner::STATUS_POLL_INTERVAL,
                max_wait,
            };
            let result = learner_runner::run(client, project, &config, settings).await?;

            if result.error {
                let message = result
                    .error_text
                    .unwrap_or_else(|| "the server reported no details".to_string());
                return Err(RunError::ServerReportedFailure(format!(
                    "learning failed: {message}"
                )));
            }

            reporter::print_hypothesis(&result);
            if let Some(out) = &cli.out {
                let body = result
                    .hypothesis
                    .as_ref()
                    .map(|h| serde_json::to_string_pretty(h).unwrap_or_default())
                    .unwrap_or_default();
                reporter::write_output(out, &body).await?;
                info!(path = %out.display(), "hypothesis written");
            }
            Ok(RunStatus::Success)
        }
    }
}

/// Import symbols or symbol groups and collapse the response into a flat
/// catalog for resolution.
async fn import_symbols(
    client: &AlexClient,
    project_id: i64,
    file: SymbolFile,
) -> RunResult<SymbolCatalog> {
    match file {
        SymbolFile::Symbols { symbols } => {
            let imported = client.create_symbols(project_id, &symbols).await?;
            Ok(SymbolCatalog::from_symbols(imported))
        }
        SymbolFile::SymbolGroups { symbol_groups } => {
            let imported = client.create_symbol_groups(project_id, &symbol_groups).await?;
            Ok(SymbolCatalog::from_groups(imported))
        }
    }
}
