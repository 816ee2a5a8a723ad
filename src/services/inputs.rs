//! Pre-flight loading and validation of the JSON input files.
//!
//! Everything read here happens before the first network call so that a
//! malformed file never leaves a half-provisioned project behind.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tokio::fs;

use crate::domain::errors::{RunError, RunResult};
use crate::domain::models::{LearnerConfig, SymbolFile, TestDefinition, TestFile};

async fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> RunResult<T> {
    let raw = fs::read_to_string(path).await.map_err(|err| {
        RunError::ConfigValidation(format!(
            "cannot read {what} file {}: {err}",
            path.display()
        ))
    })?;
    serde_json::from_str(&raw).map_err(|err| {
        RunError::ConfigValidation(format!(
            "malformed {what} file {}: {err}",
            path.display()
        ))
    })
}

/// Load and validate the `--symbols` file.
pub async fn load_symbol_file(path: &Path) -> RunResult<SymbolFile> {
    read_json(path, "symbol").await
}

/// Load and validate the `--tests` file.
pub async fn load_test_file(path: &Path) -> RunResult<Vec<TestDefinition>> {
    let file: TestFile = read_json(path, "test").await?;
    if file.tests.is_empty() {
        return Err(RunError::ConfigValidation(format!(
            "test file {} contains no tests",
            path.display()
        )));
    }
    Ok(file.tests)
}

/// Load the driver config for test mode. Must be a JSON object; the runner
/// later attaches test ids, the target URL id, and the report flag to it.
pub async fn load_driver_config(path: &Path) -> RunResult<Map<String, Value>> {
    let value: Value = read_json(path, "driver config").await?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(RunError::ConfigValidation(format!(
            "driver config file {} must hold a JSON object",
            path.display()
        ))),
    }
}

/// Load and validate the learner config for learn mode.
pub async fn load_learner_config(path: &Path) -> RunResult<LearnerConfig> {
    read_json(path, "learner config").await
}

/// Expand `--files`: a single file stands for itself, a directory for every
/// regular file directly inside it (sorted by name, no recursion).
pub async fn collect_upload_files(path: &Path) -> RunResult<Vec<PathBuf>> {
    let metadata = fs::metadata(path).await.map_err(|err| {
        RunError::ConfigValidation(format!("cannot access {}: {err}", path.display()))
    })?;

    if metadata.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut entries = fs::read_dir(path).await.map_err(|err| {
        RunError::ConfigValidation(format!("cannot list {}: {err}", path.display()))
    })?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|err| {
        RunError::ConfigValidation(format!("cannot list {}: {err}", path.display()))
    })? {
        let entry_path = entry.path();
        if entry_path.is_file() {
            files.push(entry_path);
        }
    }
    if files.is_empty() {
        return Err(RunError::ConfigValidation(format!(
            "{} contains no files to upload",
            path.display()
        )));
    }
    files.sort();
    Ok(files)
}
