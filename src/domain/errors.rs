//! Domain errors for the alex-cli pipeline.

use thiserror::Error;

/// Errors that abort a run or mark it as failed.
///
/// Every variant short-circuits the remaining pipeline stages; the run
/// proceeds directly to optional project clean-up and exits nonzero.
#[derive(Debug, Error)]
pub enum RunError {
    /// A CLI flag or input file failed pre-flight validation. Reported
    /// before any network call is made.
    #[error("Invalid configuration: {0}")]
    ConfigValidation(String),

    /// The server rejected the supplied credentials.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// A test or learner config referenced a symbol or parameter name
    /// that is not in the imported catalog.
    #[error("Name resolution failed: {0}")]
    NameResolution(String),

    /// A request failed in transit or the server answered with an
    /// unexpected status.
    #[error("Network error: {0}")]
    Network(String),

    /// A polling loop exceeded the maximum wait.
    #[error("Timed out after {0} seconds waiting for the server to finish")]
    Timeout(u64),

    /// The server completed the work but reported it as failed, e.g. a
    /// learning session that ended with an error payload. A normal terminal
    /// outcome with nonzero exit, not a crash.
    #[error("{0}")]
    ServerReportedFailure(String),
}

pub type RunResult<T> = Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RunError::ConfigValidation("missing --tests".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: missing --tests");

        let err = RunError::NameResolution("symbol \"click\" not found".to_string());
        assert_eq!(
            err.to_string(),
            "Name resolution failed: symbol \"click\" not found"
        );

        let err = RunError::Timeout(3600);
        assert_eq!(
            err.to_string(),
            "Timed out after 3600 seconds waiting for the server to finish"
        );
    }

    #[test]
    fn test_server_reported_failure_is_bare_message() {
        let err = RunError::ServerReportedFailure("learning failed: oops".to_string());
        assert_eq!(err.to_string(), "learning failed: oops");
    }
}
