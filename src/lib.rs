//! alex-cli - Command-line client for the ALEX testing/learning server.
//!
//! The tool drives an ALEX server through its REST API in one linear
//! pipeline: log in, create an ephemeral project, upload symbol and test
//! definitions, trigger either automated test execution or an
//! automata-learning run, poll until the server is done, and report the
//! result.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models and errors with no I/O
//! - **Service Layer** (`services`): catalog flattening, name resolution,
//!   input validation, polling, action runners
//! - **Infrastructure Layer** (`infrastructure`): the ALEX HTTP client
//! - **CLI Layer** (`cli`): flag surface, pipeline orchestration, reporting

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use cli::{Action, Cli, RunStatus};
pub use domain::errors::{RunError, RunResult};
pub use domain::models::{Credentials, LearnerConfig, SymbolFile, TestDefinition};
pub use infrastructure::alex::{AlexClient, ApiError};
pub use services::{PollSettings, SymbolCatalog};
