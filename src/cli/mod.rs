//! Command-line interface: flag surface, pipeline orchestration, output.

pub mod reporter;
pub mod run;
pub mod types;

pub use run::RunStatus;
pub use types::{Action, Cli};
