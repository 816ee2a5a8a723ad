//! Command-line surface of alex-cli.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "alex-cli")]
#[command(about = "Run tests or automata learning against an ALEX server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the ALEX server, e.g. http://alex.example.org:8000
    #[arg(long)]
    pub uri: String,

    /// Comma-separated base URL(s) of the system under test; the first one
    /// becomes the project's default target
    #[arg(long = "targets", alias = "target", value_delimiter = ',', num_args = 1.., required = true)]
    pub targets: Vec<String>,

    /// Delete the scratch project when the run finishes
    #[arg(long = "clean-up")]
    pub clean_up: bool,

    /// What to do: execute tests or learn a model
    #[arg(short, long, value_enum)]
    pub action: Action,

    /// Credentials as email:password
    #[arg(short, long)]
    pub user: String,

    /// Path to the symbol or symbol-group JSON file
    #[arg(short, long)]
    pub symbols: PathBuf,

    /// Path to the test JSON file (test action only)
    #[arg(short, long)]
    pub tests: Option<PathBuf>,

    /// Path to the driver (test) or learner (learn) JSON config
    #[arg(short, long)]
    pub config: PathBuf,

    /// File, or directory of files, to upload into the project
    #[arg(short, long)]
    pub files: Option<PathBuf>,

    /// Write the JUnit report (test) or learned hypothesis (learn) here
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Upper bound in seconds on each wait for the server to finish
    #[arg(long = "max-wait", default_value_t = 3600)]
    pub max_wait: u64,
}

/// The kind of run to perform.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Execute the supplied tests against the target
    Test,
    /// Run an automata-learning session
    Learn,
}
