//! Domain layer: models and errors with no I/O.

pub mod errors;
pub mod models;
