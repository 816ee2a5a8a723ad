//! Learner configuration models.
//!
//! Only the symbol-referencing fields are modeled; algorithm, equivalence
//! oracle, and driver settings pass through `extra` untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::symbol::{ParameterRef, SymbolRef};

/// Learner configuration as read from `--config` in learn mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerConfig {
    /// The input alphabet: symbols the learner may invoke.
    #[serde(default)]
    pub symbols: Vec<LearnerSymbol>,
    /// Symbol that resets the system under test between queries.
    pub reset_symbol: LearnerSymbol,
    /// Optional symbol executed after each reset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_symbol: Option<LearnerSymbol>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A symbol invocation in the learner config: a reference plus any bound
/// parameter values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerSymbol {
    pub symbol: SymbolRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameter_values: Vec<ParameterValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A value bound to a named symbol parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterValue {
    pub parameter: ParameterRef,
    #[serde(default)]
    pub value: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
