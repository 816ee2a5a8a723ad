//! Symbol and symbol-group models.
//!
//! Symbol definitions from the `--symbols` file are uploaded verbatim; the
//! client only interprets what the server hands back (ids, names, and input
//! parameters). References by name or id are shared with the test tree and
//! the learner config.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parsed `--symbols` file: either a flat symbol list or a group tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum SymbolFile {
    /// `{"type": "symbols", "symbols": [...]}`
    #[serde(rename = "symbols")]
    Symbols { symbols: Vec<Value> },

    /// `{"type": "symbolGroups", "symbolGroups": [...]}`
    #[serde(rename = "symbolGroups")]
    SymbolGroups {
        #[serde(rename = "symbolGroups")]
        symbol_groups: Vec<Value>,
    },
}

/// A symbol as returned by the import endpoints, enriched with its
/// server-assigned id and parameter catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportedSymbol {
    pub id: i64,
    pub name: String,
    /// Input parameters; each carries its own server-assigned id.
    #[serde(default)]
    pub inputs: Vec<SymbolParameter>,
}

/// An input parameter of an imported symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolParameter {
    pub id: i64,
    pub name: String,
}

/// A symbol group as returned by `POST /groups/batch`. Groups nest to
/// arbitrary depth; only their leaf symbols are actionable.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportedGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub symbols: Vec<ImportedSymbol>,
    #[serde(default)]
    pub groups: Vec<ImportedGroup>,
}

/// Reference to a symbol by name (input files) or by id (on the wire).
///
/// Resolution moves a reference from name to id; serialization drops
/// whichever side is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl SymbolRef {
    /// A by-name reference, as it appears in input files.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: None,
        }
    }
}

/// Reference to a symbol input parameter by name or id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_file_tagged_as_symbols() {
        let json = r#"{ "type": "symbols", "symbols": [{ "name": "click" }] }"#;
        let file: SymbolFile = serde_json::from_str(json).unwrap();
        match file {
            SymbolFile::Symbols { symbols } => assert_eq!(symbols.len(), 1),
            SymbolFile::SymbolGroups { .. } => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_symbol_file_tagged_as_groups() {
        let json = r#"{
            "type": "symbolGroups",
            "symbolGroups": [{ "name": "auth", "symbols": [] }]
        }"#;
        let file: SymbolFile = serde_json::from_str(json).unwrap();
        match file {
            SymbolFile::SymbolGroups { symbol_groups } => assert_eq!(symbol_groups.len(), 1),
            SymbolFile::Symbols { .. } => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_symbol_file_rejects_unknown_tag() {
        let json = r#"{ "type": "widgets", "widgets": [] }"#;
        assert!(serde_json::from_str::<SymbolFile>(json).is_err());
    }

    #[test]
    fn test_imported_symbol_with_inputs() {
        let json = r#"{
            "id": 7,
            "name": "click",
            "inputs": [{ "id": 71, "name": "selector" }]
        }"#;
        let symbol: ImportedSymbol = serde_json::from_str(json).unwrap();
        assert_eq!(symbol.id, 7);
        assert_eq!(symbol.inputs[0].name, "selector");
    }

    #[test]
    fn test_imported_symbol_without_inputs() {
        let json = r#"{ "id": 7, "name": "click" }"#;
        let symbol: ImportedSymbol = serde_json::from_str(json).unwrap();
        assert!(symbol.inputs.is_empty());
    }

    #[test]
    fn test_imported_group_nests() {
        let json = r#"{
            "id": 1,
            "name": "root",
            "symbols": [{ "id": 10, "name": "open" }],
            "groups": [{ "id": 2, "name": "child", "symbols": [{ "id": 20, "name": "close" }] }]
        }"#;
        let group: ImportedGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.symbols.len(), 1);
        assert_eq!(group.groups[0].symbols[0].name, "close");
    }

    #[test]
    fn test_symbol_ref_serializes_only_present_side() {
        let by_name = SymbolRef::by_name("click");
        assert_eq!(
            serde_json::to_value(&by_name).unwrap(),
            serde_json::json!({ "name": "click" })
        );

        let by_id = SymbolRef {
            name: None,
            id: Some(7),
        };
        assert_eq!(
            serde_json::to_value(&by_id).unwrap(),
            serde_json::json!({ "id": 7 })
        );
    }
}
