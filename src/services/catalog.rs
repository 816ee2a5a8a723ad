//! Imported-symbol catalog with name lookups.
//!
//! The importer returns either a flat symbol list or a nested group tree;
//! both collapse into a [`SymbolCatalog`] so that resolution sees every
//! symbol regardless of nesting depth.

use std::collections::HashMap;

use crate::domain::models::{ImportedGroup, ImportedSymbol};

/// Flat view of the imported symbols with name-to-id lookups.
#[derive(Debug, Default)]
pub struct SymbolCatalog {
    symbols: Vec<ImportedSymbol>,
    by_name: HashMap<String, i64>,
    /// Two-level lookup: symbol id -> parameter name -> parameter id.
    parameters: HashMap<i64, HashMap<String, i64>>,
}

impl SymbolCatalog {
    /// Build a catalog from a flat imported symbol list.
    pub fn from_symbols(symbols: Vec<ImportedSymbol>) -> Self {
        let mut by_name = HashMap::new();
        let mut parameters = HashMap::new();
        for symbol in &symbols {
            by_name.insert(symbol.name.clone(), symbol.id);
            let params: HashMap<String, i64> = symbol
                .inputs
                .iter()
                .map(|input| (input.name.clone(), input.id))
                .collect();
            parameters.insert(symbol.id, params);
        }
        Self {
            symbols,
            by_name,
            parameters,
        }
    }

    /// Build a catalog from a group tree, flattening depth-first with each
    /// group's own symbols before those of its child groups.
    pub fn from_groups(groups: Vec<ImportedGroup>) -> Self {
        let mut symbols = Vec::new();
        for group in groups {
            flatten_group(group, &mut symbols);
        }
        Self::from_symbols(symbols)
    }

    /// Server id of the symbol with the given name, if imported.
    pub fn symbol_id(&self, name: &str) -> Option<i64> {
        self.by_name.get(name).copied()
    }

    /// Server id of a parameter, scoped to the owning symbol.
    pub fn parameter_id(&self, symbol_id: i64, name: &str) -> Option<i64> {
        self.parameters.get(&symbol_id)?.get(name).copied()
    }

    /// All imported symbols in flattening order.
    pub fn symbols(&self) -> &[ImportedSymbol] {
        &self.symbols
    }

    /// Number of imported symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

fn flatten_group(group: ImportedGroup, out: &mut Vec<ImportedSymbol>) {
    out.extend(group.symbols);
    for child in group.groups {
        flatten_group(child, out);
    }
}
