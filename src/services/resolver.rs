//! Name-to-id resolution for test trees and learner configs.
//!
//! Pure data transformation with no I/O: every symbol and parameter
//! reference by name is rewritten to the server id from the imported
//! catalog before anything is submitted. An unknown name, or a reference
//! that carries no name at all, is fatal; steps are never silently dropped.

use crate::domain::errors::{RunError, RunResult};
use crate::domain::models::{LearnerConfig, LearnerSymbol, SymbolRef, TestDefinition, TestStep};

use super::catalog::SymbolCatalog;

/// Resolve every step of every test in the tree, depth-first.
pub fn resolve_tests(tests: &mut [TestDefinition], catalog: &SymbolCatalog) -> RunResult<()> {
    for test in tests.iter_mut() {
        resolve_test(test, catalog)?;
    }
    Ok(())
}

fn resolve_test(test: &mut TestDefinition, catalog: &SymbolCatalog) -> RunResult<()> {
    match test {
        TestDefinition::Case(case) => {
            let steps = case
                .pre_steps
                .iter_mut()
                .chain(case.steps.iter_mut())
                .chain(case.post_steps.iter_mut());
            for step in steps {
                resolve_step(&case.name, step, catalog)?;
            }
            Ok(())
        }
        TestDefinition::Suite(suite) => {
            for child in &mut suite.tests {
                resolve_test(child, catalog)?;
            }
            Ok(())
        }
    }
}

fn resolve_step(case_name: &str, step: &mut TestStep, catalog: &SymbolCatalog) -> RunResult<()> {
    let id = resolve_symbol_ref(&mut step.symbol, catalog)
        .map_err(|err| RunError::NameResolution(format!("in test {case_name:?}: {err}")))?;
    step.symbol.id = Some(id);
    Ok(())
}

/// Resolve the learner config's symbol list, reset symbol, and optional
/// post symbol, including every bound parameter value.
pub fn resolve_learner_config(
    config: &mut LearnerConfig,
    catalog: &SymbolCatalog,
) -> RunResult<()> {
    for symbol in &mut config.symbols {
        resolve_learner_symbol(symbol, catalog)?;
    }
    resolve_learner_symbol(&mut config.reset_symbol, catalog)?;
    if let Some(post) = &mut config.post_symbol {
        resolve_learner_symbol(post, catalog)?;
    }
    Ok(())
}

fn resolve_learner_symbol(symbol: &mut LearnerSymbol, catalog: &SymbolCatalog) -> RunResult<()> {
    let id = resolve_symbol_ref(&mut symbol.symbol, catalog).map_err(RunError::NameResolution)?;
    symbol.symbol.id = Some(id);

    for value in &mut symbol.parameter_values {
        let name = value.parameter.name.take().ok_or_else(|| {
            RunError::NameResolution(format!(
                "a parameter value of symbol id {id} carries no parameter name"
            ))
        })?;
        let parameter_id = catalog.parameter_id(id, &name).ok_or_else(|| {
            RunError::NameResolution(format!(
                "symbol id {id} has no input parameter named {name:?}"
            ))
        })?;
        value.parameter.id = Some(parameter_id);
    }
    Ok(())
}

/// Take the reference's name and look it up. Errors are plain strings so
/// callers can add their own context.
fn resolve_symbol_ref(reference: &mut SymbolRef, catalog: &SymbolCatalog) -> Result<i64, String> {
    let name = reference
        .name
        .take()
        .ok_or_else(|| "a symbol reference carries no name".to_string())?;
    catalog
        .symbol_id(&name)
        .ok_or_else(|| format!("symbol {name:?} is not among the imported symbols"))
}
