//! Rule registry and the analysis entry point.

pub mod status_return;

use crate::core::{CompilationUnit, Diagnostic};
use crate::report::Reporter;

pub use status_return::StatusReturnRule;

/// A lint rule run over one compilation unit at a time.
///
/// Rules hold no state between units; each call reports into the sink it is
/// handed.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;
    fn doc(&self) -> &'static str;
    fn check(&self, unit: &CompilationUnit, reporter: &mut dyn Reporter);
}

pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(StatusReturnRule)]
}

/// Run every registered rule over `unit`. Diagnostics come back in source order.
///
/// Closure lookup recurses once per nesting level of `unit`, the adjacency
/// check does not. See [`crate::analyze_source`] for the stack this needs.
///
/// Each call owns its accumulator, so units can be analyzed concurrently and
/// merged afterwards.
pub fn analyze(unit: &CompilationUnit) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for rule in all_rules() {
        rule.check(unit, &mut diagnostics);
    }
    // Nested handler closures are checked after their enclosing one.
    diagnostics.sort_by_key(|d| d.position);
    diagnostics
}
