//! Hand-off of diagnostics to whoever is collecting them.

use crate::core::Diagnostic;

/// Receives diagnostics as rules emit them.
///
/// Implementations must not filter, reorder or deduplicate.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
