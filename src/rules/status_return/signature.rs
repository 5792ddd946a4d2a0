use super::{HANDLER_PACKAGE, HANDLER_TYPE};
use crate::core::FunctionNode;

/// Whether `function` looks like middleware: exactly one result, `http.Handler`.
///
/// Parameters are not inspected; `func(next http.Handler) http.Handler` and
/// `func() http.Handler` both match.
pub fn matches(function: &FunctionNode) -> bool {
    match function.results.as_slice() {
        [result] => result.is_qualified(HANDLER_PACKAGE, HANDLER_TYPE),
        _ => false,
    }
}
