use miette::Diagnostic;
use thiserror::Error;

use crate::element::ElementType;

#[derive(Clone, Diagnostic, Debug, PartialEq, Eq, Error)]
pub enum SetError {
    #[error("nil element")]
    #[diagnostic(help("sets only hold present values, pass `Some(element)`"))]
    NilElement,

    #[error("type error")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
        #[help]
        expected_but_found: String,
    },

    #[error("out of range")]
    #[diagnostic(help("the iterator is exhausted, check `has_next` first"))]
    OutOfRange,
}

impl SetError {
    pub fn type_mismatch(expected: ElementType, found: ElementType) -> Self {
        let expected_but_found = format!("expected `{expected}`, but got `{found}`");
        Self::TypeMismatch {
            expected: expected.name(),
            found: found.name(),
            expected_but_found,
        }
    }
}
