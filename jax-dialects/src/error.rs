use std::str::Utf8Error;

use thiserror::Error;

/// Errors raised while registering the JAX dialects.
///
/// Every variant except [`Error::UnknownDialect`] points at a build configuration problem: the
/// crate was linked against a mismatched or incomplete set of dialect libraries.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum Error {
    #[error("dialect '{0}' could not be resolved from the linked dialect libraries")]
    UnresolvableDialect(&'static str),
    #[error("handle accessor of dialect '{expected}' resolved dialect '{actual}'")]
    NamespaceMismatch {
        expected: &'static str,
        actual: String,
    },
    #[error("'{0}' is not a JAX dialect")]
    UnknownDialect(String),
    #[error(transparent)]
    Utf8(#[from] Utf8Error),
}
