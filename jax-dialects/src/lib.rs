//! Registers the upstream MLIR dialects used by JAX, together with the transformation and Shardy
//! passes JAX runs, into a dialect registry provided by the caller.

pub mod context;
mod diagnostics;
pub mod dialect;
pub mod error;
pub mod ffi;
mod macros;
pub mod passes;
pub mod registry;
#[cfg(test)]
mod test;
pub mod utils;

pub use registry::{InsertDialect, RegistryRef, insert_dialects, register_dialects};

/// Exports the most common types and functions.
pub mod prelude {
    pub use crate::context::JaxContext;
    pub use crate::dialect::{JAX_DIALECTS, JaxDialect};
    pub use crate::error::Error as JaxDialectsError;
    pub use crate::passes::register_jax_passes;
    pub use crate::registry::{InsertDialect, RegistryRef, insert_dialects, register_dialects};
    pub use crate::utils::FromRaw;

    // melior reexports of commonly used types.
    pub use melior::Context;
    pub use melior::dialect::{DialectHandle, DialectRegistry};
}
