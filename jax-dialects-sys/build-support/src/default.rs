//! Implementation of the fundamental configuration.

use anyhow::Result;
use bindgen::Builder;

use crate::{config::bindgen::BindgenConfig, mlir::MlirConfig};

/// Matches the dialect handle accessors, e.g. `mlirGetDialectHandle__arith__`.
pub const DIALECT_HANDLE_PATTERN: &str = "mlirGetDialectHandle__.*__";

/// Fundamental configuration for generating the bindings.
#[derive(Debug, Copy, Clone)]
pub struct DefaultConfig<'a> {
    mlir: MlirConfig,
    functions: &'a [&'a str],
}

impl<'a> DefaultConfig<'a> {
    /// Creates a new configuration.
    ///
    /// Every `mlirGetDialectHandle__<ns>__` accessor declared by the wrapper header gets bound;
    /// `functions` are the names of the remaining C API functions, without the `mlir` prefix.
    pub const fn new(functions: &'a [&'a str]) -> Self {
        Self {
            mlir: MlirConfig,
            functions,
        }
    }

    /// Name of the wrapper header file that includes all the consumed headers.
    pub fn wrapper(&self) -> &'static str {
        "wrapper.h"
    }

    /// Configures the allow list of functions. Types are taken from `mlir-sys`.
    fn add_allowlist_patterns(&self, bindgen: Builder) -> Builder {
        let bindgen = bindgen
            .allowlist_recursively(false)
            .allowlist_function(DIALECT_HANDLE_PATTERN);
        self.functions.iter().fold(bindgen, |bindgen, func| {
            bindgen.allowlist_function(format!("mlir{func}"))
        })
    }
}

impl BindgenConfig for DefaultConfig<'_> {
    fn apply(&self, bindgen: Builder) -> Result<Builder> {
        println!("cargo:rerun-if-changed={}", self.wrapper());
        let bindgen = self
            .add_allowlist_patterns(bindgen)
            .impl_debug(true)
            .header(self.wrapper())
            .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()));
        BindgenConfig::apply(&self.mlir, bindgen)
    }
}
