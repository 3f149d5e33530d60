use std::{borrow::Borrow, ops::Deref};

use log::Log;
use melior::{Context, StringRef, diagnostic::DiagnosticHandlerId, dialect::DialectRegistry};
use mlir_sys::mlirContextGetOrLoadDialect;

use crate::{diagnostics::log_diagnostic, error::Error, register_dialects};

/// An MLIR context with every JAX dialect registered.
pub struct JaxContext {
    ctx: Context,
    diagnostics_handler: Option<DiagnosticHandlerId>,
    _registry: DialectRegistry,
}

impl JaxContext {
    /// Creates a new [`JaxContext`] with the diagnostics engine configured to emit diagnostics to
    /// the global [`Log`].
    ///
    /// To create a context that does not set logging see [`JaxContext::new_no_log`].
    pub fn new() -> Result<Self, Error> {
        let mut jax = Self::new_no_log()?;
        jax.log_diagnostics();
        Ok(jax)
    }

    /// Creates a new [`JaxContext`] with every JAX dialect registered.
    ///
    /// Dialects are loaded lazily, when the parser or a builder first needs them.
    pub fn new_no_log() -> Result<Self, Error> {
        let ctx = Context::new();
        let registry = DialectRegistry::new();

        register_dialects(&registry)?;
        ctx.append_dialect_registry(&registry);
        Ok(Self {
            ctx,
            diagnostics_handler: None,
            _registry: registry,
        })
    }

    /// Returns whether a dialect with the given namespace can be used in this context.
    ///
    /// A registered dialect gets loaded by this query.
    pub fn is_dialect_available(&self, namespace: &str) -> bool {
        is_dialect_available(&self.ctx, namespace)
    }

    /// Configures MLIR to write diagnostics to the global [`Log`].
    pub fn log_diagnostics(&mut self) {
        self.log_diagnostics_to_logger(log::logger());
    }

    /// Configures MLIR to write diagnostics to the given [`Log`].
    pub fn log_diagnostics_to_logger(&mut self, logger: &'static dyn Log) {
        self.stop_logging_diagnostics();
        self.diagnostics_handler = Some(
            self.ctx
                .attach_diagnostic_handler(move |diag| log_diagnostic(diag, logger)),
        );
    }

    /// Stops logging diagnostics to a [`Log`].
    pub fn stop_logging_diagnostics(&mut self) {
        if let Some(id) = self.diagnostics_handler.take() {
            self.ctx.detach_diagnostic_handler(id);
        }
    }
}

/// Returns whether a dialect with the given namespace is registered or loaded in the context.
///
/// A registered dialect gets loaded by this query.
pub fn is_dialect_available(context: &Context, namespace: &str) -> bool {
    let dialect = unsafe {
        mlirContextGetOrLoadDialect(context.to_raw(), StringRef::from(namespace).to_raw())
    };
    !dialect.ptr.is_null()
}

impl Deref for JaxContext {
    type Target = Context;

    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}

impl Borrow<Context> for JaxContext {
    fn borrow(&self) -> &Context {
        &self.ctx
    }
}

impl AsRef<Context> for JaxContext {
    fn as_ref(&self) -> &Context {
        &self.ctx
    }
}

impl std::fmt::Debug for JaxContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JaxContext")
            .field("registered dialects", &self.registered_dialect_count())
            .field("loaded dialects", &self.loaded_dialect_count())
            .field("ctx", &self.ctx)
            .field("registry", &self._registry)
            .field("diagnostics_handler", &self.diagnostics_handler)
            .finish()
    }
}
