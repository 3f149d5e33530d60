//! Inserting the JAX dialects into a dialect registry.

use melior::dialect::{DialectHandle, DialectRegistry};
use mlir_sys::{MlirDialectRegistry, mlirDialectHandleInsertDialect};

use crate::{
    dialect::{JAX_DIALECTS, JaxDialect},
    error::Error,
    passes::register_jax_passes,
    utils::FromRaw,
};

/// A dialect registry that dialect handles can be inserted into.
///
/// Inserting a dialect that is already present must be harmless.
pub trait InsertDialect {
    fn insert_dialect(&self, handle: DialectHandle);
}

impl InsertDialect for DialectRegistry {
    fn insert_dialect(&self, handle: DialectHandle) {
        handle.insert_dialect(self)
    }
}

/// A registry owned by someone else, typically the host environment that calls into this crate.
///
/// The registry is neither created nor destroyed through this type.
#[derive(Debug, Copy, Clone)]
pub struct RegistryRef {
    raw: MlirDialectRegistry,
}

impl RegistryRef {
    pub fn to_raw(self) -> MlirDialectRegistry {
        self.raw
    }
}

impl FromRaw<MlirDialectRegistry> for RegistryRef {
    unsafe fn from_raw(raw: MlirDialectRegistry) -> Self {
        Self { raw }
    }
}

impl InsertDialect for RegistryRef {
    fn insert_dialect(&self, handle: DialectHandle) {
        unsafe { mlirDialectHandleInsertDialect(handle.to_raw(), self.raw) }
    }
}

/// Inserts the given dialects into the registry, in order.
///
/// Every handle is resolved before the first insertion so a failure leaves the registry as it was.
pub fn insert_dialects<R, I>(registry: &R, dialects: I) -> Result<(), Error>
where
    R: InsertDialect + ?Sized,
    I: IntoIterator<Item = JaxDialect>,
{
    insert_resolved(
        registry,
        dialects
            .into_iter()
            .map(|dialect| dialect.handle().map(|handle| (dialect, handle))),
    )
}

fn insert_resolved<R, I>(registry: &R, resolved: I) -> Result<(), Error>
where
    R: InsertDialect + ?Sized,
    I: IntoIterator<Item = Result<(JaxDialect, DialectHandle), Error>>,
{
    let handles = resolved.into_iter().collect::<Result<Vec<_>, _>>()?;

    for (dialect, handle) in handles {
        registry.insert_dialect(handle);
        log::debug!("Inserted dialect '{dialect}'");
    }
    Ok(())
}

/// Adds every JAX dialect into the given registry and registers the passes JAX uses with the
/// global pass registry.
///
/// The caller must keep the registry alive and must not use it from another thread for the
/// duration of the call. Calling this more than once, on the same or on different registries, is
/// allowed.
pub fn register_dialects<R>(registry: &R) -> Result<(), Error>
where
    R: InsertDialect + ?Sized,
{
    insert_dialects(registry, JAX_DIALECTS.iter().copied())?;
    register_jax_passes();
    log::info!("Registered {} JAX dialects", JAX_DIALECTS.len());
    Ok(())
}
