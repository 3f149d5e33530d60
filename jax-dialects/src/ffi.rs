//! C ABI entry point for host environments (e.g. the Python `mlir` package of JAX) that own the
//! dialect registry and call into this library once during initialization.

use mlir_sys::{MlirDialectRegistry, MlirLogicalResult};

use crate::{registry::RegistryRef, register_dialects, utils::FromRaw};

const SUCCESS: MlirLogicalResult = MlirLogicalResult { value: 1 };
const FAILURE: MlirLogicalResult = MlirLogicalResult { value: 0 };

/// Registers the JAX dialects into `registry` and the passes JAX uses into the global pass
/// registry.
///
/// Returns a failed result, after logging the cause, if the registry is null or a dialect could
/// not be resolved. In the latter case the registry is left untouched.
///
/// # Safety
/// `registry` must be null or a live registry owned by the caller that no other thread accesses
/// during the call.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub unsafe extern "C" fn jaxRegisterDialects(registry: MlirDialectRegistry) -> MlirLogicalResult {
    if registry.ptr.is_null() {
        log::error!("Cannot register JAX dialects into a null registry");
        return FAILURE;
    }
    let registry = unsafe { RegistryRef::from_raw(registry) };
    match register_dialects(&registry) {
        Ok(()) => SUCCESS,
        Err(err) => {
            log::error!("Failed to register JAX dialects: {err}");
            FAILURE
        }
    }
}
