//! Global pass registration.
//!
//! The MLIR pass registry is a process-wide singleton that is not safe to mutate from several
//! threads at once, and its registration routines are not documented as idempotent. Every entry
//! point here therefore runs its registration at most once per process, under
//! [`GLOBAL_REGISTRATION_MUTEX`].

use std::sync::{Mutex, OnceLock};

use jax_dialects_sys::{
    mlirRegisterAllSdyPassesAndPipelines, mlirRegisterTransformsPasses,
    mlirRegisterTransformsStripDebugInfo,
};

/// Serializes every registration into the global MLIR pass registry.
pub static GLOBAL_REGISTRATION_MUTEX: Mutex<()> = Mutex::new(());

fn register_once(initialized: &OnceLock<()>, family: &str, register: unsafe extern "C" fn()) {
    initialized.get_or_init(|| {
        let _guard = GLOBAL_REGISTRATION_MUTEX
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        unsafe { register() };
        log::debug!("Registered {family} passes");
    });
}

/// Registers the upstream MLIR transformation passes with the global registry.
pub fn register_transforms_passes() {
    static INITIALIZED: OnceLock<()> = OnceLock::new();
    register_once(&INITIALIZED, "transforms", mlirRegisterTransformsPasses);
}

/// Registers the pass that strips debug info from the IR with the global registry.
pub fn register_strip_debug_info_pass() {
    static INITIALIZED: OnceLock<()> = OnceLock::new();
    register_once(
        &INITIALIZED,
        "strip-debuginfo",
        mlirRegisterTransformsStripDebugInfo,
    );
}

/// Registers all Shardy passes and pipelines with the global registry.
pub fn register_shardy_passes_and_pipelines() {
    static INITIALIZED: OnceLock<()> = OnceLock::new();
    register_once(
        &INITIALIZED,
        "Shardy",
        mlirRegisterAllSdyPassesAndPipelines,
    );
}

/// Registers every pass family JAX relies on.
pub fn register_jax_passes() {
    register_transforms_passes();
    register_shardy_passes_and_pipelines();
    register_strip_debug_info_pass();
}
