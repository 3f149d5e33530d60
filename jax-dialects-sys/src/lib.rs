#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![warn(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]

//! Raw declarations of the MLIR and Shardy C API entry points consumed by `jax-dialects`.
//!
//! Types are shared with [`mlir_sys`] so handles and registries can be passed between both crates.

use mlir_sys::MlirDialectHandle;

include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
