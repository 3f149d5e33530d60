use std::ptr::null_mut;

use mlir_sys::{
    MlirDialectHandle, MlirStringRef, mlirContextGetOrLoadDialect, mlirDialectHandleGetNamespace,
    mlirDialectHandleInsertDialect,
};
use rstest::rstest;

use crate::{
    mlirGetDialectHandle__arith__, mlirGetDialectHandle__func__, mlirGetDialectHandle__gpu__,
    mlirGetDialectHandle__llvm__, mlirGetDialectHandle__math__, mlirGetDialectHandle__memref__,
    mlirGetDialectHandle__nvgpu__, mlirGetDialectHandle__nvvm__, mlirGetDialectHandle__scf__,
    mlirGetDialectHandle__sdy__, mlirGetDialectHandle__vector__,
};

use super::{TestContext, TestRegistry, context, registry};

fn namespace(handle: MlirDialectHandle) -> String {
    let raw = unsafe { mlirDialectHandleGetNamespace(handle) };
    let bytes = unsafe { std::slice::from_raw_parts(raw.data as *const u8, raw.length) };
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn str_ref(s: &str) -> MlirStringRef {
    MlirStringRef {
        data: s.as_ptr() as *const _,
        length: s.len(),
    }
}

#[rstest]
#[case::arith(mlirGetDialectHandle__arith__, "arith")]
#[case::func(mlirGetDialectHandle__func__, "func")]
#[case::math(mlirGetDialectHandle__math__, "math")]
#[case::memref(mlirGetDialectHandle__memref__, "memref")]
#[case::scf(mlirGetDialectHandle__scf__, "scf")]
#[case::vector(mlirGetDialectHandle__vector__, "vector")]
#[case::gpu(mlirGetDialectHandle__gpu__, "gpu")]
#[case::nvgpu(mlirGetDialectHandle__nvgpu__, "nvgpu")]
#[case::nvvm(mlirGetDialectHandle__nvvm__, "nvvm")]
#[case::llvm(mlirGetDialectHandle__llvm__, "llvm")]
#[case::sdy(mlirGetDialectHandle__sdy__, "sdy")]
fn test_mlir_get_dialect_handle(
    #[case] get: unsafe extern "C" fn() -> MlirDialectHandle,
    #[case] expected: &str,
    registry: TestRegistry,
    context: TestContext,
) {
    let handle = unsafe { get() };
    assert_ne!(handle.ptr, null_mut());
    assert_eq!(namespace(handle), expected);

    unsafe { mlirDialectHandleInsertDialect(handle, registry.registry) };
    context.append(&registry);
    let dialect = unsafe { mlirContextGetOrLoadDialect(context.ctx, str_ref(expected)) };
    assert_ne!(dialect.ptr, null_mut());
}
