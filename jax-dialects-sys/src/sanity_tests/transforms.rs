use crate::{
    mlirRegisterAllSdyPassesAndPipelines, mlirRegisterTransformsPasses,
    mlirRegisterTransformsStripDebugInfo,
};

// The global pass registry is not thread safe, so every registration happens in a single test.
#[test]
fn test_mlir_register_passes() {
    unsafe {
        mlirRegisterTransformsPasses();
        mlirRegisterTransformsStripDebugInfo();
        mlirRegisterAllSdyPassesAndPipelines();
    }
}
