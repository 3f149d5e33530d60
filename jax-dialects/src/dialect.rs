//! The fixed set of dialects JAX needs in its registry.

use std::{fmt, str::FromStr};

use melior::dialect::DialectHandle;
use mlir_sys::MlirDialectHandle;

use crate::{error::Error, macros::jax_dialects};

jax_dialects! {
    Arith => "arith", mlirGetDialectHandle__arith__;
    Func => "func", mlirGetDialectHandle__func__;
    Math => "math", mlirGetDialectHandle__math__;
    MemRef => "memref", mlirGetDialectHandle__memref__;
    Scf => "scf", mlirGetDialectHandle__scf__;
    Vector => "vector", mlirGetDialectHandle__vector__;
    // Mosaic GPU
    Gpu => "gpu", mlirGetDialectHandle__gpu__;
    NvGpu => "nvgpu", mlirGetDialectHandle__nvgpu__;
    Nvvm => "nvvm", mlirGetDialectHandle__nvvm__;
    Llvm => "llvm", mlirGetDialectHandle__llvm__;
    /// Target of the Shardy sharding propagation passes.
    Sdy => "sdy", mlirGetDialectHandle__sdy__;
}

impl JaxDialect {
    /// Resolves the handle of this dialect from the statically linked dialect descriptors.
    ///
    /// Fails if the accessor yields no handle or a handle for another namespace, both of which
    /// can only happen when the dialect libraries do not match the ones this crate was built for.
    pub fn handle(self) -> Result<DialectHandle, Error> {
        resolve(self.namespace(), unsafe { (self.accessor())() })
    }
}

fn resolve(expected: &'static str, raw: MlirDialectHandle) -> Result<DialectHandle, Error> {
    if raw.ptr.is_null() {
        return Err(Error::UnresolvableDialect(expected));
    }
    let handle = unsafe { DialectHandle::from_raw(raw) };

    let namespace = handle.namespace();
    let namespace = namespace.as_str()?;
    if namespace != expected {
        return Err(Error::NamespaceMismatch {
            expected,
            actual: namespace.to_owned(),
        });
    }
    Ok(handle)
}

impl fmt::Display for JaxDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}

impl FromStr for JaxDialect {
    type Err = Error;

    fn from_str(namespace: &str) -> Result<Self, Self::Err> {
        JAX_DIALECTS
            .iter()
            .copied()
            .find(|dialect| dialect.namespace() == namespace)
            .ok_or_else(|| Error::UnknownDialect(namespace.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, ptr::null_mut};

    use jax_dialects_sys::{mlirGetDialectHandle__arith__, mlirGetDialectHandle__sdy__};
    use rstest::rstest;

    use super::*;

    #[test]
    fn table_has_eleven_distinct_dialects() {
        let namespaces: HashSet<_> = JAX_DIALECTS.iter().map(|d| d.namespace()).collect();
        assert_eq!(JAX_DIALECTS.len(), 11);
        assert_eq!(namespaces.len(), JAX_DIALECTS.len());
    }

    #[test]
    fn registration_order() {
        let order: Vec<_> = JAX_DIALECTS.iter().map(|d| d.namespace()).collect();
        similar_asserts::assert_eq!(
            order,
            vec![
                "arith", "func", "math", "memref", "scf", "vector", "gpu", "nvgpu", "nvvm",
                "llvm", "sdy"
            ]
        );
    }

    #[test]
    fn displays_namespace() {
        assert_eq!(JaxDialect::NvGpu.to_string(), "nvgpu");
        assert_eq!(format!("{}", JaxDialect::MemRef), "memref");
    }

    #[rstest]
    #[case("arith", JaxDialect::Arith)]
    #[case("memref", JaxDialect::MemRef)]
    #[case("nvgpu", JaxDialect::NvGpu)]
    #[case("sdy", JaxDialect::Sdy)]
    fn parse_namespace(#[case] namespace: &str, #[case] expected: JaxDialect) {
        assert_eq!(namespace.parse::<JaxDialect>(), Ok(expected));
    }

    #[rstest]
    #[case("tosa")]
    #[case("")]
    #[case("Arith")]
    fn parse_unknown_namespace(#[case] namespace: &str) {
        assert_eq!(
            namespace.parse::<JaxDialect>(),
            Err(Error::UnknownDialect(namespace.to_owned()))
        );
    }

    #[test]
    fn every_handle_matches_its_namespace() {
        for dialect in JAX_DIALECTS {
            let handle = dialect.handle().unwrap();
            assert_eq!(handle.namespace().as_str().unwrap(), dialect.namespace());
        }
    }

    #[test]
    fn null_handle_is_unresolvable() {
        let result = resolve("gpu", MlirDialectHandle { ptr: null_mut() });
        assert!(matches!(result, Err(Error::UnresolvableDialect("gpu"))));
    }

    #[rstest]
    #[case("gpu", mlirGetDialectHandle__arith__, "arith")]
    #[case("llvm", mlirGetDialectHandle__sdy__, "sdy")]
    fn handle_of_another_dialect_is_a_mismatch(
        #[case] expected: &'static str,
        #[case] accessor: unsafe extern "C" fn() -> MlirDialectHandle,
        #[case] actual: &str,
    ) {
        match resolve(expected, unsafe { accessor() }) {
            Err(Error::NamespaceMismatch {
                expected: reported,
                actual: resolved,
            }) => {
                assert_eq!(reported, expected);
                assert_eq!(resolved, actual);
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("'{actual}' handle accepted as '{expected}'"),
        }
    }

    #[test]
    fn matching_handle_resolves() {
        let handle = resolve("arith", unsafe { mlirGetDialectHandle__arith__() }).unwrap();
        assert_eq!(handle.namespace().as_str().unwrap(), "arith");
    }
}
