//! Configuration related to MLIR and LLVM.

use anyhow::{Result, bail};
use bindgen::Builder;
use std::env;
use std::path::PathBuf;

use super::config::bindgen::BindgenConfig;

/// Environment variable shared with `mlir-sys` that points to the LLVM/MLIR install prefix.
pub const MLIR_PREFIX_VAR: &str = "MLIR_SYS_200_PREFIX";

/// Configuration specific to locating the MLIR headers.
#[derive(Debug, Copy, Clone, Default)]
pub struct MlirConfig;

impl MlirConfig {
    /// Returns the path configured by the `MLIR_SYS_200_PREFIX` environment variable.
    ///
    /// Returns [`Err`] if the path does not exists or is not a directory. When the variable is not
    /// set the headers are expected in the default include paths of the system.
    pub fn mlir_path(&self) -> Result<Option<PathBuf>> {
        println!("cargo:rerun-if-env-changed={MLIR_PREFIX_VAR}");
        let Some(path) = env::var_os(MLIR_PREFIX_VAR).map(PathBuf::from) else {
            return Ok(None);
        };

        if !path.is_dir() {
            bail!("MLIR prefix path {} is not a directory", path.display());
        }
        Ok(Some(path))
    }
}

impl BindgenConfig for MlirConfig {
    fn apply(&self, bindgen: Builder) -> Result<Builder> {
        Ok(match self.mlir_path()? {
            Some(path) => BindgenConfig::include_path(self, bindgen, &path),
            None => bindgen,
        })
    }
}
