//! Locating a prebuilt Shardy install and linking against its C API archives.

use anyhow::{Context as _, Result, anyhow, bail};
use bindgen::Builder;
use glob::glob;
use std::{
    collections::BTreeSet,
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
};

use super::config::bindgen::BindgenConfig;

/// Environment variable that points to the Shardy install prefix.
pub const SHARDY_PREFIX_VAR: &str = "SHARDY_PREFIX";

/// A Shardy install: `include/` with the C API headers and the static archives under `lib/` or
/// `lib64/`.
#[derive(Debug, Clone)]
pub struct ShardyInstall {
    path: PathBuf,
}

impl From<PathBuf> for ShardyInstall {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ShardyInstall {
    /// Reads the install prefix from `SHARDY_PREFIX`.
    pub fn locate() -> Result<Self> {
        println!("cargo:rerun-if-env-changed={SHARDY_PREFIX_VAR}");
        let path = env::var_os(SHARDY_PREFIX_VAR)
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("{SHARDY_PREFIX_VAR} must point to a Shardy install"))?;
        if !path.is_dir() {
            bail!("Shardy prefix path {} is not a directory", path.display());
        }
        Ok(Self::from(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Shardy archives under the prefix. Other archives, such as a bundled LLVM/MLIR, are skipped
    /// since `mlir-sys` already links MLIR.
    fn libraries(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.path.join("lib*/**/*.a");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| anyhow!("Non UTF-8 path {}", pattern.display()))?;
        let mut libraries = Vec::new();
        for entry in glob(pattern)? {
            let lib = entry.context("Failed to read library path")?;
            if archive_name_of(&lib).is_some_and(is_shardy_archive) {
                libraries.push(lib);
            }
        }
        Ok(libraries)
    }

    /// Names of the static archives, as expected by `cargo:rustc-link-lib`.
    pub fn library_names(&self) -> Result<Vec<String>> {
        Ok(self
            .libraries()?
            .iter()
            .filter_map(|lib| archive_name_of(lib))
            .map(str::to_owned)
            .collect())
    }

    /// Directories that contain at least one Shardy archive.
    pub fn link_paths(&self) -> Result<BTreeSet<PathBuf>> {
        Ok(self
            .libraries()?
            .iter()
            .filter_map(|lib| lib.parent().map(Path::to_path_buf))
            .collect())
    }

    pub fn emit_cargo_instructions(&self) -> Result<()> {
        let names = self.library_names()?;
        if names.is_empty() {
            bail!("No static archives found under {}", self.path.display());
        }
        for path in self.link_paths()? {
            println!("cargo:rustc-link-search=native={}", path.display());
        }
        for name in names {
            println!("cargo:rustc-link-lib=static={name}");
        }
        Ok(())
    }
}

impl BindgenConfig for ShardyInstall {
    fn apply(&self, bindgen: Builder) -> Result<Builder> {
        Ok(BindgenConfig::include_path(self, bindgen, &self.path))
    }
}

/// Archive name prefixes of the Shardy libraries.
const SHARDY_ARCHIVE_PREFIXES: &[&str] = &["Sdy", "Shardy", "shardy"];

fn parse_archive_name(name: &str) -> Option<&str> {
    name.strip_prefix("lib")?.strip_suffix(".a")
}

fn archive_name_of(path: &Path) -> Option<&str> {
    path.file_name()
        .and_then(OsStr::to_str)
        .and_then(parse_archive_name)
}

fn is_shardy_archive(name: &str) -> bool {
    SHARDY_ARCHIVE_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}
