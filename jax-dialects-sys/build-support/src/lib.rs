use anyhow::Result;
use config::bindgen::BindgenConfig;
use default::DefaultConfig;
use shardy::ShardyInstall;
use std::path::Path;

pub mod config;
pub mod default;
pub mod mlir;
pub mod shardy;

/// Locates the Shardy install, emits the cargo link directives for its archives and writes the
/// bindings of the consumed C API to `out_dir/bindings.rs`.
pub fn build_bindings(default_cfg: &DefaultConfig, out_dir: &Path) -> Result<ShardyInstall> {
    let shardy = ShardyInstall::locate()?;
    shardy.emit_cargo_instructions()?;

    (default_cfg, &shardy)
        .generate()?
        .write_to_file(out_dir.join("bindings.rs"))?;
    Ok(shardy)
}
