use jax_dialects_sys_build_support::{build_bindings, default::DefaultConfig};
use std::{env, path::PathBuf, process::exit};

const FUNCTIONS: &[&str] = &[
    "RegisterTransformsPasses",
    "RegisterTransformsStripDebugInfo",
    "RegisterAllSdyPassesAndPipelines",
];

const DEFAULT_CFG: DefaultConfig = DefaultConfig::new(FUNCTIONS);

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let shardy = build_bindings(&DEFAULT_CFG, &out_dir)?;
    eprintln!("shardy_path = {}", shardy.path().display());
    Ok(())
}
