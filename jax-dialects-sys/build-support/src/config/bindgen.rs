use std::path::Path;

use anyhow::Result;
use bindgen::{Bindings, Builder};

pub trait BindgenConfig {
    fn apply(&self, bindgen: Builder) -> Result<Builder>;

    fn include_path(&self, bindgen: Builder, path: &Path) -> Builder {
        bindgen.clang_arg(format!("-I{}", path.join("include").display()))
    }

    fn generate(&self) -> Result<Bindings> {
        Ok(self.apply(Builder::default())?.generate()?)
    }
}

impl<T: BindgenConfig> BindgenConfig for &T {
    fn apply(&self, bindgen: Builder) -> Result<Builder> {
        (*self).apply(bindgen)
    }
}

impl<T: BindgenConfig> BindgenConfig for Option<T> {
    fn apply(&self, bindgen: Builder) -> Result<Builder> {
        match self {
            Some(conf) => conf.apply(bindgen),
            None => Ok(bindgen),
        }
    }
}

impl<T1: BindgenConfig, T2: BindgenConfig> BindgenConfig for (T1, T2) {
    fn apply(&self, bindgen: Builder) -> Result<Builder> {
        self.1.apply(self.0.apply(bindgen)?)
    }
}
