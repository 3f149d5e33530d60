use jax_dialects::{context::is_dialect_available, dialect::JAX_DIALECTS};
use log::LevelFilter;
use melior::{Context, dialect::DialectRegistry};
use simplelog::{Config, TestLogger};

pub fn setup() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

/// Appends the registry to a fresh context and returns how many dialects it added, together with
/// the JAX namespaces that became available.
pub fn membership(registry: &DialectRegistry) -> (usize, Vec<&'static str>) {
    let baseline = Context::new().registered_dialect_count();
    let context = Context::new();
    context.append_dialect_registry(registry);
    let added = context.registered_dialect_count() - baseline;
    let present = JAX_DIALECTS
        .iter()
        .map(|dialect| dialect.namespace())
        .filter(|namespace| is_dialect_available(&context, namespace))
        .collect();
    (added, present)
}
