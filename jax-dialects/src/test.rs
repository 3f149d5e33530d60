use melior::{Context, dialect::DialectRegistry};
use rstest::fixture;

#[fixture]
pub fn registry() -> DialectRegistry {
    DialectRegistry::new()
}

/// A context with nothing registered beyond what MLIR registers by itself.
#[fixture]
pub fn ctx() -> Context {
    let context = Context::new();

    context.attach_diagnostic_handler(|diagnostic| {
        eprintln!("{}", diagnostic);
        true
    });

    context
}
