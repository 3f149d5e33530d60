/// Declares [`JaxDialect`](crate::dialect::JaxDialect) and the ordered table of dialects from a
/// single list of `Variant => "namespace", accessor` entries.
macro_rules! jax_dialects {
    ($($(#[$meta:meta])* $variant:ident => $namespace:literal, $accessor:ident;)+) => {
        /// A dialect registered by [`register_dialects`](crate::register_dialects).
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum JaxDialect {
            $($(#[$meta])* $variant,)+
        }

        /// Every [`JaxDialect`], in registration order.
        pub const JAX_DIALECTS: &[JaxDialect] = &[$(JaxDialect::$variant,)+];

        impl JaxDialect {
            /// Returns the namespace the dialect is registered under.
            pub const fn namespace(self) -> &'static str {
                match self {
                    $(JaxDialect::$variant => $namespace,)+
                }
            }

            fn accessor(self) -> unsafe extern "C" fn() -> mlir_sys::MlirDialectHandle {
                match self {
                    $(JaxDialect::$variant => jax_dialects_sys::$accessor,)+
                }
            }
        }
    };
}

pub(crate) use jax_dialects;
