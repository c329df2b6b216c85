/// Implements `Spanned` for structs carrying a `span` field.
macro_rules! spanned {
    ($($ty:ident),* $(,)?) => {
        $(
            impl global_common::Spanned for $ty {
                #[inline]
                fn span(&self) -> global_common::Span {
                    self.span
                }
            }
        )*
    };
}

/// Implements `Spanned` for enums whose variants each wrap one node.
macro_rules! spanned_enum {
    ($ty:ident { $($variant:ident),* $(,)? }) => {
        impl global_common::Spanned for $ty {
            fn span(&self) -> global_common::Span {
                match self {
                    $($ty::$variant(n) => global_common::Spanned::span(n),)*
                }
            }
        }
    };
}

/// Implements `From<$variant_ty>` for an enum.
macro_rules! enum_from {
    ($ty:ident { $($variant:ident($inner:ty)),* $(,)? }) => {
        $(
            impl From<$inner> for $ty {
                #[inline]
                fn from(n: $inner) -> Self {
                    $ty::$variant(n)
                }
            }
        )*
    };
}
