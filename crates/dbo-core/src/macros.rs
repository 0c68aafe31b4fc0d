/// Implements `From<$ty> for Value` and the symmetric `PartialEq` pair used
/// to compare values against Rust primitives.
macro_rules! impl_value_primitive {
    ($($ty:ty => $variant:ident as $cast:ty),* $(,)?) => {
        $(
            impl From<$ty> for $crate::stmt::Value {
                fn from(value: $ty) -> Self {
                    $crate::stmt::Value::$variant(value as $cast)
                }
            }

            impl PartialEq<$ty> for $crate::stmt::Value {
                fn eq(&self, other: &$ty) -> bool {
                    matches!(self, $crate::stmt::Value::$variant(val) if *val == *other as $cast)
                }
            }

            impl PartialEq<$crate::stmt::Value> for $ty {
                fn eq(&self, other: &$crate::stmt::Value) -> bool {
                    other.eq(self)
                }
            }
        )*
    };
}
