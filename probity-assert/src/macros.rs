//! Declarative `Logical` implementations

/// Compare values with their own `PartialEq`, reporting both sides on
/// mismatch.
///
/// ```
/// #[derive(Debug, PartialEq)]
/// struct Code(u16);
/// probity_assert::logical_scalar!(Code);
/// ```
#[macro_export]
macro_rules! logical_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Logical for $ty {
                fn shape(&self) -> $crate::Shape<'_> {
                    $crate::Shape::Scalar(self)
                }
            }
        )+
    };
}

/// Prefer the type's `PartialOrd`: equal iff `partial_cmp` is `Equal`.
///
/// Suits decimal-like types whose representation varies for the same
/// numeric value.
#[macro_export]
macro_rules! logical_ordered {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Logical for $ty {
                fn ordering(&self) -> ::core::option::Option<&dyn $crate::DynOrd> {
                    ::core::option::Option::Some(self)
                }

                fn shape(&self) -> $crate::Shape<'_> {
                    $crate::Shape::Scalar(self)
                }
            }
        )+
    };
}

/// Prefer the type's `PartialEq` over field-by-field comparison.
#[macro_export]
macro_rules! logical_equivalent {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Logical for $ty {
                fn equivalence(&self) -> ::core::option::Option<&dyn $crate::DynEq> {
                    ::core::option::Option::Some(self)
                }

                fn shape(&self) -> $crate::Shape<'_> {
                    $crate::Shape::Scalar(self)
                }
            }
        )+
    };
}

/// Field-by-field comparison, in the listed order.
///
/// Invoke it in the module that defines the type so private fields can be
/// listed too. Tuple structs list their indices.
///
/// ```
/// mod ledger {
///     #[derive(Debug)]
///     pub struct Entry {
///         pub memo: String,
///         cents: i64,
///     }
///     probity_assert::logical_record!(Entry { memo, cents });
///
///     #[derive(Debug)]
///     pub struct Pair(pub u8, pub u8);
///     probity_assert::logical_record!(Pair { 0, 1 });
/// }
/// ```
#[macro_export]
macro_rules! logical_record {
    ($ty:ty { $($field:tt),* $(,)? }) => {
        impl $crate::Logical for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Record(::std::vec![
                    $( (::core::stringify!($field), &self.$field as &dyn $crate::Logical) ),*
                ])
            }
        }
    };
}
