//! The `Logical` trait: how a type exposes itself to the equality engine
//!
//! A type either advertises a comparison capability (ordering or
//! equivalence), which the engine prefers, or describes its structure through
//! a [`Shape`] that the engine walks.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;

/// Runtime type access for trait objects.
///
/// Blanket-implemented for every `'static` sized type; never implement it by
/// hand.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Equality against a type-erased value of the same concrete type.
pub trait DynEq {
    /// `false` whenever `other` is a different concrete type.
    fn dyn_eq(&self, other: &dyn Any) -> bool;
}

impl<T: PartialEq + Any> DynEq for T {
    fn dyn_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}

/// Ordering against a type-erased value of the same concrete type.
pub trait DynOrd {
    /// `None` for a different concrete type or an unordered pair.
    fn dyn_cmp(&self, other: &dyn Any) -> Option<Ordering>;
}

impl<T: PartialOrd + Any> DynOrd for T {
    fn dyn_cmp(&self, other: &dyn Any) -> Option<Ordering> {
        other
            .downcast_ref::<T>()
            .and_then(|other| self.partial_cmp(other))
    }
}

/// Structural view of a value.
pub enum Shape<'a> {
    /// Compared with the type's own `PartialEq`.
    Scalar(&'a dyn DynEq),
    /// A reference that may be absent.
    Optional(Option<&'a dyn Logical>),
    /// Positional aggregate: arrays, vectors, deques.
    Sequence(Vec<&'a dyn Logical>),
    /// Keyed aggregate. Keys are rendered with `Display`.
    Mapping(Vec<(String, &'a dyn Logical)>),
    /// Named fields in declaration order, private ones included.
    Record(Vec<(&'static str, &'a dyn Logical)>),
}

impl Shape<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Scalar(_) => "scalar",
            Shape::Optional(_) => "optional",
            Shape::Sequence(_) => "sequence",
            Shape::Mapping(_) => "mapping",
            Shape::Record(_) => "record",
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar(_) => f.write_str("Scalar"),
            Shape::Optional(inner) => f.debug_tuple("Optional").field(inner).finish(),
            Shape::Sequence(items) => f.debug_tuple("Sequence").field(&items.len()).finish(),
            Shape::Mapping(entries) => {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
                f.debug_tuple("Mapping").field(&keys).finish()
            }
            Shape::Record(fields) => {
                let names: Vec<&str> = fields.iter().map(|(n, _)| *n).collect();
                f.debug_tuple("Record").field(&names).finish()
            }
        }
    }
}

/// A value the logical-equality engine can compare.
///
/// Implement it with the `logical_*` macros, or by hand for types that need
/// a custom shape. Record implementations belong in the type's own module so
/// that private fields can be listed.
pub trait Logical: AsAny + fmt::Debug {
    /// Ordering capability. When present, values are equal iff the ordering
    /// is `Equal`, and nothing else about them is inspected.
    fn ordering(&self) -> Option<&dyn DynOrd> {
        None
    }

    /// Equivalence capability, consulted when there is no ordering.
    fn equivalence(&self) -> Option<&dyn DynEq> {
        None
    }

    fn shape(&self) -> Shape<'_>;
}

impl dyn Logical {
    /// Runtime type of the value behind the trait object.
    pub fn runtime_type(&self) -> TypeId {
        self.as_any().type_id()
    }
}
