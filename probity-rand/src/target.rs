//! The `Fill` trait: how a type exposes itself to the filler

use crate::{FillRng, Filler};
use probity_core::{Complex32, Complex64};

/// A value the filler can populate in place.
///
/// Implement it with the `fill_*` macros, or by hand for custom kinds.
/// Record implementations belong in the type's own module so private fields
/// can be listed.
pub trait Fill: 'static {
    fn target(&mut self) -> Target<'_>;
}

/// Mutable kind view of a value, dispatched on by [`Filler`].
pub enum Target<'a> {
    Bool(&'a mut bool),
    Int(IntTarget<'a>),
    Uint(UintTarget<'a>),
    Float(FloatTarget<'a>),
    Complex(ComplexTarget<'a>),
    Text(&'a mut String),
    /// Fixed-length slots; the length never changes.
    Array(Vec<&'a mut dyn Fill>),
    Sequence(&'a mut dyn SequenceTarget),
    Mapping(&'a mut dyn MappingTarget),
    /// A reference that may be absent; allocated before recursing.
    Optional(&'a mut dyn OptionalTarget),
    /// A value held behind a pointer or trait object; recursed into as-is.
    Dynamic(&'a mut dyn Fill),
    /// Fields in declaration order, private ones included.
    Record(Vec<&'a mut dyn Fill>),
    /// A value with its own generation rule.
    Drawn(&'a mut dyn Draw),
}

pub enum IntTarget<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    I128(&'a mut i128),
    Isize(&'a mut isize),
}

pub enum UintTarget<'a> {
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    U128(&'a mut u128),
    Usize(&'a mut usize),
}

pub enum FloatTarget<'a> {
    F32(&'a mut f32),
    F64(&'a mut f64),
}

pub enum ComplexTarget<'a> {
    C32(&'a mut Complex32),
    C64(&'a mut Complex64),
}

/// Growable positional container.
pub trait SequenceTarget {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Spare room reserved by the caller; a fill of an empty sequence
    /// generates exactly this many elements when it is non-zero.
    fn capacity(&self) -> usize;

    fn elements(&mut self) -> Vec<&mut dyn Fill>;

    /// Append one freshly generated element.
    fn push_fresh(&mut self, filler: &mut Filler);
}

/// Keyed container.
pub trait MappingTarget {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values of existing entries, in ascending key order.
    fn values(&mut self) -> Vec<&mut dyn Fill>;

    /// Insert one freshly generated key and value. A key that collides with
    /// an existing one replaces it.
    fn insert_fresh(&mut self, filler: &mut Filler);
}

/// Possibly-absent reference.
pub trait OptionalTarget {
    /// The pointee, allocating a default one when absent.
    fn get_or_allocate(&mut self) -> &mut dyn Fill;
}

/// Custom generation from the raw stream.
pub trait Draw {
    fn draw(&mut self, rng: &mut FillRng);
}
