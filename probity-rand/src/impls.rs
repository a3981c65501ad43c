//! `Fill` for std, decimal and chrono types

use crate::{
    ComplexTarget, Draw, Fill, FillRng, Filler, FloatTarget, IntTarget, MappingTarget,
    OptionalTarget, SequenceTarget, Target, UintTarget,
};
use chrono::{DateTime, Utc};
use probity_core::{Complex32, Complex64};
use rand::Rng;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::time::Duration;

/// Largest scale `rust_decimal` accepts.
const MAX_DECIMAL_SCALE: u32 = 28;

macro_rules! fill_numeric {
    ($($ty:ty => $kind:ident :: $variant:ident),+ $(,)?) => {
        $(
            impl Fill for $ty {
                fn target(&mut self) -> Target<'_> {
                    Target::$kind($variant::from(self))
                }
            }
        )+
    };
}

// The slot enums are built through small From impls so the macro above can
// stay one line per type.
macro_rules! slot_from {
    ($($slot:ident :: $variant:ident ($ty:ty)),+ $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for $slot<'a> {
                fn from(v: &'a mut $ty) -> Self {
                    $slot::$variant(v)
                }
            }
        )+
    };
}

slot_from!(
    IntTarget::I8(i8),
    IntTarget::I16(i16),
    IntTarget::I32(i32),
    IntTarget::I64(i64),
    IntTarget::I128(i128),
    IntTarget::Isize(isize),
    UintTarget::U8(u8),
    UintTarget::U16(u16),
    UintTarget::U32(u32),
    UintTarget::U64(u64),
    UintTarget::U128(u128),
    UintTarget::Usize(usize),
    FloatTarget::F32(f32),
    FloatTarget::F64(f64),
    ComplexTarget::C32(Complex32),
    ComplexTarget::C64(Complex64),
);

fill_numeric!(
    i8 => Int::IntTarget,
    i16 => Int::IntTarget,
    i32 => Int::IntTarget,
    i64 => Int::IntTarget,
    i128 => Int::IntTarget,
    isize => Int::IntTarget,
    u8 => Uint::UintTarget,
    u16 => Uint::UintTarget,
    u32 => Uint::UintTarget,
    u64 => Uint::UintTarget,
    u128 => Uint::UintTarget,
    usize => Uint::UintTarget,
    f32 => Float::FloatTarget,
    f64 => Float::FloatTarget,
    Complex32 => Complex::ComplexTarget,
    Complex64 => Complex::ComplexTarget,
);

impl Fill for bool {
    fn target(&mut self) -> Target<'_> {
        Target::Bool(self)
    }
}

impl Fill for String {
    fn target(&mut self) -> Target<'_> {
        Target::Text(self)
    }
}

impl Fill for () {
    fn target(&mut self) -> Target<'_> {
        Target::Record(Vec::new())
    }
}

// Decimals: a 63-bit mantissa at a random valid scale.
impl Draw for Decimal {
    fn draw(&mut self, rng: &mut FillRng) {
        let mantissa = rng.int63();
        let scale = rng.random_range(0..=MAX_DECIMAL_SCALE);
        *self = Decimal::new(mantissa, scale);
    }
}

impl Fill for Decimal {
    fn target(&mut self) -> Target<'_> {
        Target::Drawn(self)
    }
}

impl Draw for DateTime<Utc> {
    fn draw(&mut self, rng: &mut FillRng) {
        *self = DateTime::from_timestamp_nanos(rng.int63());
    }
}

impl Fill for DateTime<Utc> {
    fn target(&mut self) -> Target<'_> {
        Target::Drawn(self)
    }
}

impl Draw for Duration {
    fn draw(&mut self, rng: &mut FillRng) {
        *self = Duration::from_nanos(rng.int63() as u64);
    }
}

impl Fill for Duration {
    fn target(&mut self) -> Target<'_> {
        Target::Drawn(self)
    }
}

impl<T: Fill + Default> OptionalTarget for Option<T> {
    fn get_or_allocate(&mut self) -> &mut dyn Fill {
        self.get_or_insert_with(T::default)
    }
}

impl<T: Fill + Default> Fill for Option<T> {
    fn target(&mut self) -> Target<'_> {
        Target::Optional(self)
    }
}

impl<T: Fill> Fill for Box<T> {
    fn target(&mut self) -> Target<'_> {
        Target::Dynamic(&mut **self)
    }
}

impl Fill for Box<dyn Fill> {
    fn target(&mut self) -> Target<'_> {
        Target::Dynamic(&mut **self)
    }
}

impl<T: Fill, const N: usize> Fill for [T; N] {
    fn target(&mut self) -> Target<'_> {
        Target::Array(self.iter_mut().map(|v| v as &mut dyn Fill).collect())
    }
}

impl<T: Fill + Default> SequenceTarget for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    // Zero-sized elements report `usize::MAX`, which is never a reservation.
    fn capacity(&self) -> usize {
        if std::mem::size_of::<T>() == 0 {
            return 0;
        }
        Vec::capacity(self)
    }

    fn elements(&mut self) -> Vec<&mut dyn Fill> {
        self.iter_mut().map(|v| v as &mut dyn Fill).collect()
    }

    fn push_fresh(&mut self, filler: &mut Filler) {
        self.push(filler.generate());
    }
}

impl<T: Fill + Default> Fill for Vec<T> {
    fn target(&mut self) -> Target<'_> {
        Target::Sequence(self)
    }
}

impl<K, V, S> MappingTarget for HashMap<K, V, S>
where
    K: Fill + Default + Eq + Hash + Ord,
    V: Fill + Default,
    S: BuildHasher + 'static,
{
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn values(&mut self) -> Vec<&mut dyn Fill> {
        let mut entries: Vec<(&K, &mut V)> = self.iter_mut().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
            .into_iter()
            .map(|(_, v)| v as &mut dyn Fill)
            .collect()
    }

    fn insert_fresh(&mut self, filler: &mut Filler) {
        let key: K = filler.generate();
        let value: V = filler.generate();
        self.insert(key, value);
    }
}

impl<K, V, S> Fill for HashMap<K, V, S>
where
    K: Fill + Default + Eq + Hash + Ord,
    V: Fill + Default,
    S: BuildHasher + 'static,
{
    fn target(&mut self) -> Target<'_> {
        Target::Mapping(self)
    }
}

impl<K, V> MappingTarget for BTreeMap<K, V>
where
    K: Fill + Default + Ord,
    V: Fill + Default,
{
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn values(&mut self) -> Vec<&mut dyn Fill> {
        self.values_mut().map(|v| v as &mut dyn Fill).collect()
    }

    fn insert_fresh(&mut self, filler: &mut Filler) {
        let key: K = filler.generate();
        let value: V = filler.generate();
        self.insert(key, value);
    }
}

impl<K, V> Fill for BTreeMap<K, V>
where
    K: Fill + Default + Ord,
    V: Fill + Default,
{
    fn target(&mut self) -> Target<'_> {
        Target::Mapping(self)
    }
}

macro_rules! fill_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: Fill),+> Fill for ($($name,)+) {
            fn target(&mut self) -> Target<'_> {
                Target::Record(vec![$(&mut self.$idx as &mut dyn Fill),+])
            }
        }
    };
}

fill_tuple!(A.0);
fill_tuple!(A.0, B.1);
fill_tuple!(A.0, B.1, C.2);
fill_tuple!(A.0, B.1, C.2, D.3);
