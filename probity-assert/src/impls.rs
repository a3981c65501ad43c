//! `Logical` for std, decimal and chrono types

use crate::{DynOrd, Logical, Shape};
use chrono::{DateTime, Utc};
use probity_core::{Complex32, Complex64};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::{Debug, Display};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

crate::logical_scalar!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
    (),
    Duration,
    Complex32,
    Complex64,
);

// Decimals compare numerically: 2.0 and 20/10 carry different scales.
crate::logical_ordered!(Decimal);

impl Logical for DateTime<Utc> {
    fn ordering(&self) -> Option<&dyn DynOrd> {
        Some(self)
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(self)
    }
}

impl<T: Logical> Logical for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(self.as_ref().map(|v| v as &dyn Logical))
    }
}

impl<T: Logical> Logical for Box<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(Some(&**self))
    }
}

// Mixed concrete types behind one field: the engine checks the runtime type
// of the boxed value before looking inside it.
impl Logical for Box<dyn Logical> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(Some(&**self))
    }
}

impl<T: Logical> Logical for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(Some(&**self))
    }
}

impl<T: Logical> Logical for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(Some(&**self))
    }
}

impl<T: Logical> Logical for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|v| v as &dyn Logical).collect())
    }
}

impl<T: Logical> Logical for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|v| v as &dyn Logical).collect())
    }
}

impl<T: Logical, const N: usize> Logical for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|v| v as &dyn Logical).collect())
    }
}

impl<K, V, S> Logical for HashMap<K, V, S>
where
    K: Display + Debug + 'static,
    V: Logical,
    S: 'static,
{
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(
            self.iter()
                .map(|(k, v)| (k.to_string(), v as &dyn Logical))
                .collect(),
        )
    }
}

impl<K, V> Logical for BTreeMap<K, V>
where
    K: Display + Debug + 'static,
    V: Logical,
{
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(
            self.iter()
                .map(|(k, v)| (k.to_string(), v as &dyn Logical))
                .collect(),
        )
    }
}

macro_rules! logical_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Logical),+> Logical for ($($name,)+) {
            fn shape(&self) -> Shape<'_> {
                Shape::Record(vec![$((stringify!($idx), &self.$idx as &dyn Logical)),+])
            }
        }
    };
}

logical_tuple!(A: 0);
logical_tuple!(A: 0, B: 1);
logical_tuple!(A: 0, B: 1, C: 2);
logical_tuple!(A: 0, B: 1, C: 2, D: 3);
