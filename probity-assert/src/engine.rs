//! Logical equality engine
//!
//! Walks two values of the same runtime type and decides equality by value
//! semantics:
//!
//! 1. Different runtime types are unequal (reported as a type mismatch).
//! 2. An ordering capability decides alone: equal iff `Equal`.
//! 3. Otherwise an equivalence capability decides alone.
//! 4. Otherwise the shapes are walked: optional, record, mapping, sequence,
//!    and scalars via the type's `PartialEq`.
//!
//! Every mismatching sub-path is reported to the [`TestContext`]; the walk
//! never stops at the first failure. No cycle detection is done, so cyclic
//! structures (`Rc` loops) recurse until the stack runs out.

use crate::{Logical, Shape};
use probity_core::{Failure, LabelPath, TestContext};
use std::cmp::Ordering;

/// Compare `a` (expected) against `b` (actual), reporting every mismatch.
pub fn logically_equal<A: Logical, B: Logical>(t: &dyn TestContext, a: &A, b: &B) -> bool {
    logically_equal_dyn(t, a, b, LabelPath::root())
}

/// Like [`logically_equal`], with a caller message prefixed to every label.
pub fn logically_equal_at<A: Logical, B: Logical>(
    t: &dyn TestContext,
    a: &A,
    b: &B,
    label: impl Into<LabelPath>,
) -> bool {
    logically_equal_dyn(t, a, b, label.into())
}

/// Trait-object entry point.
pub fn logically_equal_dyn(
    t: &dyn TestContext,
    a: &dyn Logical,
    b: &dyn Logical,
    label: LabelPath,
) -> bool {
    let engine = Engine { t };
    let equal = engine.compare(a, b, &label);
    tracing::debug!(
        test = t.name(),
        label = %label,
        type_name = a.type_name(),
        equal,
        "logical comparison finished"
    );
    equal
}

struct Engine<'t> {
    t: &'t dyn TestContext,
}

impl Engine<'_> {
    fn compare(&self, a: &dyn Logical, b: &dyn Logical, path: &LabelPath) -> bool {
        if a.runtime_type() != b.runtime_type() {
            self.t.report(Failure::TypeMismatch {
                label: path.to_string(),
                expected_type: a.type_name().to_string(),
                actual_type: b.type_name().to_string(),
                expected: format!("{:?}", a),
                actual: format!("{:?}", b),
            });
            return false;
        }

        if let Some(ordering) = a.ordering() {
            let equal = ordering.dyn_cmp(b.as_any()) == Some(Ordering::Equal);
            return self.verdict(equal, a, b, path);
        }

        if let Some(equivalence) = a.equivalence() {
            let equal = equivalence.dyn_eq(b.as_any());
            return self.verdict(equal, a, b, path);
        }

        match (a.shape(), b.shape()) {
            (Shape::Optional(x), Shape::Optional(y)) => match (x, y) {
                (None, None) => true,
                (Some(x), Some(y)) => self.compare(x, y, path),
                _ => self.verdict(false, a, b, path),
            },
            (Shape::Record(x), Shape::Record(y)) if !x.is_empty() && x.len() == y.len() => {
                self.compare_records(&x, &y, path)
            }
            (Shape::Mapping(x), Shape::Mapping(y)) => self.compare_mappings(x, y, path),
            (Shape::Sequence(x), Shape::Sequence(y)) => self.compare_sequences(&x, &y, path),
            (Shape::Scalar(x), _) => {
                let equal = x.dyn_eq(b.as_any());
                self.verdict(equal, a, b, path)
            }
            // Fieldless records, or a hand-written impl whose shape depends
            // on the value: fall back to the rendered form.
            _ => {
                let equal = format!("{:?}", a) == format!("{:?}", b);
                self.verdict(equal, a, b, path)
            }
        }
    }

    fn compare_records(
        &self,
        a: &[(&'static str, &dyn Logical)],
        b: &[(&'static str, &dyn Logical)],
        path: &LabelPath,
    ) -> bool {
        let mut equal = true;
        for ((name, x), (_, y)) in a.iter().zip(b) {
            equal &= self.compare(*x, *y, &path.field(name));
        }
        equal
    }

    fn compare_mappings(
        &self,
        mut a: Vec<(String, &dyn Logical)>,
        mut b: Vec<(String, &dyn Logical)>,
        path: &LabelPath,
    ) -> bool {
        a.sort_by(|x, y| x.0.cmp(&y.0));
        b.sort_by(|x, y| x.0.cmp(&y.0));

        let a_keys: Vec<String> = a.iter().map(|(k, _)| k.clone()).collect();
        let b_keys: Vec<String> = b.iter().map(|(k, _)| k.clone()).collect();
        if a_keys != b_keys {
            self.t.report(Failure::KeysMismatch {
                label: path.to_string(),
                expected: a_keys,
                actual: b_keys,
            });
            return false;
        }

        let mut equal = true;
        for ((key, x), (_, y)) in a.iter().zip(&b) {
            equal &= self.compare(*x, *y, &path.key(key));
        }
        equal
    }

    fn compare_sequences(&self, a: &[&dyn Logical], b: &[&dyn Logical], path: &LabelPath) -> bool {
        if a.len() != b.len() {
            self.t.report(Failure::LengthMismatch {
                label: path.to_string(),
                expected: a.len(),
                actual: b.len(),
            });
            return false;
        }

        let mut equal = true;
        for (i, (x, y)) in a.iter().zip(b).enumerate() {
            equal &= self.compare(*x, *y, &path.index(i));
        }
        equal
    }

    fn verdict(&self, equal: bool, a: &dyn Logical, b: &dyn Logical, path: &LabelPath) -> bool {
        if !equal {
            self.t.report(Failure::NotEqual {
                label: path.to_string(),
                expected: format!("{:?}", a),
                actual: format!("{:?}", b),
            });
        }
        equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use probity_core::TestCase;
    use std::collections::HashMap;

    #[derive(Debug)]
    struct Pair {
        left: i32,
        right: i32,
    }
    crate::logical_record!(Pair { left, right });

    #[test]
    fn test_every_failing_field_reports() {
        let t = TestCase::recording("fields");
        let equal = logically_equal(
            &t,
            &Pair { left: 1, right: 2 },
            &Pair { left: 3, right: 4 },
        );
        assert!(!equal);
        let labels: Vec<String> = t
            .failures()
            .iter()
            .filter_map(|f| f.label().map(str::to_string))
            .collect();
        assert_eq!(labels, vec![".left", ".right"]);
    }

    #[test]
    fn test_type_mismatch_reported() {
        let t = TestCase::recording("types");
        assert!(!logically_equal(&t, &10i64, &"hello"));
        assert!(matches!(
            t.failures().as_slice(),
            [Failure::TypeMismatch { expected_type, .. }] if expected_type == "i64"
        ));
    }

    #[test]
    fn test_map_keys_mismatch_stops_before_values() {
        let t = TestCase::recording("keys");
        let a: HashMap<String, i32> = [("one".to_string(), 1), ("two".to_string(), 2)].into();
        let b: HashMap<String, i32> = [("one".to_string(), 5), ("three".to_string(), 2)].into();
        assert!(!logically_equal(&t, &a, &b));
        assert_eq!(
            t.failures(),
            vec![Failure::KeysMismatch {
                label: "value".to_string(),
                expected: vec!["one".to_string(), "two".to_string()],
                actual: vec!["one".to_string(), "three".to_string()],
            }]
        );
    }

    #[test]
    fn test_map_value_label() {
        let t = TestCase::recording("values");
        let a: HashMap<&'static str, i32> = [("k", 1)].into();
        let b: HashMap<&'static str, i32> = [("k", 2)].into();
        assert!(!logically_equal_at(&t, &a, &b, "rates"));
        assert_eq!(t.failures()[0].label(), Some("rates.['k']"));
    }

    #[test]
    fn test_sequence_length_mismatch() {
        let t = TestCase::recording("lengths");
        assert!(!logically_equal(&t, &vec![1, 2], &vec![1, 2, 3]));
        assert_eq!(
            t.failures(),
            vec![Failure::LengthMismatch {
                label: "value".to_string(),
                expected: 2,
                actual: 3,
            }]
        );
    }

    #[test]
    fn test_sequence_element_labels() {
        let t = TestCase::recording("elements");
        assert!(!logically_equal(&t, &vec![1, 2, 3], &vec![1, 9, 8]));
        let labels: Vec<Option<String>> = t
            .failures()
            .iter()
            .map(|f| f.label().map(str::to_string))
            .collect();
        assert_eq!(
            labels,
            vec![Some(".[1]".to_string()), Some(".[2]".to_string())]
        );
    }

    #[test]
    fn test_unit_falls_back_to_rendering() {
        let t = TestCase::recording("unit");
        assert!(logically_equal(&t, &(), &()));
        assert!(!t.failed());
    }
}
