//! Randomized value filler
//!
//! One `match` over [`Target`] decides how every kind is populated:
//!
//! | Kind | Policy |
//! |---|---|
//! | bool | one bit of a 63-bit draw |
//! | signed ints | low bits of a 63-bit draw (128-bit: two draws) |
//! | unsigned ints | low bits of a 64-bit draw (128-bit: two draws) |
//! | floats | uniform in `[0, 1)` |
//! | complex | real then imaginary part, each uniform in `[0, 1)` |
//! | strings | 16 hex digits of a 64-bit draw |
//! | arrays | every slot, length unchanged |
//! | sequences | existing elements in place; else `capacity` or `[1, max]` fresh ones |
//! | maps | existing values in key order; else `[1, max]` fresh entries, key before value |
//! | optionals | allocate when absent, then recurse |
//! | records | every field in declaration order |

use crate::{
    ComplexTarget, Fill, FillRng, FloatTarget, IntTarget, MappingTarget, SequenceTarget, Target,
    UintTarget,
};
use probity_core::ProbityConfig;

/// Populates values from one seeded stream.
///
/// Reusing a filler across several values continues the same stream, so the
/// second value differs from what a fresh `fill_from_seed` would give it.
#[derive(Debug, Clone)]
pub struct Filler {
    rng: FillRng,
    max_container_size: usize,
}

impl Filler {
    pub fn new(seed: u64, config: &ProbityConfig) -> Self {
        Self {
            rng: FillRng::new(seed),
            max_container_size: config.max_container_size,
        }
    }

    /// Filler with default configuration.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(seed, &ProbityConfig::default())
    }

    pub fn max_container_size(&self) -> usize {
        self.max_container_size
    }

    /// The underlying stream, for custom draw rules.
    pub fn rng_mut(&mut self) -> &mut FillRng {
        &mut self.rng
    }

    pub fn fill<T: Fill>(&mut self, target: &mut T) {
        self.fill_dyn(target);
    }

    /// A default value of `T`, then filled.
    pub fn generate<T: Fill + Default>(&mut self) -> T {
        let mut value = T::default();
        self.fill(&mut value);
        value
    }

    pub fn fill_dyn(&mut self, target: &mut dyn Fill) {
        match target.target() {
            Target::Bool(v) => *v = self.rng.bool(),
            Target::Int(slot) => self.fill_int(slot),
            Target::Uint(slot) => self.fill_uint(slot),
            Target::Float(FloatTarget::F32(v)) => *v = self.rng.float32(),
            Target::Float(FloatTarget::F64(v)) => *v = self.rng.float64(),
            Target::Complex(ComplexTarget::C32(v)) => {
                v.re = self.rng.float32();
                v.im = self.rng.float32();
            }
            Target::Complex(ComplexTarget::C64(v)) => {
                v.re = self.rng.float64();
                v.im = self.rng.float64();
            }
            Target::Text(v) => *v = self.rng.hex_string(),
            Target::Array(slots) | Target::Record(slots) => {
                for slot in slots {
                    self.fill_dyn(slot);
                }
            }
            Target::Sequence(seq) => self.fill_sequence(seq),
            Target::Mapping(map) => self.fill_mapping(map),
            Target::Optional(opt) => {
                let pointee = opt.get_or_allocate();
                self.fill_dyn(pointee);
            }
            Target::Dynamic(inner) => self.fill_dyn(inner),
            Target::Drawn(custom) => custom.draw(&mut self.rng),
        }
    }

    fn fill_int(&mut self, slot: IntTarget<'_>) {
        match slot {
            IntTarget::I8(v) => *v = self.rng.int63() as i8,
            IntTarget::I16(v) => *v = self.rng.int63() as i16,
            IntTarget::I32(v) => *v = self.rng.int63() as i32,
            IntTarget::I64(v) => *v = self.rng.int63(),
            IntTarget::Isize(v) => *v = self.rng.int63() as isize,
            IntTarget::I128(v) => {
                let hi = self.rng.int63() as u128;
                let lo = self.rng.uint64() as u128;
                *v = ((hi << 64) | lo) as i128;
            }
        }
    }

    fn fill_uint(&mut self, slot: UintTarget<'_>) {
        match slot {
            UintTarget::U8(v) => *v = self.rng.uint64() as u8,
            UintTarget::U16(v) => *v = self.rng.uint64() as u16,
            UintTarget::U32(v) => *v = self.rng.uint64() as u32,
            UintTarget::U64(v) => *v = self.rng.uint64(),
            UintTarget::Usize(v) => *v = self.rng.uint64() as usize,
            UintTarget::U128(v) => {
                let hi = self.rng.uint64() as u128;
                let lo = self.rng.uint64() as u128;
                *v = (hi << 64) | lo;
            }
        }
    }

    fn fill_sequence(&mut self, seq: &mut dyn SequenceTarget) {
        if !seq.is_empty() {
            for element in seq.elements() {
                self.fill_dyn(element);
            }
            return;
        }

        let n = match seq.capacity() {
            0 => self.rng.container_len(self.max_container_size),
            reserved => reserved,
        };
        for _ in 0..n {
            seq.push_fresh(self);
        }
    }

    fn fill_mapping(&mut self, map: &mut dyn MappingTarget) {
        if !map.is_empty() {
            for value in map.values() {
                self.fill_dyn(value);
            }
            return;
        }

        let n = self.rng.container_len(self.max_container_size);
        for _ in 0..n {
            map.insert_fresh(self);
        }
    }
}
