//! Complex scalars
//!
//! Rust has no built-in complex type; these cover the two widths the filler
//! and equality engine treat as scalars.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complex number with `f32` parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex32 {
    pub re: f32,
    pub im: f32,
}

/// Complex number with `f64` parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

impl Complex32 {
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

impl Complex64 {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl fmt::Display for Complex32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{:+}i)", self.re, self.im)
    }
}

impl fmt::Display for Complex64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{:+}i)", self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Complex64::new(0.5, 0.25).to_string(), "(0.5+0.25i)");
        assert_eq!(Complex32::new(1.0, -2.0).to_string(), "(1-2i)");
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Complex64::default(), Complex64::new(0.0, 0.0));
    }
}
