//! Breadcrumb paths identifying where in a nested value a mismatch occurred

use std::fmt;

/// A label path such as `.accounts.[2].['eur']`.
///
/// The optional prefix is the caller-supplied message; segments are appended
/// as the comparison descends. An empty path renders as `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelPath {
    prefix: String,
    segments: Vec<String>,
}

impl LabelPath {
    /// Root path with no caller message.
    pub fn root() -> Self {
        Self::default()
    }

    /// Root path carrying a caller-supplied message.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            segments: Vec::new(),
        }
    }

    /// Extend with a record field: `.name`.
    pub fn field(&self, name: &str) -> Self {
        self.child(format!(".{}", name))
    }

    /// Extend with a sequence index: `.[i]`.
    pub fn index(&self, index: usize) -> Self {
        self.child(format!(".[{}]", index))
    }

    /// Extend with a map key: `.['key']`.
    pub fn key(&self, key: &str) -> Self {
        self.child(format!(".['{}']", key))
    }

    fn child(&self, segment: String) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self {
            prefix: self.prefix.clone(),
            segments,
        }
    }

    pub fn is_root(&self) -> bool {
        self.prefix.is_empty() && self.segments.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for LabelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("value");
        }
        f.write_str(&self.prefix)?;
        for segment in &self.segments {
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl From<&str> for LabelPath {
    fn from(prefix: &str) -> Self {
        Self::with_prefix(prefix)
    }
}

impl From<String> for LabelPath {
    fn from(prefix: String) -> Self {
        Self::with_prefix(prefix)
    }
}
