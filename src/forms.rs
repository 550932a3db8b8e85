use serde::{Serialize, Serializer};
use std::fmt;

/// Canonical identifier for an SEC form-type code.
///
/// Wraps the exact spelling used on EDGAR (e.g. `10-K`, `DEF 14A`). Equality
/// is exact string comparison; no normalization is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormCode {
    code: &'static str,
}

impl FormCode {
    /// Create a form code with a canonical static spelling.
    pub const fn new(code: &'static str) -> Self {
        Self { code }
    }

    /// Return the raw code text.
    pub const fn as_str(&self) -> &'static str {
        self.code
    }

    /// Whether this code is an amendment variant (carries the `/A` suffix).
    pub fn is_amendment(&self) -> bool {
        self.code.ends_with("/A")
    }

    /// The code with any `/A` amendment suffix stripped.
    pub fn base(&self) -> &'static str {
        self.code.strip_suffix("/A").unwrap_or(self.code)
    }
}

impl fmt::Display for FormCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl AsRef<str> for FormCode {
    fn as_ref(&self) -> &str {
        self.code
    }
}

impl PartialEq<str> for FormCode {
    fn eq(&self, other: &str) -> bool {
        self.code == other
    }
}

impl PartialEq<&str> for FormCode {
    fn eq(&self, other: &&str) -> bool {
        self.code == *other
    }
}

impl Serialize for FormCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code)
    }
}
