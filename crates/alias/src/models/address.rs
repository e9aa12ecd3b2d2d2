use std::fmt;

/// Domain every generated alias ends with. Fixed, not configurable in this
/// version.
pub const ALIAS_DOMAIN: &str = "crosseven.com";

/// A name that has passed validation: trimmed, at least two characters, and
/// nothing outside letters, digits, dots, hyphens and underscores once
/// internal whitespace is ignored. Still carries the original casing and
/// spacing; normalization happens at generation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidName(String);

impl ValidName {
    pub(crate) fn new(trimmed: String) -> Self {
        Self(trimmed)
    }
}

impl AsRef<str> for ValidName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A generated alias address. Immutable once produced; `Display` renders the
/// full form `{local_part}+{suffix}@crosseven.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasAddress {
    pub local_part: String,
    pub suffix: u32,
}

impl fmt::Display for AliasAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}@{}", self.local_part, self.suffix, ALIAS_DOMAIN)
    }
}
