//! Normalized hardware identifiers

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// A serial number or service tag that passed normalization
///
/// Only the identifier normalizer can construct one, so holding a value
/// means it is whitespace-free, non-empty and free of path separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NormalizedIdentifier(String);

impl NormalizedIdentifier {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NormalizedIdentifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Join identifiers the way vendor batch endpoints expect them
pub fn join_identifiers(ids: &[NormalizedIdentifier]) -> String {
    ids.iter()
        .map(NormalizedIdentifier::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
