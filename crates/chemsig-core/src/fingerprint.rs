//! Molecular fingerprints — sets of discrete structural feature tokens.

use std::collections::HashSet;

/// Structural fingerprint of one drug molecule.
///
/// Tokens are opaque strings; two drugs are compared purely on token-set
/// overlap. Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fingerprint {
    tokens: HashSet<String>,
}

impl Fingerprint {
    /// Parse a whitespace-separated token string, as stored in the third
    /// column of the drug file.
    pub fn parse(raw: &str) -> Self {
        Self {
            tokens: raw.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub(crate) fn intersection_len(&self, other: &Self) -> usize {
        self.tokens.intersection(&other.tokens).count()
    }

    pub(crate) fn union_len(&self, other: &Self) -> usize {
        self.tokens.union(&other.tokens).count()
    }
}
