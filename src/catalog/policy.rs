//! End-of-support field resolution policy.

use serde_json::Value;

/// Ordered list of version-record fields consulted for the end-of-support
/// date.
///
/// The catalog format has grown two legitimate readings: a strict one that
/// requires the `eol` field outright, and a relaxed one that falls back to
/// the `support` field when `eol` is absent or empty. Rather than hard-coding
/// either, the policy is an explicit, ordered field list; the first field
/// that is present, holds a string, and is non-empty wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndDateFields {
    fields: Vec<String>,
}

impl EndDateFields {
    /// Policy over an explicit field order.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Strict policy: only the `eol` field is accepted.
    #[must_use]
    pub fn eol_only() -> Self {
        Self::new(["eol"])
    }

    /// Resolve the end-date text from a version record, if any configured
    /// field is present, is a string, and is non-empty.
    #[must_use]
    pub fn resolve<'a>(&self, version: &'a Value) -> Option<&'a str> {
        self.fields
            .iter()
            .filter_map(|field| version.get(field)?.as_str())
            .find(|text| !text.is_empty())
    }
}

impl Default for EndDateFields {
    /// Relaxed policy: `eol`, falling back to `support`.
    fn default() -> Self {
        Self::new(["eol", "support"])
    }
}
