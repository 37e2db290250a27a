//! The validated entry record produced by catalog parsing.

use serde::Serialize;

/// One OS release cycle with its computed support period.
///
/// A `SupportEntry` only ever exists with a non-empty `name`, a non-empty
/// `cycle`, and a `support_days` of at least 1 derived from two valid,
/// correctly ordered dates - the catalog parser constructs nothing else.
/// Entries are immutable values with structural equality and carry no
/// references to each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportEntry {
    /// Product name (e.g. "debian")
    pub name: String,
    /// Release line identifier (e.g. "11", "22.10")
    pub cycle: String,
    /// Inclusive day count from release date to end-of-life date
    pub support_days: i64,
}

impl SupportEntry {
    /// Create a new entry.
    #[must_use]
    pub const fn new(name: String, cycle: String, support_days: i64) -> Self {
        Self {
            name,
            cycle,
            support_days,
        }
    }

    /// Render as the tool's output line: `{name} {cycle} {support_days}`.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{} {} {}", self.name, self.cycle, self.support_days)
    }
}
