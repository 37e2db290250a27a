//! Catalog parsing: from an untrusted JSON product list to validated entries.
//!
//! The catalog is walked as raw [`serde_json::Value`] trees because nothing
//! about the input can be trusted: fields go missing, hold the wrong type, or
//! hold unparseable dates. The universal policy is skip-and-continue - a
//! malformed product or version contributes nothing and never aborts the
//! parse. Parsing is pure: the same document always yields the same entries
//! in the same order.

mod policy;

pub use policy::EndDateFields;

use crate::dates::{parse_date, span_days_inclusive};
use crate::model::SupportEntry;
use serde_json::Value;

/// Compute the support period of one version record, in days.
///
/// Requires a string `releaseDate`, an end date resolved through `policy`,
/// both parsing as strict `YYYY-MM-DD`, and release not after end. The count
/// includes both the first and the last day, so equal dates yield 1.
#[must_use]
pub fn support_days(version: &Value, policy: &EndDateFields) -> Option<i64> {
    let release_text = version.get("releaseDate")?.as_str()?;
    let end_text = policy.resolve(version)?;

    let release = parse_date(release_text)?;
    let end = parse_date(end_text)?;

    if release > end {
        // A release cannot expire before it starts.
        return None;
    }

    Some(span_days_inclusive(release, end))
}

/// Parse one version record into a [`SupportEntry`].
///
/// `name` is re-validated here even though the catalog walk already checks
/// it; each layer's contract stands on its own.
#[must_use]
pub fn parse_entry(name: &str, version: &Value, policy: &EndDateFields) -> Option<SupportEntry> {
    if name.is_empty() {
        return None;
    }

    let cycle = version.get("cycle")?.as_str()?;
    if cycle.is_empty() {
        return None;
    }

    let days = support_days(version, policy)?;

    Some(SupportEntry::new(name.to_string(), cycle.to_string(), days))
}

/// Walk the product list and collect every valid OS entry, in encounter
/// order.
///
/// A product is considered only if its `versions` field is an array, its
/// `name` is a non-empty string, and its `os` flag is boolean `true`;
/// anything else is skipped silently. Within a surviving product, each
/// version that [`parse_entry`] accepts contributes one entry.
#[must_use]
pub fn parse_catalog(products: &[Value], policy: &EndDateFields) -> Vec<SupportEntry> {
    let mut entries = Vec::new();

    for product in products {
        let Some(versions) = product.get("versions").and_then(Value::as_array) else {
            continue;
        };
        let Some(name) = product.get("name").and_then(Value::as_str) else {
            continue;
        };
        if name.is_empty() || product.get("os").and_then(Value::as_bool) != Some(true) {
            continue;
        }

        entries.extend(
            versions
                .iter()
                .filter_map(|version| parse_entry(name, version, policy)),
        );
    }

    entries
}
