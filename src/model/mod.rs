//! Data model for ranked catalog entries.

mod entry;

pub use entry::*;
