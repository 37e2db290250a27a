//! Fatal error types for eolrank.
//!
//! Only pipeline-level failures live here. Record-level problems (malformed
//! products, unparseable dates, inverted date ranges) are handled by
//! skip-and-continue inside the catalog parser and never surface as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Unrecoverable errors for a pipeline run.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EolRankError {
    /// The catalog file could not be read
    #[error("Failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a valid JSON document
    #[error("Invalid JSON in catalog file {path:?}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed, but its top level is not a product list
    #[error("Catalog file {path:?} does not contain a top-level product list")]
    NotACatalog { path: PathBuf },

    /// Writing the result lines to the output target failed
    #[error("Failed to write output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}
