//! Pipeline orchestration: file read → catalog parse → top-N → output.
//!
//! The only module touching external I/O. Errors split into two tiers:
//! record-level noise is absorbed inside [`crate::catalog`], while an
//! unreadable file or an invalid document is fatal and surfaces as
//! [`EolRankError`] with no output produced.

mod output;

pub use output::OutputTarget;

use crate::catalog::{parse_catalog, EndDateFields};
use crate::error::EolRankError;
use crate::model::SupportEntry;
use crate::ranking::select_top;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Parameters for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the JSON catalog file
    pub path: PathBuf,
    /// How many entries to print; ≤ 0 and over-large values are both valid
    pub count: i64,
    /// End-of-support field resolution policy
    pub end_date_fields: EndDateFields,
}

impl RunConfig {
    /// Config with the default (relaxed) end-date policy.
    pub fn new(path: impl Into<PathBuf>, count: i64) -> Self {
        Self {
            path: path.into(),
            count,
            end_date_fields: EndDateFields::default(),
        }
    }
}

/// Counters from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Valid entries found in the catalog
    pub total_entries: usize,
    /// Entries actually printed after top-N selection
    pub printed: usize,
}

/// Execute the full pipeline, writing one `{name} {cycle} {days}` line per
/// selected entry to `out` and flushing before returning.
///
/// Nothing is written until parsing and selection have succeeded, so a fatal
/// error never leaves partial output behind.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<RunSummary, EolRankError> {
    let (summary, selected) = select_entries(config)?;

    for entry in &selected {
        writeln!(out, "{}", entry.to_line()).map_err(|source| EolRankError::Output { source })?;
    }
    out.flush().map_err(|source| EolRankError::Output { source })?;

    Ok(summary)
}

/// Run the pipeline against an [`OutputTarget`].
///
/// The file variant is only created after parsing and selection succeed, so
/// a fatal input error never leaves a truncated result file behind.
pub fn run_to_target(config: &RunConfig, target: &OutputTarget) -> Result<RunSummary, EolRankError> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            run(config, &mut stdout)
        }
        OutputTarget::File(path) => {
            let (summary, selected) = select_entries(config)?;

            let file = std::fs::File::create(path).map_err(|source| EolRankError::Io {
                path: path.clone(),
                source,
            })?;
            let mut writer = std::io::BufWriter::new(file);
            for entry in &selected {
                writeln!(writer, "{}", entry.to_line())
                    .map_err(|source| EolRankError::Output { source })?;
            }
            writer
                .flush()
                .map_err(|source| EolRankError::Output { source })?;

            tracing::info!("Result written to {:?}", path);
            Ok(summary)
        }
    }
}

/// Parse the catalog and select the top entries, without producing output.
fn select_entries(config: &RunConfig) -> Result<(RunSummary, Vec<SupportEntry>), EolRankError> {
    let products = load_catalog(&config.path)?;
    let entries = parse_catalog(&products, &config.end_date_fields);
    tracing::info!("Parsed {} valid OS entries from catalog", entries.len());

    let selected = select_top(&entries, config.count);
    tracing::debug!("Selected top {} of {}", selected.len(), entries.len());

    Ok((
        RunSummary {
            total_entries: entries.len(),
            printed: selected.len(),
        },
        selected,
    ))
}

/// Read and parse the catalog file, requiring a top-level product list.
fn load_catalog(path: &Path) -> Result<Vec<Value>, EolRankError> {
    let raw = std::fs::read_to_string(path).map_err(|source| EolRankError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value =
        serde_json::from_str(&raw).map_err(|source| EolRankError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

    match document {
        Value::Array(products) => Ok(products),
        _ => Err(EolRankError::NotACatalog {
            path: path.to_path_buf(),
        }),
    }
}

/// Exit codes for the `eolrank` binary.
pub mod exit_codes {
    /// Run completed and all selected lines were printed
    pub const SUCCESS: i32 = 0;
    /// Unrecoverable input error (unreadable file, invalid document)
    pub const ERROR: i32 = 1;
}
