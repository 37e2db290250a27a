//! **Rank operating-system releases by how long they are supported.**
//!
//! `eolrank` ingests a JSON catalog of software products in the
//! `endoflife.date` export shape, keeps the products flagged as operating
//! systems, computes each release cycle's support period as an inclusive day
//! count between its release date and its end-of-life date, and returns the N
//! entries with the longest support periods.
//!
//! The whole system is a parse → validate → compute → rank pipeline over a
//! single input file. Malformed products, versions, and dates are expected
//! noise in real-world catalogs and are silently skipped; only an unreadable
//! file or an invalid document aborts a run.
//!
//! ## Modules
//!
//! - [`dates`]: strict `YYYY-MM-DD` parsing and inclusive day-span arithmetic.
//! - [`catalog`]: walks the untrusted JSON tree and produces validated
//!   [`SupportEntry`] records, honoring a configurable [`EndDateFields`]
//!   policy for resolving the end-of-support date.
//! - [`ranking`]: stable top-N selection by descending support period.
//! - [`pipeline`]: file read, document parse, and line output - the only
//!   module touching external I/O.
//!
//! ## Example
//!
//! ```no_run
//! use eolrank::pipeline::{run, RunConfig};
//!
//! fn main() -> Result<(), eolrank::EolRankError> {
//!     let config = RunConfig::new("catalog.json", 10);
//!     let mut out = std::io::stdout().lock();
//!     let summary = run(&config, &mut out)?;
//!     eprintln!("printed {} of {} entries", summary.printed, summary.total_entries);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod dates;
mod error;
pub mod model;
pub mod pipeline;
pub mod ranking;

pub use catalog::{parse_catalog, parse_entry, support_days, EndDateFields};
pub use error::EolRankError;
pub use model::SupportEntry;
pub use ranking::select_top;
