//! Search a PDF for a keyword and export the matching lines as a report.
//!
//! The library exposes the pieces a front end needs: per-page text
//! extraction, line matching, report layout and a session that holds the
//! last results between a search and an export.

pub mod cli;
pub mod commands;
pub mod error;
pub mod extractors;
pub mod models;
pub mod report;
pub mod search;
pub mod state;

#[cfg(test)]
mod test_support;

pub use error::{FinderError, Result};
pub use models::{Match, SearchOutcome, SearchRequest, SearchSummary, TermSyntax};
pub use report::{Report, ReportLayout};
pub use search::search_pdf;
pub use state::{SearchSession, SessionState};
