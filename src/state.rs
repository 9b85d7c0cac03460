//! Search session state
//!
//! Holds the outcome of the most recent search so a front end can offer
//! report export afterwards. The session is a plain value owned by its
//! caller and is not meant to be shared across threads.

use std::path::{Path, PathBuf};

use crate::error::{FinderError, Result};
use crate::models::{SearchOutcome, SearchRequest};
use crate::report::{Report, ReportLayout};
use crate::search::search_pdf;

/// Where the session sits between searching and exporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No search has completed yet
    Idle,
    /// The last search found at least one match
    ResultsReady,
    /// The last search completed without matches
    NoResults,
}

/// Front-end state: the last search's results and the report layout
#[derive(Debug, Default)]
pub struct SearchSession {
    last: Option<SearchOutcome>,
    layout: ReportLayout,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: ReportLayout) -> Self {
        Self { last: None, layout }
    }

    pub fn state(&self) -> SessionState {
        match &self.last {
            None => SessionState::Idle,
            Some(outcome) if outcome.is_empty() => SessionState::NoResults,
            Some(_) => SessionState::ResultsReady,
        }
    }

    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last.as_ref()
    }

    /// Export is only offered once a search has produced matches
    pub fn can_export(&self) -> bool {
        self.state() == SessionState::ResultsReady
    }

    /// Run a search and hold its outcome, replacing the previous one
    ///
    /// A failed search leaves the previous outcome in place.
    pub fn search(&mut self, request: &SearchRequest) -> Result<&SearchOutcome> {
        let outcome = search_pdf(request)?;
        Ok(&*self.last.insert(outcome))
    }

    /// Write the held results as a PDF report
    ///
    /// Export never modifies the held outcome, whether it succeeds or not.
    pub fn export(&self, path: &Path) -> Result<PathBuf> {
        let outcome = match &self.last {
            Some(outcome) if !outcome.is_empty() => outcome,
            _ => return Err(FinderError::NoResults),
        };

        Report::new(&outcome.search_term, &outcome.matches).write_to(path, &self.layout)
    }
}
