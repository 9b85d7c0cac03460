use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A line of extracted text that satisfied the search term
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Match {
    /// 1-indexed page number in physical document order
    pub page: u32,
    /// The matching line, trimmed at both ends
    pub line: String,
}

impl Match {
    pub fn new(page: u32, line: impl Into<String>) -> Self {
        Self {
            page,
            line: line.into(),
        }
    }
}

/// How the search term is interpreted
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TermSyntax {
    /// Literal substring when case-sensitive, regular expression otherwise
    #[default]
    Auto,
    /// Literal substring in both modes
    Literal,
    /// Regular expression in both modes
    Regex,
}

/// One search invocation
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchRequest {
    pub file_path: PathBuf,
    pub search_term: String,
    pub case_sensitive: bool,
    #[serde(default)]
    pub syntax: TermSyntax,
}

impl SearchRequest {
    pub fn new(file_path: impl Into<PathBuf>, search_term: impl Into<String>, case_sensitive: bool) -> Self {
        Self {
            file_path: file_path.into(),
            search_term: search_term.into(),
            case_sensitive,
            syntax: TermSyntax::Auto,
        }
    }

    pub fn with_syntax(mut self, syntax: TermSyntax) -> Self {
        self.syntax = syntax;
        self
    }
}

/// Result of a completed search, handed on to report export
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchOutcome {
    pub file_path: PathBuf,
    pub search_term: String,
    pub matches: Vec<Match>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

/// Search summary payload for front ends
#[derive(Debug, Serialize, Clone)]
pub struct SearchSummary {
    pub file: String,
    pub term: String,
    pub total: usize,
    pub matches: Vec<Match>,
    /// Human readable listing, as shown in the results pane
    pub listing: String,
}
