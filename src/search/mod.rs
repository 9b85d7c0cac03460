//! Search functionality
//!
//! This module provides search capabilities:
//! - Line matching (literal substring or regex, per case sensitivity)
//! - Page-by-page PDF search in document order

mod matcher;
mod pdf_search;

pub use matcher::{has_regex_metacharacters, LineMatcher};
pub use pdf_search::{iter_matches, search_pdf};

use crate::models::Match;

/// Find matching lines in one page of extracted text
///
/// Lines are tested as extracted and stored trimmed at both ends.
pub fn match_page(page: u32, text: &str, matcher: &LineMatcher) -> Vec<Match> {
    text.split('\n')
        .filter(|line| matcher.is_match(line))
        .map(|line| Match::new(page, line.trim()))
        .collect()
}
