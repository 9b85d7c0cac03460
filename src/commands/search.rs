use std::path::Path;

use crate::error::{FinderError, Result};
use crate::extractors::has_supported_extension;
use crate::models::{Match, SearchRequest, SearchSummary, TermSyntax};
use crate::search::has_regex_metacharacters;
use crate::state::SearchSession;

/// Warning shown when the file or term is missing
pub const INPUT_ERROR_MESSAGE: &str = "Provide a PDF file and a search term.";

/// Build the human readable result listing
pub fn format_results(term: &str, matches: &[Match]) -> String {
    if matches.is_empty() {
        return format!("No results found for the term: \"{}\".", term);
    }

    let mut text = format!(
        "Search Results for: '{}'\nTotal Results: {}\n\n",
        term,
        matches.len()
    );
    for m in matches {
        text.push_str(&format!("Found on page {}:\n{}\n", m.page, m.line));
    }
    text
}

/// Validate input, run the search and summarise it
///
/// A missing path or term is rejected before any file is opened, as is an
/// invalid pattern; both report `is_input_error()`. The session keeps the
/// outcome for a later export.
pub fn perform_search(
    session: &mut SearchSession,
    pdf_path: &str,
    search_term: &str,
    case_sensitive: bool,
    syntax: TermSyntax,
) -> Result<SearchSummary> {
    if pdf_path.trim().is_empty() || search_term.is_empty() {
        return Err(FinderError::InvalidInput(INPUT_ERROR_MESSAGE.to_string()));
    }

    if !has_supported_extension(Path::new(pdf_path)) {
        log::warn!("⚠️ {} does not have a .pdf extension, trying anyway", pdf_path);
    }

    if syntax == TermSyntax::Auto && !case_sensitive && has_regex_metacharacters(search_term) {
        log::warn!(
            "⚠️ '{}' contains regex characters; case-insensitive search treats the term as a regular expression",
            search_term
        );
    }

    let request = SearchRequest::new(pdf_path, search_term, case_sensitive).with_syntax(syntax);
    let outcome = session.search(&request)?;

    Ok(SearchSummary {
        file: pdf_path.to_string(),
        term: outcome.search_term.clone(),
        total: outcome.len(),
        matches: outcome.matches.clone(),
        listing: format_results(&outcome.search_term, &outcome.matches),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SessionState;
    use crate::test_support::write_fixture_pdf;

    #[test]
    fn test_format_results() {
        let matches = vec![Match::new(1, "alpha"), Match::new(4, "beta alpha")];
        assert_eq!(
            format_results("alpha", &matches),
            "Search Results for: 'alpha'\nTotal Results: 2\n\nFound on page 1:\nalpha\nFound on page 4:\nbeta alpha\n"
        );
    }

    #[test]
    fn test_format_no_results() {
        assert_eq!(
            format_results("zebra", &[]),
            "No results found for the term: \"zebra\"."
        );
    }

    #[test]
    fn test_missing_input_rejected_before_io() {
        let mut session = SearchSession::new();

        let err = perform_search(&mut session, "", "term", false, TermSyntax::Auto).unwrap_err();
        assert!(err.is_input_error());
        assert_eq!(err.to_string(), INPUT_ERROR_MESSAGE);

        let err = perform_search(&mut session, "/nonexistent/file.pdf", "", false, TermSyntax::Auto)
            .unwrap_err();
        assert!(matches!(err, FinderError::InvalidInput(_)));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_invalid_pattern_is_input_error() {
        let mut session = SearchSession::new();
        let err = perform_search(&mut session, "/nonexistent/file.pdf", "f(x", false, TermSyntax::Auto)
            .unwrap_err();
        assert!(err.is_input_error());
        assert!(!err.is_file_error());
    }

    #[test]
    fn test_unreadable_file_is_reported() {
        let mut session = SearchSession::new();
        let err = perform_search(&mut session, "/nonexistent/file.pdf", "x", true, TermSyntax::Auto)
            .unwrap_err();
        assert!(err.is_file_error());
        assert!(!err.is_input_error());
        assert!(err.to_string().contains("file.pdf"));
    }

    #[test]
    fn test_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture_pdf(dir.path(), "doc.pdf", &[&["Budget 2024"], &["budget notes"]]);
        let mut session = SearchSession::new();

        let summary = perform_search(
            &mut session,
            path.to_str().unwrap(),
            "budget",
            false,
            TermSyntax::Auto,
        )
        .unwrap();

        assert_eq!(summary.total, 2);
        assert!(summary.listing.starts_with("Search Results for: 'budget'\nTotal Results: 2"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["matches"][1]["page"], 2);
        assert_eq!(json["matches"][1]["line"], "budget notes");
    }
}
