use crate::error::Result;
use crate::extractors::PdfText;
use crate::models::{Match, SearchOutcome, SearchRequest};

use super::{match_page, LineMatcher};

/// Lazily yield matches page by page, in document order
pub fn iter_matches<'a>(
    pdf: &'a PdfText,
    matcher: &'a LineMatcher,
) -> impl Iterator<Item = Match> + 'a {
    pdf.pages()
        .flat_map(move |(page, text)| match_page(page, &text, matcher))
}

/// Match every page once, also counting the pages that had text
fn scan_pages<I>(pages: I, matcher: &LineMatcher) -> (Vec<Match>, usize)
where
    I: IntoIterator<Item = (u32, String)>,
{
    let mut text_pages = 0;
    let matches = pages
        .into_iter()
        .inspect(|_| text_pages += 1)
        .flat_map(|(page, text)| match_page(page, &text, matcher))
        .collect();
    (matches, text_pages)
}

/// Search a PDF for the request's term and collect every matching line
///
/// The pattern is compiled before the file is touched, so an invalid regex
/// never costs a read. Zero matches is a normal outcome.
pub fn search_pdf(request: &SearchRequest) -> Result<SearchOutcome> {
    let matcher = LineMatcher::new(&request.search_term, request.case_sensitive, request.syntax)?;

    log::info!(
        "🔍 Searching {:?} for '{}' (case sensitive: {})",
        request.file_path,
        request.search_term,
        request.case_sensitive
    );

    let pdf = PdfText::open(&request.file_path)?;
    let (matches, text_pages) = scan_pages(pdf.pages(), &matcher);

    if text_pages == 0 {
        log::warn!(
            "⚠️ {:?} has no extractable text (scanned or image-only?)",
            pdf.path()
        );
    }

    log::info!(
        "Found {} matches across {} pages ({} with text)",
        matches.len(),
        pdf.page_count(),
        text_pages
    );

    Ok(SearchOutcome {
        file_path: request.file_path.clone(),
        search_term: request.search_term.clone(),
        matches,
    })
}
