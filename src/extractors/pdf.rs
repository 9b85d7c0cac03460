use std::fs;
use std::path::{Path, PathBuf};

use lopdf::Document;

use crate::error::{FinderError, Result};

/// A parsed PDF whose pages can be turned into plain text one at a time
///
/// The whole file is read into memory on open, so no file handle outlives
/// the call. Text is only extracted when a page is visited.
/// Scanned documents (image-only pages) yield no text - no OCR is performed.
pub struct PdfText {
    path: PathBuf,
    document: Document,
}

impl PdfText {
    /// Read and parse a PDF file
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| FinderError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Document::load_mem(&bytes).map_err(|source| FinderError::PdfParse {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("📄 Opened {:?} ({} pages)", path, document.get_pages().len());

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Extract the text of a single 1-indexed page
    ///
    /// Returns None when the page has no extractable text. A page whose
    /// content stream cannot be decoded is treated the same way.
    pub fn page_text(&self, page: u32) -> Option<String> {
        match self.document.extract_text(&[page]) {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => {
                log::debug!("Page {} of {:?} has no text, skipping", page, self.path);
                None
            }
            Err(e) => {
                log::warn!("⚠️ Text extraction failed on page {} of {:?}: {}", page, self.path, e);
                None
            }
        }
    }

    /// Lazily walk pages in physical order, yielding `(page_number, text)`
    /// for every page that has text
    pub fn pages(&self) -> impl Iterator<Item = (u32, String)> + '_ {
        self.document
            .get_pages()
            .into_keys()
            .filter_map(move |page| self.page_text(page).map(|text| (page, text)))
    }
}
