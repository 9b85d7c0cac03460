//! Document content extractors
//!
//! Per-page plain text extraction for PDF files.

mod pdf;

pub use pdf::PdfText;

use std::path::Path;

/// Supported file extensions
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf"];

/// Check if extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

/// Check if a path looks like a PDF by its extension
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(is_supported_extension)
        .unwrap_or(false)
}
