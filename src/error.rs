//! Error types for searching PDFs and writing reports.

use std::path::PathBuf;

/// Result type alias for pdf-finder operations.
pub type Result<T> = std::result::Result<T, FinderError>;

/// Everything that can go wrong between picking a file and saving a report.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// Missing file path or search term
    #[error("{0}")]
    InvalidInput(String),

    /// The PDF could not be read from disk
    #[error("Failed to read {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes on disk are not a PDF we can parse
    #[error("Failed to parse {path:?} as a PDF: {source}")]
    PdfParse {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// The search term is not a valid regular expression
    #[error("Invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Export was requested without any matches to report
    #[error("There are no search results to export")]
    NoResults,

    /// The report document could not be serialized
    #[error("Failed to build report: {0}")]
    ReportEncode(#[from] lopdf::Error),

    /// The report could not be written to its destination
    #[error("Failed to write report to {path:?}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FinderError {
    /// True for the errors caused by the input file itself (unreadable or corrupt)
    pub fn is_file_error(&self) -> bool {
        matches!(self, FinderError::FileRead { .. } | FinderError::PdfParse { .. })
    }

    /// True when the request was rejected before any I/O happened
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            FinderError::InvalidInput(_) | FinderError::InvalidPattern { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_family() {
        let err = FinderError::FileRead {
            path: PathBuf::from("/missing.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_file_error());
        assert!(!err.is_input_error());
        assert!(err.to_string().contains("missing.pdf"));
    }

    #[test]
    fn test_no_results_is_not_file_error() {
        assert!(!FinderError::NoResults.is_file_error());
        assert!(FinderError::InvalidInput("x".to_string()).is_input_error());
    }
}
