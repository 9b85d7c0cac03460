use regex::{Regex, RegexBuilder};

use crate::error::{FinderError, Result};
use crate::models::TermSyntax;

/// Decides whether a single line of text matches the search term
#[derive(Debug, Clone)]
pub enum LineMatcher {
    /// Exact, case-sensitive substring containment
    Literal(String),
    /// Regex search anywhere in the line
    Pattern(Regex),
}

impl LineMatcher {
    /// Build the matcher for a term.
    ///
    /// With `TermSyntax::Auto` a case-sensitive search is a literal substring
    /// test while a case-insensitive one treats the term as a regular
    /// expression, so `.` or `(` only behave specially in the insensitive
    /// path. `Literal` and `Regex` pin one interpretation for both modes.
    pub fn new(term: &str, case_sensitive: bool, syntax: TermSyntax) -> Result<Self> {
        let as_regex = match syntax {
            TermSyntax::Auto => !case_sensitive,
            TermSyntax::Literal => false,
            TermSyntax::Regex => true,
        };

        if !as_regex && case_sensitive {
            return Ok(LineMatcher::Literal(term.to_string()));
        }

        let pattern = if as_regex {
            term.to_string()
        } else {
            regex::escape(term)
        };

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|source| FinderError::InvalidPattern {
                pattern: term.to_string(),
                source,
            })?;

        Ok(LineMatcher::Pattern(regex))
    }

    pub fn is_match(&self, line: &str) -> bool {
        match self {
            LineMatcher::Literal(term) => line.contains(term.as_str()),
            LineMatcher::Pattern(regex) => regex.is_match(line),
        }
    }
}

/// True when the term contains characters a regex would not take literally
pub fn has_regex_metacharacters(term: &str) -> bool {
    regex::escape(term) != term
}
