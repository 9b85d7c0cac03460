//! PDF report generation
//!
//! Lays out a title block and every match as wrapped Helvetica text,
//! breaking to a new page whenever the cursor passes the bottom margin.

mod canvas;
mod layout;
mod metrics;
mod wrap;

pub use canvas::{Font, PdfCanvas};
pub use layout::{PaperSize, ReportLayout};
pub use metrics::text_width;
pub use wrap::wrap_text;

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FinderError, Result};
use crate::models::Match;

pub const REPORT_TITLE: &str = "PDF Keyword Finder Report";

/// Match listing plus header, ready to be laid out once
///
/// Text is set in the standard Helvetica fonts with WinAnsi encoding.
/// Characters outside Windows-1252 (arrows, CJK) are written as numeric
/// character references such as `&#8594;`.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    term: &'a str,
    matches: &'a [Match],
    generated_at: DateTime<Local>,
}

/// A laid-out report
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Body text for one match
pub fn match_text(m: &Match) -> String {
    format!("Found on page {}: {}", m.page, m.line)
}

impl<'a> Report<'a> {
    /// Report stamped with the current local time
    pub fn new(term: &'a str, matches: &'a [Match]) -> Self {
        Self::with_timestamp(term, matches, Local::now())
    }

    pub fn with_timestamp(term: &'a str, matches: &'a [Match], generated_at: DateTime<Local>) -> Self {
        Self {
            term,
            matches,
            generated_at,
        }
    }

    /// Lay the report out into PDF bytes
    ///
    /// Fails with `NoResults` for an empty match list.
    pub fn render(&self, layout: &ReportLayout) -> Result<RenderedReport> {
        if self.matches.is_empty() {
            return Err(FinderError::NoResults);
        }

        let mut canvas = PdfCanvas::new(layout.page_width, layout.page_height);
        let x = layout.left_margin;
        let mut y = layout.top_offset;

        // Header block
        canvas.draw_text(x, y, Font::HelveticaBold, layout.title_font_size, REPORT_TITLE);
        y -= layout.title_font_size + layout.line_height - layout.font_size;
        let header = [
            format!("Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S")),
            format!("Search term: {}", self.term),
            format!("Total results: {}", self.matches.len()),
        ];
        for line in wrap_header(&header, layout) {
            if y < layout.bottom_margin {
                canvas.show_page();
                y = layout.top_offset;
            }
            canvas.draw_text(x, y, Font::Helvetica, layout.font_size, &line);
            y -= layout.line_height;
        }
        y -= layout.line_height;

        // Body
        for m in self.matches {
            for line in wrap_text(&match_text(m), layout.font_size, layout.content_width) {
                if y < layout.bottom_margin {
                    canvas.show_page();
                    y = layout.top_offset;
                }
                canvas.draw_text(x, y, Font::Helvetica, layout.font_size, &line);
                y -= layout.line_height;
            }
            y -= layout.line_height;
        }

        let page_count = canvas.page_count();
        let created = self.generated_at.format("D:%Y%m%d%H%M%S").to_string();
        let bytes = canvas.finish_to_bytes(&[
            ("Title", REPORT_TITLE),
            ("Subject", self.term),
            ("Producer", concat!("pdf-finder ", env!("CARGO_PKG_VERSION"))),
            ("CreationDate", created.as_str()),
        ])?;

        Ok(RenderedReport { bytes, page_count })
    }

    /// Render and save to `path`, replacing any existing file
    pub fn write_to(&self, path: &Path, layout: &ReportLayout) -> Result<PathBuf> {
        let rendered = self.render(layout)?;
        fs::write(path, &rendered.bytes).map_err(|source| FinderError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!(
            "📝 Wrote report with {} matches ({} pages) to {:?}",
            self.matches.len(),
            rendered.page_count,
            path
        );
        Ok(path.to_path_buf())
    }
}

fn wrap_header(lines: &[String], layout: &ReportLayout) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| wrap_text(line, layout.font_size, layout.content_width))
        .collect()
}
