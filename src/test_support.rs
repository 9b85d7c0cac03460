//! Fixture PDFs for unit tests, drawn with the report canvas

use std::fs;
use std::path::{Path, PathBuf};

use crate::report::{Font, PdfCanvas};

/// Write a PDF with one entry per page, each line drawn as its own text
/// object. An empty slice gives a page with no text at all.
pub fn write_fixture_pdf(dir: &Path, name: &str, pages: &[&[&str]]) -> PathBuf {
    let mut canvas = PdfCanvas::new(612.0, 792.0);
    for lines in pages {
        let mut y = 720.0;
        for line in lines.iter() {
            canvas.draw_text(72.0, y, Font::Helvetica, 12.0, line);
            y -= 14.0;
        }
        canvas.show_page();
    }

    let bytes = canvas.finish_to_bytes(&[]).expect("fixture pdf");
    let path = dir.join(name);
    fs::write(&path, bytes).expect("write fixture pdf");
    path
}
