use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

use super::metrics::encode_win_ansi;
use crate::error::Result;

/// Base-14 fonts available on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }

    fn base_font(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }
}

const FONTS: [Font; 2] = [Font::Helvetica, Font::HelveticaBold];

/// Minimal page-by-page text canvas
///
/// Text operations accumulate for the current page until `show_page`.
/// Nothing touches lopdf until `finish`, which builds the whole document in
/// a fixed object order so the same drawing calls give the same bytes.
pub struct PdfCanvas {
    width: f32,
    height: f32,
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    page_dirty: bool,
}

impl PdfCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pages: Vec::new(),
            current: Vec::new(),
            page_dirty: false,
        }
    }

    /// Draw a single line of text with its baseline starting at (x, y)
    pub fn draw_text(&mut self, x: f32, y: f32, font: Font, size: f32, text: &str) {
        let bytes = encode_win_ansi(text).into_owned();
        self.current.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.resource_name().into(), size.into()]),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new("Tj", vec![Object::String(bytes, StringFormat::Literal)]),
            Operation::new("ET", vec![]),
        ]);
        self.page_dirty = true;
    }

    /// Close the current page and start a fresh one
    pub fn show_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.page_dirty = false;
    }

    /// Pages produced so far, counting an open page that has content
    pub fn page_count(&self) -> usize {
        self.pages.len() + usize::from(self.page_dirty)
    }

    /// Assemble the document; `info` entries land in the trailer's /Info
    pub fn finish(mut self, info: &[(&str, &str)]) -> Result<Document> {
        if self.page_dirty || self.pages.is_empty() {
            self.show_page();
        }

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut font_dict = lopdf::Dictionary::new();
        for font in FONTS {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(font.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => font_dict,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![Object::Integer(0), Object::Integer(0), self.width.into(), self.height.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if !info.is_empty() {
            let mut info_dict = lopdf::Dictionary::new();
            for (key, value) in info {
                info_dict.set(*key, Object::string_literal(encode_win_ansi(value).into_owned()));
            }
            let info_id: ObjectId = doc.add_object(info_dict);
            doc.trailer.set("Info", info_id);
        }

        doc.compress();
        Ok(doc)
    }

    /// Assemble the document and serialize it to bytes
    pub fn finish_to_bytes(self, info: &[(&str, &str)]) -> Result<Vec<u8>> {
        let mut doc = self.finish(info)?;
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).map_err(lopdf::Error::from)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_tracks_content() {
        let mut canvas = PdfCanvas::new(612.0, 792.0);
        assert_eq!(canvas.page_count(), 0);

        canvas.draw_text(72.0, 700.0, Font::Helvetica, 12.0, "one");
        assert_eq!(canvas.page_count(), 1);

        canvas.show_page();
        assert_eq!(canvas.page_count(), 1);

        canvas.draw_text(72.0, 700.0, Font::Helvetica, 12.0, "two");
        assert_eq!(canvas.page_count(), 2);
    }

    #[test]
    fn test_finish_produces_readable_pdf() {
        let mut canvas = PdfCanvas::new(612.0, 792.0);
        canvas.draw_text(72.0, 700.0, Font::HelveticaBold, 16.0, "Title (draft)");
        canvas.show_page();
        canvas.draw_text(72.0, 700.0, Font::Helvetica, 12.0, "second page");

        let bytes = canvas.finish_to_bytes(&[("Title", "test")]).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
        assert!(doc.extract_text(&[1]).unwrap().contains("Title (draft)"));
        assert!(doc.extract_text(&[2]).unwrap().contains("second page"));
    }

    #[test]
    fn test_empty_canvas_still_has_a_page() {
        let canvas = PdfCanvas::new(612.0, 792.0);
        let doc = canvas.finish(&[]).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
