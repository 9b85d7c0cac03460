use serde::{Deserialize, Serialize};

/// Paper size presets for the report
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
}

impl PaperSize {
    /// Page width and height in points
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::A4 => (595.28, 841.89),
        }
    }
}

/// Geometry and type sizes used when laying out a report, all in points
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReportLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub left_margin: f32,
    /// Width available to a wrapped line
    pub content_width: f32,
    /// Baseline of the first line on every page
    pub top_offset: f32,
    /// A new page starts once the cursor falls below this
    pub bottom_margin: f32,
    pub font_size: f32,
    pub title_font_size: f32,
    pub line_height: f32,
}

impl ReportLayout {
    pub fn for_paper(paper: PaperSize) -> Self {
        let (page_width, page_height) = paper.dimensions();
        let margin = 72.0;
        Self {
            page_width,
            page_height,
            left_margin: margin,
            content_width: page_width - 2.0 * margin,
            top_offset: page_height - 42.0,
            bottom_margin: margin,
            font_size: 12.0,
            title_font_size: 16.0,
            line_height: 14.0,
        }
    }

    /// Number of body lines that fit between the top offset and the bottom margin
    pub fn lines_per_page(&self) -> usize {
        ((self.top_offset - self.bottom_margin) / self.line_height).floor() as usize + 1
    }
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self::for_paper(PaperSize::Letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_defaults() {
        let layout = ReportLayout::default();
        assert_eq!(layout.page_width, 612.0);
        assert_eq!(layout.content_width, 468.0);
        assert_eq!(layout.top_offset, 750.0);
        assert_eq!(layout.bottom_margin, 72.0);
        assert_eq!(layout.lines_per_page(), 49);
    }

    #[test]
    fn test_a4_is_taller_and_narrower() {
        let a4 = ReportLayout::for_paper(PaperSize::A4);
        let letter = ReportLayout::default();
        assert!(a4.page_height > letter.page_height);
        assert!(a4.content_width < letter.content_width);
    }
}
