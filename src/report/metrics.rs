use std::borrow::Cow;

use encoding_rs::WINDOWS_1252;

/// Helvetica advance widths (1/1000 em) for printable ASCII, 0x20..=0x7E
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Width used for bytes outside printable ASCII
const DEFAULT_WIDTH: u16 = 556;

/// Encode text as WinAnsi bytes for a Type1 font string
///
/// Characters outside Windows-1252 come back as numeric character
/// references, so nothing is silently dropped.
pub fn encode_win_ansi(text: &str) -> Cow<'_, [u8]> {
    let (bytes, _, _) = WINDOWS_1252.encode(text);
    bytes
}

fn byte_width(b: u8) -> u16 {
    match b {
        0x20..=0x7E => HELVETICA_WIDTHS[(b - 0x20) as usize],
        _ => DEFAULT_WIDTH,
    }
}

/// Rendered width of `text` in points, set in Helvetica at `font_size`
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = encode_win_ansi(text)
        .iter()
        .map(|&b| byte_width(b) as u32)
        .sum();
    units as f32 * font_size / 1000.0
}
