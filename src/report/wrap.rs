use super::metrics::text_width;

/// Greedy word wrap against a fixed width.
///
/// Words are accumulated while the line still fits; the word that overflows
/// starts the next line. A word that is wider than `max_width` on its own is
/// broken at character boundaries. Runs of whitespace, including spaces
/// inside the text, collapse to one space.
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if text_width(&candidate, font_size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if text_width(word, font_size) <= max_width {
            current = word.to_string();
        } else {
            let mut pieces = split_long_word(word, font_size, max_width);
            // The tail may still share a line with the next word
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Break a single word into chunks no wider than `max_width`.
/// Every chunk holds at least one character.
fn split_long_word(word: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();

    for c in word.chars() {
        piece.push(c);
        if text_width(&piece, font_size) > max_width && piece.chars().count() > 1 {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(c);
        }
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }

    pieces
}
