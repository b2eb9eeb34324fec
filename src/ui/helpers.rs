//! Shared rendering utilities.
//!
//! Every width calculation here counts characters, not bytes, so titles such
//! as "Amélie" pad and highlight correctly.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Prints `count` spaces.
pub fn pad(count: usize) {
    print!("{}", " ".repeat(count));
}

/// Renders text with highlighted character ranges for query matches.
///
/// Highlighting is skipped on the selected row so the selection background
/// stays uniform. Ranges are clamped to the text, and overlapping or
/// out-of-order ranges are ignored rather than re-printed.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.max(current_pos).min(chars.len());
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_len_ignores_utf8_width() {
        assert_eq!(char_len("Amélie"), 6);
        assert_eq!(char_len("☾ Dark"), 6);
    }
}
