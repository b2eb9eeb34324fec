//! Search bar component renderer.

use crate::ui::helpers::{char_len, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

const SEARCH_PROMPT: &str = " Search: ";

/// Renders the 3-line search box and returns the row after it.
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ Search: batm█      x │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
///
/// The frame uses the accent color while focused. The trailing `x` is the
/// clear control, shown only when there is something to clear.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let frame = if search.is_focused {
        &theme.colors.accent
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{}", Theme::fg(frame));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if search.is_focused { "█" } else { "" };
    let clear = if search.can_clear { "x " } else { "" };
    let search_text = fit_search_text(&search.query, cursor, inner_width.saturating_sub(char_len(clear)));
    let padding = inner_width.saturating_sub(char_len(&search_text) + char_len(clear));

    position_cursor(row + 1, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{}", Theme::fg(frame));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    pad(padding);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{clear}");
    print!("{}", Theme::fg(frame));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{}", Theme::fg(frame));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Renders the error message under the box, or a blank line.
pub fn render_error_line(row: usize, error: Option<&str>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match error {
        Some(message) => {
            let text = format!("{}{message}", " ".repeat(SEARCH_BOX_MARGIN + 1));
            print!("{}", Theme::fg(&theme.colors.error_fg));
            print!("{text}");
            pad(cols.saturating_sub(char_len(&text)));
            print!("{}", Theme::reset());
        }
        None => pad(cols),
    }
    row + 1
}

/// Prompt, query and cursor clipped to `width` characters.
///
/// A query that overflows loses its beginning, so the characters being typed
/// stay next to the cursor.
fn fit_search_text(query: &str, cursor: &str, width: usize) -> String {
    let budget = width.saturating_sub(char_len(SEARCH_PROMPT) + char_len(cursor));
    let skip = char_len(query).saturating_sub(budget);
    let visible: String = query.chars().skip(skip).collect();
    format!("{SEARCH_PROMPT}{visible}{cursor}")
        .chars()
        .take(width)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_query_is_untouched() {
        assert_eq!(fit_search_text("batman", "█", 40), " Search: batman█");
    }

    #[test]
    fn long_query_keeps_its_end() {
        let text = fit_search_text("the lord of the rings", "█", 14);
        assert_eq!(text, " Search: ings█");
        assert_eq!(char_len(&text), 14);
    }

    #[test]
    fn narrow_box_never_overflows() {
        assert_eq!(char_len(&fit_search_text("amélie", "█", 4)), 4);
        assert_eq!(fit_search_text("amélie", "", 0), "");
    }
}
