//! Nominations list component renderer.

use super::render_movie_row;
use crate::ui::helpers::{char_len, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, NominationsSection};

/// Renders `Nominations (n/5)` with the remove-all control on the right.
pub fn render_nominations_title(row: usize, section: &NominationsSection, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {}", section.title);
    let control = "[ Remove all ] ";

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!(
        "{}",
        Theme::fg(if section.is_focused {
            &theme.colors.accent
        } else {
            &theme.colors.header_fg
        })
    );
    print!("{title}");
    print!("{}", Theme::reset());
    pad(cols.saturating_sub(char_len(&title) + char_len(control)));
    print!(
        "{}",
        Theme::fg(if section.can_remove_all {
            &theme.colors.accent
        } else {
            &theme.colors.disabled_fg
        })
    );
    print!("{control}");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders nominations in insertion order and returns the next free row.
pub fn render_nomination_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_movie_row(current_row, item, theme, cols);
    }
    current_row
}
