//! Results list component renderer.

use super::render_movie_row;
use crate::ui::helpers::{char_len, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ResultsSection};

const LOADING: &str = "Loading...";

/// Renders `Results for "<q>"` with the total on the right, plus the
/// loading indicator while a request is outstanding.
pub fn render_results_title(row: usize, section: &ResultsSection, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {}", section.title);
    let loading = if section.is_loading {
        format!("  {LOADING}")
    } else {
        String::new()
    };
    let total = format!("{} ", section.total_label);

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
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{loading}");
    pad(cols.saturating_sub(char_len(&title) + char_len(&loading) + char_len(&total)));
    print!("{total}");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every visible result and returns the next free row.
pub fn render_result_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_movie_row(current_row, item, theme, cols);
    }
    current_row
}
