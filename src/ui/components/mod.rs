//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title and theme button
//! - [`search`]: Search box, clear control, and error line
//! - [`results`]: Results title line and movie rows
//! - [`nominations`]: Nominations title and rows
//! - [`banner`]: Completion banner
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Error line]
//! [Results title]
//! [Result rows, filling the remaining height]
//! [Border]
//! [Nominations title]
//! [Nomination rows - 5 lines]
//! [Banner]
//! [Border]
//! [Footer]
//! ```
//!
//! The top block is laid out downward from row 2 and the bottom block upward
//! from the last row, so the result list takes whatever is left.

mod banner;
mod footer;
mod header;
mod nominations;
mod results;
mod search;

use crate::domain::MAX_NOMINATIONS;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Clears `count` rows starting at `row`.
fn clear_rows(row: usize, count: usize, cols: usize) {
    for offset in 0..count {
        position_cursor(row + offset, 1);
        print!("{}", " ".repeat(cols));
    }
}

/// Renders the full plugin layout for a `rows` x `cols` pane.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = header::render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = search::render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = search::render_error_line(current_row, vm.search_bar.error.as_deref(), theme, cols);
    current_row = results::render_results_title(current_row, &vm.results, theme, cols);

    let footer_row = rows;
    let bottom_border = footer_row.saturating_sub(1);
    let banner_row = bottom_border.saturating_sub(1);
    let nominations_start = banner_row.saturating_sub(MAX_NOMINATIONS);
    let nominations_title = nominations_start.saturating_sub(1);
    let middle_border = nominations_title.saturating_sub(1);

    let rows_used = results::render_result_rows(current_row, &vm.results.items, theme, cols);
    if middle_border > rows_used {
        clear_rows(rows_used, middle_border - rows_used, cols);
    }

    render_border(middle_border, &theme.colors.border, cols);
    nominations::render_nominations_title(nominations_title, &vm.nominations, theme, cols);
    let after = nominations::render_nomination_rows(nominations_start, &vm.nominations.items, theme, cols);
    if banner_row > after {
        clear_rows(after, banner_row - after, cols);
    }

    banner::render_banner(banner_row, vm.banner.as_ref(), theme, cols);
    render_border(bottom_border, &theme.colors.border, cols);
    footer::render_footer(footer_row, &vm.footer, theme, cols);
}

/// Prints one movie row shared by both lists and returns the next row.
///
/// ```text
/// > Title (Year)  https://www.imdb.com/title/tt...        [ Nominate ]
/// ```
fn render_movie_row(
    row: usize,
    item: &crate::ui::viewmodel::DisplayItem,
    theme: &Theme,
    cols: usize,
) -> usize {
    use crate::ui::helpers::{char_len, pad, render_highlighted_text};

    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("> ");
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("  ");
    }

    render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    let year = format!(" ({})", item.year);
    print!("{year}");

    let control = format!("[ {} ]", item.control.label);
    let used = 2 + char_len(&item.title) + char_len(&year);
    let remaining = cols.saturating_sub(used + char_len(&control) + 1);

    let detail: String = item.detail.chars().take(remaining.saturating_sub(2)).collect();
    if !detail.is_empty() {
        print!("  {detail}");
    }
    pad(remaining.saturating_sub(if detail.is_empty() { 0 } else { 2 + char_len(&detail) }));

    if !item.control.enabled {
        print!("{}", Theme::fg(&theme.colors.disabled_fg));
    } else if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.accent));
    }
    print!("{control} ");
    print!("{}", Theme::reset());
    row + 1
}
