//! Header component renderer.

use crate::ui::helpers::{char_len, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title on the left and the theme button on the right.
///
/// ```text
///  The Shoppies                                          [ ☾ Dark ]
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {}", header.title);
    let button = format!("[ {} ] ", header.theme_label);

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");

    pad(cols.saturating_sub(char_len(&title) + char_len(&button)));

    print!("{}", Theme::fg(&theme.colors.accent));
    print!("{button}");
    print!("{}", Theme::reset());
    row + 1
}
