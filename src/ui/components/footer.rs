//! Footer component renderer.

use crate::ui::helpers::{char_len, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders keybinding hints centered and dimmed, truncated to the pane width.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text: String = footer.keybindings.chars().take(cols).collect();
    let text_len = char_len(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    pad(padding);
    print!("{help_text}");
    pad(cols.saturating_sub(padding + text_len));
    print!("{}", Theme::reset());
    row + 1
}
