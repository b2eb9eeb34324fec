//! Completion banner renderer.

use crate::ui::helpers::{char_len, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BannerInfo;

/// Renders the banner centered on its row, or blanks the row when absent.
pub fn render_banner(row: usize, banner: Option<&BannerInfo>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let Some(banner) = banner else {
        pad(cols);
        return row + 1;
    };

    let text_len = char_len(&banner.message).min(cols);
    let padding = cols.saturating_sub(text_len) / 2;

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.banner_fg));
    print!("{}", Theme::bg(&theme.colors.banner_bg));
    pad(padding);
    print!("{}", banner.message);
    pad(cols.saturating_sub(padding + text_len));
    print!("{}", Theme::reset());
    row + 1
}
