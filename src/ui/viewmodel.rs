//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready data only: labels are already formatted, titles already
//! truncated, and every control already knows whether it is enabled. Tests
//! assert on these values instead of on ANSI output.

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    pub search_bar: SearchBarInfo,

    pub results: ResultsSection,

    pub nominations: NominationsSection,

    /// Completion banner, present while five movies are nominated.
    pub banner: Option<BannerInfo>,

    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// Label of the active theme, shown as the theme button.
    pub theme_label: String,
}

/// Search box display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,

    pub is_focused: bool,

    /// Whether the clear control is shown (query not empty).
    pub can_clear: bool,

    /// `Error: <message>` line shown under the box after a failed search.
    pub error: Option<String>,
}

/// Results list display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsSection {
    /// `Results` or `Results for "<query>"`.
    pub title: String,

    /// `<n> total results`, or `– total results` when the total is zero.
    pub total_label: String,

    pub is_loading: bool,

    pub is_focused: bool,

    /// Rows visible in the available height, in result order.
    pub items: Vec<DisplayItem>,
}

/// Nominations list display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominationsSection {
    /// `Nominations (<n>/5)`.
    pub title: String,

    pub is_focused: bool,

    /// Whether the remove-all control is enabled.
    pub can_remove_all: bool,

    pub items: Vec<DisplayItem>,
}

/// Display information for a single movie row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to the available width.
    pub title: String,

    pub year: String,

    /// IMDb link, suffixed when the movie has no poster.
    pub detail: String,

    pub is_selected: bool,

    pub control: ItemControl,

    /// Character ranges of the title matching the query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// The per-row button: `Nominate` in results, `Remove` in nominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemControl {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerInfo {
    pub message: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help for the focused section.
    pub keybindings: String,
}
