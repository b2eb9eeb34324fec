//! Theme management and ANSI escape sequence generation.
//!
//! The plugin ships a fixed, ordered set of four palettes that the user cycles
//! through. Each palette is an embedded TOML file under `themes/`. The active
//! palette is a single global choice applied to every component.
//!
//! # Built-in Themes (in cycle order)
//!
//! - `light`: ☀ Light
//! - `dark`: ☾ Dark
//! - `spooky`: ☠ Spooky
//! - `fancy`: ♛ Fancy
//!
//! # TOML Format
//!
//! ```toml
//! name = "light"
//! label = "☀ Light"
//!
//! [colors]
//! header_fg = "#1f2328"
//! accent = "#0969da"
//! text_normal = "#1f2328"
//! text_dim = "#6e7781"
//! border = "#d0d7de"
//! selection_fg = "#ffffff"
//! selection_bg = "#0969da"
//! match_highlight_fg = "#1f2328"
//! match_highlight_bg = "#fff8c5"
//! disabled_fg = "#8c959f"
//! error_fg = "#cf222e"
//! banner_fg = "#ffffff"
//! banner_bg = "#1a7f37"
//! ```
//!
//! # Example
//!
//! ```rust
//! use shoppies::ui::theme::{Theme, ThemeKind};
//!
//! let theme = Theme::builtin(ThemeKind::Spooky).unwrap();
//! print!("{}spooky{}", Theme::fg(&theme.colors.accent), Theme::reset());
//! ```

use crate::domain::error::{Result, ShoppiesError};
use serde::{Deserialize, Serialize};

/// The fixed set of themes, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeKind {
    Light,
    Dark,
    Spooky,
    Fancy,
}

impl ThemeKind {
    /// All themes in cycle order; a theme's position here is its stored index.
    pub const ALL: [Self; 4] = [Self::Light, Self::Dark, Self::Spooky, Self::Fancy];

    /// Theme at a stored index, or `None` if the index is out of range.
    ///
    /// ```rust
    /// use shoppies::ui::theme::ThemeKind;
    ///
    /// assert_eq!(ThemeKind::from_index(2), Some(ThemeKind::Spooky));
    /// assert_eq!(ThemeKind::from_index(-1), None);
    /// ```
    #[must_use]
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Position in the cycle; the inverse of [`from_index`](Self::from_index).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Spooky => "spooky",
            Self::Fancy => "fancy",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Light => include_str!("../../themes/light.toml"),
            Self::Dark => include_str!("../../themes/dark.toml"),
            Self::Spooky => include_str!("../../themes/spooky.toml"),
            Self::Fancy => include_str!("../../themes/fancy.toml"),
        }
    }
}

/// Index that follows `current` in the theme cycle.
///
/// Wraps from the last theme to the first. An out-of-range current index
/// resets to the first theme.
///
/// ```rust
/// use shoppies::ui::theme::next_theme_index;
///
/// assert_eq!(next_theme_index(1), 2);
/// assert_eq!(next_theme_index(3), 0);
/// assert_eq!(next_theme_index(42), 0);
/// ```
#[must_use]
pub fn next_theme_index(current: i64) -> i64 {
    ThemeKind::from_index(current).map_or(0, |kind| {
        ((kind.index() + 1) % ThemeKind::ALL.len()) as i64
    })
}

/// Stored theme choice.
///
/// Serialized as a bare JSON integer. Whole-number floats such as `1.0` are
/// read back as the same index; anything else fails to parse, and the
/// persisted cell falls back to the first theme.
///
/// ```rust
/// use shoppies::ui::theme::ThemeIndex;
///
/// let index: ThemeIndex = serde_json::from_str("1.0").unwrap();
/// assert_eq!(index, ThemeIndex(1));
/// assert_eq!(serde_json::to_string(&index).unwrap(), "1");
/// assert!(serde_json::from_str::<ThemeIndex>("1.5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Number", into = "i64")]
pub struct ThemeIndex(pub i64);

/// Largest float magnitude that still converts to `i64` exactly.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

impl TryFrom<serde_json::Number> for ThemeIndex {
    type Error = String;

    fn try_from(number: serde_json::Number) -> std::result::Result<Self, Self::Error> {
        if let Some(index) = number.as_i64() {
            return Ok(Self(index));
        }
        match number.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT => Ok(Self(f as i64)),
            _ => Err(format!("theme index must be a whole number, got {number}")),
        }
    }
}

impl From<ThemeIndex> for i64 {
    fn from(index: ThemeIndex) -> Self {
        index.0
    }
}

/// Color scheme for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Machine name (`light`, `dark`, ...).
    pub name: String,
    /// Label shown on the theme button in the header.
    pub label: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Theme label, search box frame, focused section titles.
    pub accent: String,

    pub text_normal: String,
    /// Secondary text: years, totals, footer.
    pub text_dim: String,

    pub border: String,

    pub selection_fg: String,
    pub selection_bg: String,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Disabled controls (nominate when full or already nominated).
    pub disabled_fg: String,

    pub error_fg: String,

    pub banner_fg: String,
    pub banner_bg: String,
}

impl Theme {
    /// Parses a built-in theme.
    ///
    /// # Errors
    ///
    /// Returns [`ShoppiesError::Theme`] if the embedded TOML does not parse.
    pub fn builtin(kind: ThemeKind) -> Result<Self> {
        toml::from_str(kind.source())
            .map_err(|e| ShoppiesError::Theme(format!("{}: {e}", kind.name())))
    }

    /// Plain palette used if a built-in theme fails to parse.
    fn plain(kind: ThemeKind) -> Self {
        Self {
            name: kind.name().to_string(),
            label: kind.name().to_string(),
            colors: ThemeColors::default(),
        }
    }

    /// Converts a hex color to an RGB tuple, white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

/// All built-in palettes, parsed once at startup.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    /// Parses every built-in theme. A theme that fails to parse is replaced
    /// by a plain palette so the cycle keeps its length.
    #[must_use]
    pub fn load() -> Self {
        let themes = ThemeKind::ALL
            .iter()
            .map(|&kind| {
                Theme::builtin(kind).unwrap_or_else(|e| {
                    tracing::warn!(theme = kind.name(), error = %e, "failed to parse theme, using plain palette");
                    Theme::plain(kind)
                })
            })
            .collect();
        Self { themes }
    }

    /// Theme for a stored index; out-of-range indices render as the first theme.
    #[must_use]
    pub fn resolve(&self, index: i64) -> &Theme {
        let kind = ThemeKind::from_index(index).unwrap_or(ThemeKind::Light);
        &self.themes[kind.index()]
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::load()
    }
}
