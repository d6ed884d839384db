//! Centralized theme and color scheme for the TUI.

use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Semantic colors for the questionnaire screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,

    // Button colors
    pub button_fg: Color,
    pub button_bg: Color,
    pub button_primary_bg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,

            success: Color::Green,
            warning: Color::Yellow,

            button_fg: Color::White,
            button_bg: Color::Rgb(70, 70, 80),
            button_primary_bg: Color::Blue,
        }
    }

    /// Dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    /// Light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),

            button_fg: Color::Rgb(30, 30, 30),
            button_bg: Color::Rgb(220, 220, 225),
            button_primary_bg: Color::Rgb(120, 170, 240),
        }
    }

    /// High contrast theme (accessibility)
    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            primary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,

            success: Color::LightGreen,
            warning: Color::LightYellow,

            button_fg: Color::Black,
            button_bg: Color::Gray,
            button_primary_bg: Color::LightCyan,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    /// Theme by name; unknown names fall back to dark.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn question() -> Style {
        Style::default().fg(colors().text).bold()
    }

    pub fn subsection_title() -> Style {
        Style::default().fg(colors().primary)
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    /// Placeholder text inside empty inputs
    pub fn placeholder() -> Style {
        Style::default().fg(colors().text_muted).italic()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }

    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    /// Navigation button; `primary` marks the forward button.
    pub fn button(enabled: bool, focused: bool, primary: bool) -> Style {
        let scheme = colors();
        if !enabled {
            return Style::default().fg(scheme.muted).bg(scheme.background_alt);
        }
        let bg = if primary {
            scheme.button_primary_bg
        } else {
            scheme.button_bg
        };
        let style = Style::default().fg(scheme.button_fg).bg(bg);
        if focused {
            style.bold().add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Footer hints for the questionnaire screen
pub struct FooterHints;

impl FooterHints {
    /// Hints for the focused input kind
    pub fn for_focus(focus: &str) -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();
        match focus {
            "select" => hints.insert(0, ("←→↑↓", "choose")),
            "text" => hints.insert(0, ("Enter", "newline")),
            "button" => hints.insert(0, ("Enter", "press")),
            _ => {}
        }
        hints
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab", "focus"),
            ("PgUp/PgDn", "prev/next"),
            ("^T", "theme"),
            ("F1", "help"),
            ("Esc", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_rotation() {
        assert_eq!(Theme::dark().next().name, "light");
        assert_eq!(Theme::light().next().name, "high-contrast");
        assert_eq!(Theme::high_contrast().next().name, "dark");
    }

    #[test]
    fn test_focused_border_stands_out_in_every_scheme() {
        for scheme in [
            ColorScheme::dark(),
            ColorScheme::light(),
            ColorScheme::high_contrast(),
        ] {
            assert_ne!(scheme.border, scheme.border_focused);
            assert_ne!(scheme.button_bg, scheme.button_primary_bg);
        }
    }

    #[test]
    fn test_from_name_falls_back_to_dark() {
        assert_eq!(Theme::from_name("HC").name, "high-contrast");
        assert_eq!(Theme::from_name("neon").name, "dark");
    }

    #[test]
    fn test_footer_hints_prepend_focus_hint() {
        let hints = FooterHints::for_focus("select");
        assert_eq!(hints[0], ("←→↑↓", "choose"));
        assert_eq!(hints.len(), FooterHints::global().len() + 1);
    }

    #[test]
    fn test_render_footer_hints_spans() {
        let spans = render_footer_hints(&[("a", "one"), ("b", "two")]);
        // key, desc, separator, key, desc
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[0].content, "[a]");
    }
}
