//! TUI color semantics and style constants.
//!
//! Pure data — consumed by the rendering layer for visual consistency.
//! Semantic styles are shared by both themes; only the page base and
//! border colors depend on [`Theme`].
//!
//! Color semantics:
//! - Green: success (registration accepted, field ok)
//! - Red: error slots and the fix-errors message
//! - Cyan: focused panel and keybinding hints
//! - Dim: disabled controls, help text

use ratatui::style::{Color, Modifier, Style};

use crate::types::Theme;

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Success — green.
pub const STYLE_SAFE: Style = Style::new().fg(Color::Green);

/// Error slot / failure — red.
pub const STYLE_DANGER: Style = Style::new().fg(Color::Red);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized or disabled — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Cursor row in a list, and the focused input.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Active tab label.
pub const STYLE_ACTIVE_TAB: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Enabled button.
pub const STYLE_BUTTON: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// THEME-DEPENDENT STYLES
// ============================================================================

/// Page background and default text color.
pub fn base(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::new().fg(Color::Black).bg(Color::White),
        Theme::Dark => Style::new().fg(Color::White).bg(Color::Black),
    }
}

/// Border of a panel, highlighted when it has focus.
pub fn border(theme: Theme, focused: bool) -> Style {
    if focused {
        return STYLE_INTERACTIVE.add_modifier(Modifier::BOLD);
    }
    match theme {
        Theme::Light => Style::new().fg(Color::Gray),
        Theme::Dark => Style::new().fg(Color::DarkGray),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_SAFE.fg, Some(Color::Green));
        assert_eq!(STYLE_DANGER.fg, Some(Color::Red));
        assert_eq!(STYLE_INTERACTIVE.fg, Some(Color::Cyan));
        assert_eq!(STYLE_DIM.fg, Some(Color::DarkGray));
    }

    #[test]
    fn themes_invert_base_colors() {
        let light = base(Theme::Light);
        let dark = base(Theme::Dark);
        assert_eq!(light.bg, Some(Color::White));
        assert_eq!(dark.bg, Some(Color::Black));
        assert_eq!(light.fg, dark.bg);
    }

    #[test]
    fn focused_border_is_interactive() {
        assert_eq!(border(Theme::Light, true).fg, Some(Color::Cyan));
        assert_eq!(border(Theme::Dark, true).fg, Some(Color::Cyan));
        assert_ne!(border(Theme::Dark, false).fg, Some(Color::Cyan));
    }

    #[test]
    fn cursor_style_is_reversed() {
        assert!(STYLE_CURSOR.add_modifier.contains(Modifier::REVERSED));
    }
}
