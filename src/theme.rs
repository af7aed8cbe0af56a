//! Terminal colours for the console report.
//!
//! Table headers and informational lines are green, errors are white on red.

use crossterm::style::{Color, Stylize};

// ============================================================================
// Color Constants
// ============================================================================

/// Table header colour.
pub const HEADER_COLOR: Color = Color::Green;

/// Informational line colour.
pub const INFO_COLOR: Color = Color::Green;

/// Error line foreground.
pub const ERROR_FG_COLOR: Color = Color::White;

/// Error line background.
pub const ERROR_BG_COLOR: Color = Color::Red;

/// Prompt question colour.
pub const QUESTION_COLOR: Color = Color::Green;

/// Choice index and default value colour.
pub const ACCENT_COLOR: Color = Color::Yellow;

// ============================================================================
// Styles
// ============================================================================

/// Named styles applied to console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Header,
    Info,
    Error,
    Question,
    Accent,
}

/// Applies `tone` to `text` when `color` is enabled, otherwise returns it
/// unchanged.
#[must_use]
pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }

    match tone {
        Tone::Header => text.with(HEADER_COLOR).to_string(),
        Tone::Info => text.with(INFO_COLOR).to_string(),
        Tone::Error => text.with(ERROR_FG_COLOR).on(ERROR_BG_COLOR).to_string(),
        Tone::Question => text.with(QUESTION_COLOR).to_string(),
        Tone::Accent => text.with(ACCENT_COLOR).to_string(),
    }
}

/// Decides whether colour output is wanted.
///
/// Colour is off when requested, when `NO_COLOR` is set, or when stdout is
/// not a terminal.
#[must_use]
pub fn color_enabled(no_color_flag: bool) -> bool {
    use crossterm::tty::IsTty;

    !no_color_flag
        && std::env::var_os("NO_COLOR").is_none_or(|value| value.is_empty())
        && std::io::stdout().is_tty()
}

// ============================================================================
// Tests
// ============================================================================
