//! Marquee theme for cinetui
//!
//! Warm golds on a near-black house, like a cinema lobby after hours.

use ratatui::style::{Color, Modifier, Style};

/// Color palette and style helpers
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #101014 (near black)
    pub const BACKGROUND: Color = Color::Rgb(0x10, 0x10, 0x14);

    /// Primary: #f5c518 (marquee gold)
    pub const PRIMARY: Color = Color::Rgb(0xf5, 0xc5, 0x18);

    /// Secondary: #e8873a (amber)
    pub const SECONDARY: Color = Color::Rgb(0xe8, 0x87, 0x3a);

    /// Accent: #6fc3df (screen glow blue)
    pub const ACCENT: Color = Color::Rgb(0x6f, 0xc3, 0xdf);

    /// Text: #e6e1d5 (warm off-white)
    pub const TEXT: Color = Color::Rgb(0xe6, 0xe1, 0xd5);

    /// Dim: #6b6456 (faded program notes)
    pub const DIM: Color = Color::Rgb(0x6b, 0x64, 0x56);

    /// Error: #e5484d (exit-sign red)
    pub const ERROR: Color = Color::Rgb(0xe5, 0x48, 0x4d);

    /// Warning: #ffb224
    pub const WARNING: Color = Color::Rgb(0xff, 0xb2, 0x24);

    /// Panel background, one shade up from the house lights
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x1a, 0x1a, 0x20);

    /// Border: dimmed gold
    pub const BORDER: Color = Color::Rgb(0x8a, 0x70, 0x1c);

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Warning style
    pub fn warning() -> Style {
        Style::default()
            .fg(Self::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    /// Loading/spinner indicator
    pub fn loading() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent text style
    pub fn accent() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Secondary text style (amber)
    pub fn secondary() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Normal border
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Keybinding description style
    pub fn keybind_desc() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Genre tags
    pub fn genre() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Year/date metadata
    pub fn year() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Vote score
    pub fn rating() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Relative luminance of an RGB color
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Contrast ratio between two colors, from 1 (same) to 21 (black/white)
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}
