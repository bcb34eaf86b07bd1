//! Theme definitions for matchdeck
//!
//! Provides three built-in themes: Hinge (brand light), Midnight, and
//! Transparent. Each theme defines colors for all UI elements.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Brand colors
    pub accent: Color,
    pub accent_dim: Color,
    pub rose: Color,
    pub rose_tint: Color,

    // Surface colors (cards, nav, status shim)
    pub surface: Color,
    pub border: Color,
    pub photo: Color,
    pub scrim: Color,
    pub scrim_fg: Color,

    // Indicators
    pub badge: Color,
}

impl Theme {
    /// Create a theme from a theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Hinge => Self::hinge(),
            ThemeName::Midnight => Self::midnight(),
            ThemeName::Transparent => Self::transparent(),
        }
    }

    /// Hinge brand light theme (default)
    pub fn hinge() -> Self {
        Self {
            // Base
            bg: Color::Rgb(249, 250, 251),        // #F9FAFB
            fg: Color::Rgb(16, 16, 16),           // #101010
            fg_dim: Color::Rgb(107, 114, 128),    // #6B7280

            // Brand
            accent: Color::Rgb(97, 51, 147),      // #613393
            accent_dim: Color::Rgb(167, 139, 196), // #A78BC4
            rose: Color::Rgb(230, 93, 93),        // #E65D5D
            rose_tint: Color::Rgb(255, 240, 240), // #FFF0F0

            // Surfaces
            surface: Color::Rgb(255, 255, 255),   // #FFFFFF
            border: Color::Rgb(229, 231, 235),    // #E5E7EB
            photo: Color::Rgb(229, 231, 235),     // #E5E7EB
            scrim: Color::Rgb(28, 28, 32),        // #1C1C20
            scrim_fg: Color::Rgb(255, 255, 255),  // #FFFFFF

            // Indicators
            badge: Color::Rgb(239, 68, 68),       // #EF4444
        }
    }

    /// Midnight dark theme
    pub fn midnight() -> Self {
        Self {
            // Base
            bg: Color::Rgb(18, 18, 22),           // #121216
            fg: Color::Rgb(232, 231, 235),        // #E8E7EB
            fg_dim: Color::Rgb(128, 131, 141),    // #80838D

            // Brand
            accent: Color::Rgb(178, 132, 220),    // #B284DC
            accent_dim: Color::Rgb(122, 92, 150), // #7A5C96
            rose: Color::Rgb(235, 108, 108),      // #EB6C6C
            rose_tint: Color::Rgb(56, 32, 36),    // #382024

            // Surfaces
            surface: Color::Rgb(28, 28, 34),      // #1C1C22
            border: Color::Rgb(58, 60, 70),       // #3A3C46
            photo: Color::Rgb(44, 46, 54),        // #2C2E36
            scrim: Color::Rgb(10, 10, 12),        // #0A0A0C
            scrim_fg: Color::Rgb(240, 240, 244),  // #F0F0F4

            // Indicators
            badge: Color::Rgb(239, 68, 68),       // #EF4444
        }
    }

    /// Transparent theme (uses terminal colors)
    pub fn transparent() -> Self {
        Self {
            // Base - use terminal defaults
            bg: Color::Reset,
            fg: Color::Reset,
            fg_dim: Color::DarkGray,

            // Brand
            accent: Color::Magenta,
            accent_dim: Color::DarkGray,
            rose: Color::Red,
            rose_tint: Color::Reset,

            // Surfaces
            surface: Color::Reset,
            border: Color::DarkGray,
            photo: Color::DarkGray,
            scrim: Color::Black,
            scrim_fg: Color::White,

            // Indicators
            badge: Color::Red,
        }
    }

    // Style helpers for common UI patterns

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Base fill for the whole screen
    pub fn block_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Status shim clock
    pub fn shim(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }

    /// Status shim indicator dots
    pub fn shim_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.surface)
    }

    /// Text on a card surface
    pub fn card(&self) -> Style {
        Style::default().fg(self.fg).bg(self.surface)
    }

    /// Dimmed text on a card surface
    pub fn card_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.surface)
    }

    /// Card edge
    pub fn card_border(&self) -> Style {
        Style::default().fg(self.border).bg(self.surface)
    }

    /// Rose banner across the top of a like card
    pub fn rose_banner(&self) -> Style {
        Style::default()
            .fg(self.rose)
            .bg(self.rose_tint)
            .add_modifier(Modifier::BOLD)
    }

    /// Prompt section heading (small caps line)
    pub fn prompt_heading(&self) -> Style {
        Style::default()
            .fg(self.fg_dim)
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }

    /// Prompt response (the serif quote)
    pub fn prompt_response(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }

    /// Photo placeholder fill and caption
    pub fn photo(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.photo)
    }

    /// Name strip over the bottom of the photo
    pub fn photo_overlay(&self) -> Style {
        Style::default().fg(self.scrim_fg).bg(self.scrim)
    }

    /// Name line inside the photo strip
    pub fn photo_name(&self) -> Style {
        Style::default()
            .fg(self.scrim_fg)
            .bg(self.scrim)
            .add_modifier(Modifier::BOLD)
    }

    /// Brand glyph on the Discover nav slot (active)
    pub fn brand(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }

    /// Brand glyph on the Discover nav slot (inactive)
    pub fn brand_dim(&self) -> Style {
        Style::default().fg(self.accent_dim).bg(self.surface)
    }

    /// Nav slot style (active)
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }

    /// Nav slot style (inactive)
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.surface)
    }

    /// Unread badge chip
    pub fn badge(&self) -> Style {
        Style::default()
            .fg(self.scrim_fg)
            .bg(self.badge)
            .add_modifier(Modifier::BOLD)
    }

    /// Sub-tab toggle (active, underlined like the web border-bottom)
    pub fn sub_tab_active(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.surface)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Sub-tab toggle (inactive)
    pub fn sub_tab_inactive(&self) -> Style {
        Style::default()
            .fg(self.fg_dim)
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }

    /// Pass button on the like card
    pub fn pass_button(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.surface)
    }

    /// Like button on the like card
    pub fn like_button(&self) -> Style {
        Style::default()
            .fg(self.rose)
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }

    /// Title line of the rose notice
    pub fn notice_title(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }

    /// Hint line of the rose notice
    pub fn notice_hint(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.surface)
    }
}
