//! Core data types for matchdeck
//!
//! This module defines the navigation sets and the view selector shared
//! throughout the application.

/// The five destinations on the bottom navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Discover,
    Standouts,
    Matches,
    Messages,
    Profile,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Discover, Tab::Standouts, Tab::Matches, Tab::Messages, Tab::Profile]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Discover => 0,
            Tab::Standouts => 1,
            Tab::Matches => 2,
            Tab::Messages => 3,
            Tab::Profile => 4,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Tab::Discover,
            1 => Tab::Standouts,
            2 => Tab::Matches,
            3 => Tab::Messages,
            4 => Tab::Profile,
            _ => Tab::Discover,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Discover => "Discover",
            Tab::Standouts => "Standouts",
            Tab::Matches => "Matches",
            Tab::Messages => "Messages",
            Tab::Profile => "Profile",
        }
    }

    /// Icon glyph for the nav slot. The Matches heart fills in while the
    /// tab is active and stays hollow otherwise.
    pub fn icon(&self, active: bool) -> &'static str {
        match self {
            Tab::Discover => "◈",
            Tab::Standouts => "✦",
            Tab::Matches => {
                if active {
                    "♥"
                } else {
                    "♡"
                }
            }
            Tab::Messages => "✉",
            Tab::Profile => "⚇",
        }
    }

    /// Unread count pinned to the nav slot, if this tab carries one
    pub fn badge(&self) -> Option<u8> {
        match self {
            Tab::Matches => Some(1),
            _ => None,
        }
    }
}

/// The two toggles inside the Matches view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LikesTab {
    #[default]
    Likes,
    Standouts,
}

impl LikesTab {
    pub fn all() -> &'static [LikesTab] {
        &[LikesTab::Likes, LikesTab::Standouts]
    }

    pub fn index(&self) -> usize {
        match self {
            LikesTab::Likes => 0,
            LikesTab::Standouts => 1,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => LikesTab::Likes,
            1 => LikesTab::Standouts,
            _ => LikesTab::Likes,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LikesTab::Likes => "Likes You",
            LikesTab::Standouts => "Standouts",
        }
    }
}

/// The two panels the content area can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Discover,
    Likes,
}

/// Map the selected tab to the panel that renders for it.
///
/// Only Matches has a built-out panel; every other tab lands on the
/// discovery placeholder.
pub fn view_for(tab: Tab) -> View {
    match tab {
        Tab::Matches => View::Likes,
        _ => View::Discover,
    }
}
