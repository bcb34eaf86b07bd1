//! Application state and event handling
//!
//! This is the core of matchdeck, managing:
//! - The selected tab and Likes sub-tab
//! - Event handling (keyboard and mouse input)
//! - The session theme

use crate::config::Config;
use crate::deck::LikeCard;
use crate::layout::{self, ClickTarget};
use crate::types::{view_for, LikesTab, Tab, View};
use crate::ui::Theme;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Main application state
pub struct App {
    // Core state
    pub should_quit: bool,
    pub active_tab: Tab,
    pub likes_tab: LikesTab,
    pub config: Config,
    pub theme: Theme,

    // The one profile the mock ever shows
    pub card: LikeCard,
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_name(config.theme);

        Self {
            should_quit: false,
            active_tab: Tab::default(),
            likes_tab: LikesTab::default(),
            config,
            theme,
            card: LikeCard::demo(),
        }
    }

    /// The panel the content area shows for the selected tab
    pub fn view(&self) -> View {
        view_for(self.active_tab)
    }

    /// Replace the selected tab. Total over the set; no validation and no
    /// side effects beyond the write.
    pub fn select_tab(&mut self, tab: Tab) {
        tracing::debug!(tab = tab.label(), "tab selected");
        self.active_tab = tab;
    }

    /// Replace the selected sub-tab inside the Matches view
    pub fn select_likes_tab(&mut self, tab: LikesTab) {
        tracing::debug!(tab = tab.label(), "sub-tab selected");
        self.likes_tab = tab;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys (work in all views)
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('1') => self.select_tab(Tab::Discover),
            KeyCode::Char('2') => self.select_tab(Tab::Standouts),
            KeyCode::Char('3') => self.select_tab(Tab::Matches),
            KeyCode::Char('4') => self.select_tab(Tab::Messages),
            KeyCode::Char('5') => self.select_tab(Tab::Profile),
            KeyCode::Char('t') => self.cycle_theme(),
            _ => {}
        }

        // View-specific handling
        if self.view() == View::Likes {
            self.handle_likes_key(key);
        }
    }

    /// Handle keys in the Likes view
    fn handle_likes_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.select_likes_tab(LikesTab::Likes),
            KeyCode::Right | KeyCode::Char('l') => self.select_likes_tab(LikesTab::Standouts),
            _ => {}
        }
    }

    /// Handle a mouse event against the current screen area
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let show_hints = self.config.display.show_hints;
        match layout::hit_test(area, show_hints, self.view(), mouse.column, mouse.row) {
            Some(ClickTarget::Tab(tab)) => self.select_tab(tab),
            Some(ClickTarget::SubTab(tab)) => self.select_likes_tab(tab),
            None => {}
        }
    }

    /// Cycle to the next theme. Session only, nothing is written back.
    fn cycle_theme(&mut self) {
        self.config.theme = self.config.theme.next();
        self.theme = Theme::from_name(self.config.theme);
        tracing::debug!(theme = self.config.theme.as_str(), "theme cycled");
    }
}
