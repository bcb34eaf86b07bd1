//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Status shim for the mobile look
//! - Active view (discovery placeholder or Likes panel)
//! - Bottom navigation bar with five tap slots
//! - Key hint line

use crate::app::App;
use crate::deck;
use crate::layout;
use crate::types::{LikesTab, Tab, View};
use crate::ui::widgets;
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Base fill so the theme background covers every cell
    frame.render_widget(Block::default().style(app.theme.block_style()), area);

    let regions = layout::screen(area, app.config.display.show_hints);

    render_status_shim(frame, app, regions.status);
    render_view(frame, app, regions.content);
    render_nav(frame, app, regions.nav);

    if app.config.display.show_hints {
        render_hints(frame, app, regions.hints);
    }
}

/// Status shim across the top: clock left, indicator dots right
fn render_status_shim(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let clock = Local::now().format("%-H:%M").to_string();
    let left = Paragraph::new(Line::from(Span::styled(
        format!(" {}", clock),
        theme.shim(),
    )))
    .style(theme.shim());
    frame.render_widget(left, area);

    let right = Paragraph::new(Line::from(Span::styled("◌ ◌ ", theme.shim_dim())))
        .alignment(Alignment::Right);
    frame.render_widget(right, area);
}

/// Render the active view, chosen by the tab-to-view mapping
fn render_view(frame: &mut Frame, app: &App, area: Rect) {
    match app.view() {
        View::Discover => render_discover(frame, app, area),
        View::Likes => render_likes(frame, app, area),
    }
}

/// Render key hints for the current view
fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.view() {
        View::Discover => "[1-5] Switch Tab  [t] Theme  [q] Quit",
        View::Likes => "[1-5] Switch Tab  [←/→] Likes You / Standouts  [t] Theme  [q] Quit",
    };

    let hint_widget = Paragraph::new(hints)
        .style(app.theme.text_dim())
        .alignment(Alignment::Center);
    frame.render_widget(hint_widget, area);
}

// === VIEW RENDERERS ===

/// Discovery placeholder: the card that would hold the next potential
/// match, with the rose notice layered on top
fn render_discover(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    // the would-be match card, inset from the view edges
    let card = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.card_border())
        .style(theme.card());
    let inner = block.inner(card);
    frame.render_widget(block, card);

    // a pulsing image area in the original, a flat fill here
    frame.render_widget(Block::default().style(theme.photo()), inner);
    if inner.height > 0 {
        // sits above the notice so both stay readable
        let loading_area = Rect {
            x: inner.x,
            y: inner.y + inner.height / 4,
            width: inner.width,
            height: 1,
        };
        let loading = Paragraph::new(deck::DISCOVER_LOADING)
            .style(theme.photo())
            .alignment(Alignment::Center);
        frame.render_widget(loading, loading_area);
    }

    widgets::render_notice_card(
        frame,
        deck::DISCOVER_NOTICE_TITLE,
        deck::DISCOVER_NOTICE_HINT,
        theme,
        card,
    );
}

/// The Matches view: sub-tab toggle on top, then the active panel
fn render_likes(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    if area.height < 2 {
        return;
    }

    // this view sits on a card surface, not the app background
    frame.render_widget(Block::default().style(theme.card()), area);

    render_sub_tabs(frame, app, area);

    let body = Rect {
        x: area.x,
        y: area.y + 3,
        width: area.width,
        height: area.height.saturating_sub(3),
    };

    match app.likes_tab {
        LikesTab::Likes => render_like_card(frame, app, body),
        LikesTab::Standouts => {
            widgets::render_empty_state(frame, deck::NO_STANDOUTS, theme, body)
        }
    }
}

/// The Likes You / Standouts toggle. The active label is underlined the
/// way the web mock draws its bottom border.
fn render_sub_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    for (tab, slot) in LikesTab::all().iter().zip(layout::sub_tab_slots(area)) {
        let style = if app.likes_tab == *tab {
            theme.sub_tab_active()
        } else {
            theme.sub_tab_inactive()
        };
        let label = Paragraph::new(Line::from(Span::styled(tab.label(), style)));
        frame.render_widget(label, slot);
    }
}

/// The one hard-coded incoming like
fn render_like_card(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let card = &app.card;

    if area.height == 0 {
        return;
    }

    // caption above the card
    let caption_area = Rect { x: area.x, y: area.y, width: area.width, height: 1 };
    let caption = Paragraph::new(card.received)
        .style(theme.card_dim())
        .alignment(Alignment::Center);
    frame.render_widget(caption, caption_area);

    // center the card, phone-screen wide; the photo aspect sets the
    // natural height, the view caps it
    let card_width = area.width.saturating_sub(4).min(44);
    let inner_width = card_width.saturating_sub(2);
    let natural_height = 10 + card.photo.rows_for_width(inner_width);
    let card_height = natural_height.min(area.height.saturating_sub(2));
    if card_width < 20 || card_height < 12 {
        return;
    }

    let card_area = Rect {
        x: area.x + (area.width - card_width) / 2,
        y: area.y + 2,
        width: card_width,
        height: card_height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.card_border())
        .style(theme.card());
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let sections = Layout::vertical([
        Constraint::Length(1), // rose banner
        Constraint::Length(4), // prompt
        Constraint::Min(4),    // photo
        Constraint::Length(3), // action buttons
    ])
    .split(inner);

    // 1. rose banner
    let banner = Paragraph::new(Line::from(vec![
        Span::styled("✿ ", theme.rose_banner()),
        Span::styled(card.rose_label, theme.rose_banner()),
    ]))
    .alignment(Alignment::Center)
    .style(theme.rose_banner());
    frame.render_widget(banner, sections[0]);

    // 2. prompt section
    let prompt = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!(" {}", card.prompt_heading.to_uppercase()),
            theme.prompt_heading(),
        )),
        Line::from(Span::styled(
            format!(" {}", card.prompt_response),
            theme.prompt_response(),
        )),
    ];
    frame.render_widget(Paragraph::new(prompt).style(theme.card()), sections[1]);

    // 3. photo box
    widgets::render_photo_frame(
        frame,
        &card.photo,
        card.name,
        card.presence,
        theme,
        sections[2],
    );

    // 4. action buttons, drawn but not wired
    let buttons = Line::from(vec![
        Span::styled("( ✕ )", theme.pass_button()),
        Span::styled("        ", theme.card()),
        Span::styled("( ♥ )", theme.like_button()),
    ]);
    let button_area = Rect {
        x: sections[3].x,
        y: sections[3].y + 1,
        width: sections[3].width,
        height: 1,
    };
    let button_row = Paragraph::new(buttons)
        .alignment(Alignment::Center)
        .style(theme.card());
    frame.render_widget(button_row, button_area);
}

// === NAV BAR ===

/// Bottom navigation bar: five equal tap slots on a card surface
fn render_nav(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let bar = Block::default()
        .style(theme.card())
        .borders(Borders::TOP)
        .border_style(theme.card_border());
    frame.render_widget(bar, area);

    for (tab, slot) in Tab::all().iter().zip(layout::nav_slots(area)) {
        render_nav_slot(frame, app, *tab, slot);
    }
}

/// One nav slot: icon row under the border, optional label row, badge
fn render_nav_slot(frame: &mut Frame, app: &App, tab: Tab, slot: Rect) {
    let theme = &app.theme;
    let active = app.active_tab == tab;
    if slot.height < 2 {
        return;
    }

    let icon_style = match tab {
        // the Discover slot carries the brand mark, standing in for
        // deck::LOGO
        Tab::Discover => {
            if active {
                theme.brand()
            } else {
                theme.brand_dim()
            }
        }
        _ => {
            if active {
                theme.tab_active()
            } else {
                theme.tab_inactive()
            }
        }
    };

    let mut icon_spans = vec![Span::styled(tab.icon(active), icon_style)];
    if app.config.display.show_badge && !active {
        if let Some(count) = tab.badge() {
            icon_spans.push(Span::styled(badge_glyph(count), theme.badge()));
        }
    }

    let icon_area = Rect { x: slot.x, y: slot.y + 1, width: slot.width, height: 1 };
    let icon_row = Paragraph::new(Line::from(icon_spans)).alignment(Alignment::Center);
    frame.render_widget(icon_row, icon_area);

    if app.config.display.show_tab_labels && slot.height > 2 {
        let label_style = if active {
            theme.tab_active()
        } else {
            theme.tab_inactive()
        };
        let label_area = Rect { x: slot.x, y: slot.y + 2, width: slot.width, height: 1 };
        let label_row = Paragraph::new(Line::from(Span::styled(tab.label(), label_style)))
            .alignment(Alignment::Center);
        frame.render_widget(label_row, label_area);
    }
}

/// Superscript digit for the unread chip next to an icon
fn badge_glyph(count: u8) -> String {
    const DIGITS: [&str; 10] = ["⁰", "¹", "²", "³", "⁴", "⁵", "⁶", "⁷", "⁸", "⁹"];
    match DIGITS.get(count as usize) {
        Some(digit) => (*digit).to_string(),
        None => format!("+{}", count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Modifier, Terminal};

    fn test_app() -> App {
        App::new(Config::default())
    }

    fn draw(app: &App) -> Buffer {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_initial_screen_shows_discover_placeholder() {
        let app = test_app();
        let text = buffer_text(&draw(&app));

        assert!(text.contains("Loading Potential Matches..."));
        assert!(text.contains("Someone sent you a rose."));
        assert!(text.contains("Go to your Likes to see who it is."));
    }

    #[test]
    fn test_matches_tab_shows_like_card() {
        let mut app = test_app();
        app.select_tab(Tab::Matches);
        let text = buffer_text(&draw(&app));

        assert!(text.contains("Likes You"));
        assert!(text.contains("Has liked you just now"));
        assert!(text.contains("Rose"));
        assert!(text.contains("REPLIED TO YOUR PROMPT"));
        assert!(text.contains("“Full Marx”"));
        assert!(text.contains("chetanya.jpeg"));
        assert!(text.contains("Chetanya Goyal"));
        assert!(text.contains("Active now"));
    }

    #[test]
    fn test_standouts_sub_tab_shows_empty_state() {
        let mut app = test_app();
        app.select_tab(Tab::Matches);
        app.select_likes_tab(LikesTab::Standouts);
        let text = buffer_text(&draw(&app));

        assert!(text.contains("No Standouts today."));
        assert!(!text.contains("Chetanya Goyal"));
    }

    #[test]
    fn test_heart_fills_while_matches_active() {
        let app = test_app();
        let discover_text = buffer_text(&draw(&app));
        assert!(discover_text.contains("♡"));
        assert!(!discover_text.contains("♥"));

        let mut app = test_app();
        app.select_tab(Tab::Matches);
        let matches_text = buffer_text(&draw(&app));
        assert!(matches_text.contains("♥"));
        assert!(!matches_text.contains("♡"));
    }

    #[test]
    fn test_badge_hides_while_matches_active() {
        let app = test_app();
        assert!(buffer_text(&draw(&app)).contains("¹"));

        let mut app = test_app();
        app.select_tab(Tab::Matches);
        assert!(!buffer_text(&draw(&app)).contains("¹"));
    }

    #[test]
    fn test_sub_tab_underline_follows_selection() {
        let mut app = test_app();
        app.select_tab(Tab::Matches);

        let regions = layout::screen(Rect::new(0, 0, 80, 30), true);
        let slots = layout::sub_tab_slots(regions.content);

        let buffer = draw(&app);
        let likes_style = buffer.get(slots[0].x, slots[0].y).style();
        let standouts_style = buffer.get(slots[1].x, slots[1].y).style();
        assert!(likes_style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(!standouts_style.add_modifier.contains(Modifier::UNDERLINED));

        app.select_likes_tab(LikesTab::Standouts);
        let buffer = draw(&app);
        let likes_style = buffer.get(slots[0].x, slots[0].y).style();
        let standouts_style = buffer.get(slots[1].x, slots[1].y).style();
        assert!(!likes_style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(standouts_style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_hint_line_can_be_hidden() {
        let app = test_app();
        assert!(buffer_text(&draw(&app)).contains("[q] Quit"));

        let mut config = Config::default();
        config.display.show_hints = false;
        let app = App::new(config);
        assert!(!buffer_text(&draw(&app)).contains("[q] Quit"));
    }

    #[test]
    fn test_nav_labels_can_be_hidden() {
        let app = test_app();
        assert!(buffer_text(&draw(&app)).contains("Messages"));

        let mut config = Config::default();
        config.display.show_tab_labels = false;
        let app = App::new(config);
        assert!(!buffer_text(&draw(&app)).contains("Messages"));
    }

    #[test]
    fn test_tap_through_flow() {
        let mut app = test_app();

        let text = buffer_text(&draw(&app));
        assert!(text.contains("Someone sent you a rose."));

        app.select_tab(Tab::Matches);
        let text = buffer_text(&draw(&app));
        assert!(text.contains("Has liked you just now"));

        app.select_likes_tab(LikesTab::Standouts);
        let text = buffer_text(&draw(&app));
        assert!(text.contains("No Standouts today."));

        // leaving and returning keeps the sub-tab selection
        app.select_tab(Tab::Discover);
        app.select_tab(Tab::Matches);
        let text = buffer_text(&draw(&app));
        assert!(text.contains("No Standouts today."));
    }
}
