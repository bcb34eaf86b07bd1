//! Reusable UI widgets
//!
//! Contains common UI components shared by the panels:
//! - Notice card (the rose overlay)
//! - Photo placeholder frame
//! - Empty states

use crate::deck::ImageAsset;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a small centered notice card on top of whatever is below
pub fn render_notice_card(
    frame: &mut Frame,
    title: &str,
    hint: &str,
    theme: &Theme,
    area: Rect,
) {
    let notice_width =
        ((title.len().max(hint.len()) as u16) + 6).min(area.width.saturating_sub(4));
    let notice_area = centered_rect(notice_width, 5, area);

    // Clear the area behind the notice
    frame.render_widget(Clear, notice_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.card_border())
        .style(theme.card());
    frame.render_widget(block, notice_area);

    let inner = Rect {
        x: notice_area.x + 1,
        y: notice_area.y + 1,
        width: notice_area.width.saturating_sub(2),
        height: notice_area.height.saturating_sub(2),
    };

    let content = vec![
        Line::styled(title, theme.notice_title()),
        Line::raw(""),
        Line::styled(hint, theme.notice_hint()),
    ];
    let notice = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(notice, inner);
}

/// Render the layout box for an image this program does not decode.
///
/// Shows the asset identifier in the middle and a name strip along the
/// bottom, standing in for the original photo and its gradient overlay.
pub fn render_photo_frame(
    frame: &mut Frame,
    asset: &ImageAsset,
    name: &str,
    presence: &str,
    theme: &Theme,
    area: Rect,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    // The box itself stands in for the image
    let fill = Block::default().style(theme.photo());
    frame.render_widget(fill, area);

    // Asset identifier, centered where the picture would be
    if area.height >= 5 {
        let caption_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(2) / 2,
            width: area.width,
            height: 1,
        };
        let caption = Paragraph::new(format!("· {} ·", asset.id))
            .style(theme.photo())
            .alignment(Alignment::Center);
        frame.render_widget(caption, caption_area);
    }

    // Name strip pinned to the bottom
    if area.height >= 3 {
        let strip = Rect {
            x: area.x,
            y: area.y + area.height - 2,
            width: area.width,
            height: 2,
        };
        let lines = vec![
            Line::from(Span::styled(format!(" {}", name), theme.photo_name())),
            Line::from(Span::styled(format!(" {}", presence), theme.photo_overlay())),
        ];
        let overlay = Paragraph::new(lines).style(theme.photo_overlay());
        frame.render_widget(overlay, strip);
    }
}

/// Render a dimmed, centered empty-state line on a card surface
pub fn render_empty_state(frame: &mut Frame, message: &str, theme: &Theme, area: Rect) {
    if area.height == 0 {
        return;
    }
    let line_area = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    let empty = Paragraph::new(message)
        .style(theme.card_dim())
        .alignment(Alignment::Center);
    frame.render_widget(empty, line_area);
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let notice = centered_rect(40, 20, area);

        assert_eq!(notice.x, 30);
        assert_eq!(notice.y, 15);
        assert_eq!(notice.width, 40);
        assert_eq!(notice.height, 20);
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let area = Rect::new(0, 0, 10, 4);
        let notice = centered_rect(40, 20, area);

        // clamps to the area origin rather than underflowing
        assert_eq!(notice.x, 0);
        assert_eq!(notice.y, 0);
    }
}
