//! Screen geometry shared by rendering and hit-testing
//!
//! Every clickable region is computed here, once, so the renderer and the
//! click resolver can never disagree about where a tap target lives.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::types::{LikesTab, Tab, View};

/// Cells between the two sub-tab labels
const SUB_TAB_GAP: u16 = 8;

/// The four fixed screen regions, top to bottom
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub status: Rect,
    pub content: Rect,
    pub nav: Rect,
    pub hints: Rect,
}

/// Split the terminal area into the fixed regions
pub fn screen(area: Rect, show_hints: bool) -> ScreenLayout {
    let hint_height = if show_hints { 1 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(1),           // status shim
        Constraint::Min(8),              // content
        Constraint::Length(3),           // nav bar
        Constraint::Length(hint_height), // key hints
    ])
    .split(area);

    ScreenLayout {
        status: chunks[0],
        content: chunks[1],
        nav: chunks[2],
        hints: chunks[3],
    }
}

/// Equal tap slots for the five nav icons, spanning the full bar
pub fn nav_slots(nav: Rect) -> [Rect; 5] {
    let chunks = Layout::horizontal([
        Constraint::Ratio(1, 5),
        Constraint::Ratio(1, 5),
        Constraint::Ratio(1, 5),
        Constraint::Ratio(1, 5),
        Constraint::Ratio(1, 5),
    ])
    .split(nav);

    [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]]
}

/// Label rects for the Likes You / Standouts toggle, centered near the
/// top of the content area
pub fn sub_tab_slots(content: Rect) -> [Rect; 2] {
    let likes_width = LikesTab::Likes.label().len() as u16;
    let standouts_width = LikesTab::Standouts.label().len() as u16;
    let total = likes_width + SUB_TAB_GAP + standouts_width;

    let x = content.x + content.width.saturating_sub(total) / 2;
    let y = content.y + 1;

    [
        Rect { x, y, width: likes_width, height: 1 },
        Rect {
            x: x + likes_width + SUB_TAB_GAP,
            y,
            width: standouts_width,
            height: 1,
        },
    ]
}

/// What a click resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Tab(Tab),
    SubTab(LikesTab),
}

/// Resolve a click at (column, row) against the current screen.
///
/// The whole nav slot is a tap target, phone style. Sub-tab labels exist
/// only while the Likes view is showing. Everything else, the card's
/// pass and like buttons included, is inert.
pub fn hit_test(
    area: Rect,
    show_hints: bool,
    view: View,
    column: u16,
    row: u16,
) -> Option<ClickTarget> {
    let regions = screen(area, show_hints);
    let position = Position::new(column, row);

    if regions.nav.contains(position) {
        for (idx, slot) in nav_slots(regions.nav).iter().enumerate() {
            if slot.contains(position) {
                return Some(ClickTarget::Tab(Tab::from_index(idx)));
            }
        }
        return None;
    }

    if view == View::Likes {
        for (idx, slot) in sub_tab_slots(regions.content).iter().enumerate() {
            if slot.contains(position) {
                return Some(ClickTarget::SubTab(LikesTab::from_index(idx)));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn test_screen_regions() {
        let regions = screen(term(), true);
        assert_eq!(regions.status, Rect::new(0, 0, 80, 1));
        assert_eq!(regions.content, Rect::new(0, 1, 80, 19));
        assert_eq!(regions.nav, Rect::new(0, 20, 80, 3));
        assert_eq!(regions.hints, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_screen_without_hints() {
        let regions = screen(term(), false);
        assert_eq!(regions.hints.height, 0);
        assert_eq!(regions.nav, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn test_nav_slots_tile_the_bar() {
        let regions = screen(term(), true);
        let slots = nav_slots(regions.nav);
        let total: u16 = slots.iter().map(|s| s.width).sum();
        assert_eq!(total, regions.nav.width);
        for slot in &slots {
            assert_eq!(slot.y, regions.nav.y);
            assert_eq!(slot.height, regions.nav.height);
        }
    }

    #[test]
    fn test_click_each_nav_slot() {
        let regions = screen(term(), true);
        let slots = nav_slots(regions.nav);
        for (idx, slot) in slots.iter().enumerate() {
            let col = slot.x + slot.width / 2;
            let row = slot.y + 1;
            let hit = hit_test(term(), true, View::Discover, col, row);
            assert_eq!(hit, Some(ClickTarget::Tab(Tab::from_index(idx))));
        }
    }

    #[test]
    fn test_sub_tabs_exist_only_in_likes_view() {
        let regions = screen(term(), true);
        let slots = sub_tab_slots(regions.content);
        let col = slots[1].x + 1;
        let row = slots[1].y;

        let in_likes = hit_test(term(), true, View::Likes, col, row);
        assert_eq!(in_likes, Some(ClickTarget::SubTab(LikesTab::Standouts)));

        let in_discover = hit_test(term(), true, View::Discover, col, row);
        assert_eq!(in_discover, None);
    }

    #[test]
    fn test_card_region_is_inert() {
        // middle of the content area, well below the toggle row
        let hit = hit_test(term(), true, View::Likes, 40, 12);
        assert_eq!(hit, None);
    }

    #[test]
    fn test_status_and_hint_rows_are_inert() {
        assert_eq!(hit_test(term(), true, View::Likes, 40, 0), None);
        assert_eq!(hit_test(term(), true, View::Likes, 40, 23), None);
    }
}
