//! Text picker rendering (read-only from state).

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::Frame;

use crate::theme::Theme;
use crate::widgets::{KeyBadge, OptionList, RowState, BADGE_HEIGHT, BADGE_WIDTH};

use super::TextPicker;

pub fn render(picker: &TextPicker, f: &mut Frame, area: Rect, theme: &Theme, now_ms: f64) {
    if !picker.is_active() {
        return;
    }

    let list = picker.list();
    let current = list.current_index();
    let previous = picker.trail().previous_at(now_ms);
    let show_caret = list.enabled_count() > 1;

    let mut rows = OptionList::new(theme);
    for (index, option) in list.options().iter().enumerate() {
        if option.disabled {
            continue;
        }
        let state = if current == Some(index) {
            RowState::Active
        } else if previous == Some(index) {
            RowState::Previous
        } else {
            RowState::Idle
        };
        rows.push(option, state, show_caret);
    }
    if rows.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BADGE_WIDTH), // Key badge
            Constraint::Length(1),
            Constraint::Min(8), // Options
        ])
        .split(area);
    let badge = Rect {
        height: columns[0].height.min(BADGE_HEIGHT),
        ..columns[0]
    };

    KeyBadge::new(theme).render(f, badge);
    rows.render(f, columns[2]);
}
