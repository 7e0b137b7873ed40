//! World menu rendering (read-only from state).

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::Frame;

use crate::theme::Theme;
use crate::widgets::{HoldGauge, KeyBadge, OptionList, RowState, BADGE_HEIGHT, BADGE_WIDTH};

use super::WorldMenu;

pub fn render(menu: &WorldMenu, f: &mut Frame, area: Rect, theme: &Theme, now_ms: f64) {
    if menu.list().is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BADGE_WIDTH), // Key badge + hold gauge
            Constraint::Length(1),
            Constraint::Min(8), // Options
        ])
        .split(area);

    render_badge(menu, f, columns[0], theme, now_ms);
    render_options(menu, f, columns[2], theme, now_ms);
}

// ── Badge ──────────────────────────────────────────────────────────────

fn render_badge(menu: &WorldMenu, f: &mut Frame, area: Rect, theme: &Theme, now_ms: f64) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BADGE_HEIGHT),
            Constraint::Length(1), // Gauge
            Constraint::Min(0),
        ])
        .split(area);

    KeyBadge::new(theme).render(f, rows[0]);
    if menu.is_holding() {
        HoldGauge::new(theme, menu.hold_progress(now_ms)).render(f, rows[1]);
    }
}

// ── Options ────────────────────────────────────────────────────────────

fn render_options(menu: &WorldMenu, f: &mut Frame, area: Rect, theme: &Theme, now_ms: f64) {
    let current = menu.list().current_index();
    let previous = menu.trail().previous_at(now_ms);

    let mut rows = OptionList::new(theme);
    for (index, option) in menu.list().options().iter().enumerate() {
        rows.push(option, row_state(index, option.disabled, current, previous), false);
    }
    rows.render(f, area);
}

/// Disabled options still show as active when the cursor rests on them.
pub(crate) fn row_state(
    index: usize,
    disabled: bool,
    current: Option<usize>,
    previous: Option<usize>,
) -> RowState {
    if current == Some(index) {
        RowState::Active
    } else if disabled {
        RowState::Disabled
    } else if previous == Some(index) {
        RowState::Previous
    } else {
        RowState::Idle
    }
}
