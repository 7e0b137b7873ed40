//! Reusable HUD components.
//!
//! # Components
//!
//! - [`KeyBadge`]: The boxed interact key (or busy glyph).
//! - [`HoldGauge`]: Hold-to-confirm progress bar under the badge.
//! - [`OptionList`]: Vertical option rows with highlight states.

use ratzilla::ratatui::layout::{Alignment, Rect};
use ratzilla::ratatui::style::{Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratzilla::ratatui::Frame;

use crate::catalog::MenuOption;
use crate::icons;
use crate::theme::Theme;

/// Width of the key badge column, borders included.
pub const BADGE_WIDTH: u16 = 5;
/// Height of the key badge, borders included.
pub const BADGE_HEIGHT: u16 = 3;

// ── KeyBadge ───────────────────────────────────────────────────

pub struct KeyBadge<'a> {
    theme: &'a Theme,
}

impl<'a> KeyBadge<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let key = Paragraph::new(Line::from(Span::styled(
            self.theme.key_glyph.as_str(),
            Style::default()
                .fg(self.theme.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.accent())),
        );
        f.render_widget(key, area);
    }
}

// ── HoldGauge ──────────────────────────────────────────────────

/// Fills left to right over the hold duration. An idle hold renders empty,
/// so a cancelled hold drops back to zero on the very next frame.
pub struct HoldGauge<'a> {
    theme: &'a Theme,
    progress: f64,
}

impl<'a> HoldGauge<'a> {
    pub fn new(theme: &'a Theme, progress: f64) -> Self {
        Self { theme, progress }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        // Gauge panics outside 0..=1
        let ratio = if self.progress.is_nan() {
            0.0
        } else {
            self.progress.clamp(0.0, 1.0)
        };
        let gauge = Gauge::default()
            .ratio(ratio)
            .label("")
            .gauge_style(Style::default().fg(self.theme.accent()));
        f.render_widget(gauge, area);
    }
}

// ── OptionList ─────────────────────────────────────────────────

/// How a row should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Active,
    /// Was active until a moment ago; fades out.
    Previous,
    Idle,
    Disabled,
}

/// Builder pairing each option with its row state.
///
/// # Example
/// ```ignore
/// let mut list = OptionList::new(theme);
/// list.push(&option, RowState::Active, true);
/// list.render(f, area);
/// ```
pub struct OptionList<'a> {
    theme: &'a Theme,
    lines: Vec<Line<'a>>,
}

impl<'a> OptionList<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            lines: Vec::new(),
        }
    }

    /// Add a row. `show_caret` draws the `▸` marker in front of an active row.
    pub fn push(&mut self, option: &MenuOption, state: RowState, show_caret: bool) {
        let style = match state {
            RowState::Active => self.theme.active_row(),
            RowState::Previous => self.theme.previous_row(),
            RowState::Idle => self.theme.idle_row(),
            RowState::Disabled => self.theme.disabled_row(),
        };
        let caret = if show_caret && state == RowState::Active {
            "▸ "
        } else {
            "  "
        };
        let icon_style = match icons::icon_color(option.icon_color.as_deref()) {
            Some(color) if state != RowState::Disabled => style.fg(color),
            _ => style,
        };

        self.lines.push(Line::from(vec![
            Span::styled(caret, Style::default().fg(self.theme.accent())),
            Span::styled(icons::glyph(option.icon.as_deref()), icon_style),
            Span::styled(format!(" {} ", option.display_label()), style),
        ]));
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.lines), area);
    }
}
