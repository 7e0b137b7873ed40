//! Panel trait and the two HUD panels.

pub mod text;
pub mod world;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::bridge::HostBridge;
use crate::input::InputMapping;
use crate::nav::Direction;
use crate::theme::Theme;

/// How long the previously active row stays marked after a move.
pub const TRAIL_FADE_MS: f64 = 180.0;

/// Trait that both panels implement.
pub trait Panel {
    fn input_mapping(&self) -> &InputMapping;

    /// Move the cursor. Returns true if it moved (or settled) and the host was told.
    fn navigate(&mut self, direction: Direction, now_ms: f64, host: &dyn HostBridge) -> bool;

    /// Advance time-driven state.
    fn tick(&mut self, now_ms: f64, host: &dyn HostBridge);

    /// Rows the panel needs.
    fn height(&self) -> u16;

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, now_ms: f64);
}

/// Remembers the row the cursor just left.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveTrail {
    previous: Option<usize>,
    moved_at_ms: f64,
}

impl MoveTrail {
    pub fn record(&mut self, from: Option<usize>, to: usize, now_ms: f64) {
        self.previous = from.filter(|&f| f != to);
        self.moved_at_ms = now_ms;
    }

    pub fn clear(&mut self) {
        self.previous = None;
    }

    pub fn previous_at(&self, now_ms: f64) -> Option<usize> {
        if now_ms - self.moved_at_ms < TRAIL_FADE_MS {
            self.previous
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_fades() {
        let mut trail = MoveTrail::default();
        trail.record(Some(1), 2, 1000.0);
        assert_eq!(trail.previous_at(1000.0), Some(1));
        assert_eq!(trail.previous_at(1000.0 + TRAIL_FADE_MS), None);
    }

    #[test]
    fn trail_ignores_moves_onto_itself() {
        let mut trail = MoveTrail::default();
        trail.record(Some(0), 0, 0.0);
        assert_eq!(trail.previous_at(0.0), None);
        trail.record(Some(3), 0, 0.0);
        trail.clear();
        assert_eq!(trail.previous_at(0.0), None);
    }
}
