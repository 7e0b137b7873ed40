//! World interaction menu: a wheel-driven cursor over nearby world-object
//! actions, with hold-to-confirm for options that ask for it.

pub mod render;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::bridge::{HostBridge, HostRequest};
use crate::catalog::MenuOption;
use crate::color::Rgba;
use crate::hold::{HoldController, HoldOutcome};
use crate::input::InputMapping;
use crate::nav::{Direction, NavConfig, NavigableList};
use crate::panels::{MoveTrail, Panel};
use crate::theme::Theme;
use crate::widgets::BADGE_HEIGHT;

pub struct WorldMenu {
    list: NavigableList,
    hold: HoldController,
    mapping: InputMapping,
    trail: MoveTrail,
}

impl WorldMenu {
    pub fn new(nav: NavConfig, mapping: InputMapping) -> Self {
        Self {
            list: NavigableList::new(nav),
            hold: HoldController::new(),
            mapping,
            trail: MoveTrail::default(),
        }
    }

    /// Replace the catalog. A hold in flight is cancelled.
    pub fn set_options(&mut self, options: Vec<MenuOption>, reset: bool, host: &dyn HostBridge) {
        if self.hold.cancel() {
            tracing::debug!("catalog replaced mid-hold, hold cancelled");
        }
        self.trail.clear();
        if let Some(index) = self.list.replace(options, reset) {
            host.send(HostRequest::CurrentOption(index + 1));
        }
    }

    /// Select the current option, or start holding it.
    pub fn interact(&mut self, now_ms: f64, host: &dyn HostBridge) {
        let (Some(option), Some(current)) = (self.list.current_option(), self.list.current_ref())
        else {
            return;
        };
        if option.disabled {
            tracing::debug!(label = %option.label, "ignoring interact on disabled option");
            return;
        }
        match self.hold.begin(current, &option.target, option.hold_ms, now_ms) {
            HoldOutcome::Immediate(target) => host.send(HostRequest::Select(target)),
            HoldOutcome::Started => tracing::debug!(hold_ms = option.hold_ms, "hold started"),
            HoldOutcome::Rejected => {}
        }
    }

    /// Host released the interact key.
    pub fn release(&mut self) -> bool {
        self.hold.cancel()
    }

    pub fn highlight_color(&self) -> Option<Rgba> {
        self.list.current_option()?.color
    }

    pub fn hold_progress(&self, now_ms: f64) -> f64 {
        self.hold.progress(now_ms)
    }

    pub fn is_holding(&self) -> bool {
        self.hold.is_holding()
    }

    pub fn list(&self) -> &NavigableList {
        &self.list
    }

    pub fn trail(&self) -> &MoveTrail {
        &self.trail
    }
}

impl Panel for WorldMenu {
    fn input_mapping(&self) -> &InputMapping {
        &self.mapping
    }

    fn navigate(&mut self, direction: Direction, now_ms: f64, host: &dyn HostBridge) -> bool {
        // locked while holding
        if self.hold.is_holding() {
            return false;
        }
        let from = self.list.current_index();
        let Some(index) = self.list.advance(direction) else {
            return false;
        };
        self.trail.record(from, index, now_ms);
        host.send(HostRequest::CurrentOption(index + 1));
        true
    }

    fn tick(&mut self, now_ms: f64, host: &dyn HostBridge) {
        if let Some(target) = self.hold.poll(now_ms, self.list.current_ref()) {
            host.send(HostRequest::Select(target));
        }
    }

    fn height(&self) -> u16 {
        (self.list.options().len() as u16).max(BADGE_HEIGHT + 1)
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, now_ms: f64) {
        render::render(self, f, area, theme, now_ms);
    }
}

impl Default for WorldMenu {
    fn default() -> Self {
        WorldMenu::new(NavConfig::WORLD, InputMapping::WORLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::RecordingBridge;
    use crate::catalog::{option, Target};

    fn menu_with(options: Vec<MenuOption>, host: &RecordingBridge) -> WorldMenu {
        let mut menu = WorldMenu::default();
        menu.set_options(options, true, host);
        host.take();
        menu
    }

    fn held(label: &str, hold_ms: u32, id: u32) -> MenuOption {
        let mut opt = option(label, false);
        opt.hold_ms = hold_ms;
        opt.target = Target {
            kind: "door".into(),
            id,
        };
        opt
    }

    #[test]
    fn set_options_reports_reset_index() {
        let host = RecordingBridge::default();
        let mut menu = WorldMenu::default();
        menu.set_options(vec![option("a", false), option("b", false)], true, &host);
        assert_eq!(host.take(), vec![HostRequest::CurrentOption(1)]);

        // keeping a valid index reports nothing
        menu.navigate(Direction::Next, 0.0, &host);
        host.take();
        menu.set_options(vec![option("a", false), option("b", false)], false, &host);
        assert!(host.take().is_empty());
        assert_eq!(menu.list().current_index(), Some(1));
    }

    #[test]
    fn navigate_reports_one_based_index() {
        let host = RecordingBridge::default();
        let mut menu = menu_with(vec![option("a", false), option("b", false)], &host);
        assert!(menu.navigate(Direction::Previous, 0.0, &host));
        assert_eq!(host.take(), vec![HostRequest::CurrentOption(2)]);
    }

    #[test]
    fn immediate_select_without_hold() {
        let host = RecordingBridge::default();
        let mut menu = menu_with(vec![held("a", 0, 7)], &host);
        menu.interact(0.0, &host);
        assert_eq!(
            host.take(),
            vec![HostRequest::Select(Target { kind: "door".into(), id: 7 })]
        );
        assert!(!menu.is_holding());
    }

    #[test]
    fn disabled_option_is_not_selectable() {
        let host = RecordingBridge::default();
        let mut menu = menu_with(vec![option("a", true)], &host);
        menu.interact(0.0, &host);
        assert!(host.take().is_empty());
    }

    #[test]
    fn hold_completes_and_locks_navigation() {
        let host = RecordingBridge::default();
        let mut menu = menu_with(vec![held("a", 1000, 1), held("b", 0, 2)], &host);
        menu.interact(100.0, &host);
        assert!(menu.is_holding());

        assert!(!menu.navigate(Direction::Next, 200.0, &host));
        menu.tick(1099.0, &host);
        assert!(host.take().is_empty());

        menu.tick(1100.0, &host);
        assert_eq!(
            host.take(),
            vec![HostRequest::Select(Target { kind: "door".into(), id: 1 })]
        );
        menu.tick(3000.0, &host);
        assert!(host.take().is_empty());
    }

    #[test]
    fn release_cancels_hold() {
        let host = RecordingBridge::default();
        let mut menu = menu_with(vec![held("a", 500, 1)], &host);
        menu.interact(0.0, &host);
        assert!(menu.release());
        assert_eq!(menu.hold_progress(250.0), 0.0);
        menu.tick(10_000.0, &host);
        assert!(host.take().is_empty());
    }

    #[test]
    fn new_catalog_cancels_hold() {
        let host = RecordingBridge::default();
        let mut menu = menu_with(vec![held("a", 500, 1)], &host);
        menu.interact(0.0, &host);
        menu.set_options(vec![held("a", 500, 1)], false, &host);
        assert!(!menu.is_holding());
        menu.tick(1000.0, &host);
        assert!(host.take().is_empty());
    }

    #[test]
    fn highlight_color_follows_cursor() {
        let host = RecordingBridge::default();
        let mut tinted = option("b", false);
        tinted.color = Some(Rgba::new(1, 2, 3, 4));
        let mut menu = menu_with(vec![option("a", false), tinted], &host);
        assert_eq!(menu.highlight_color(), None);
        menu.navigate(Direction::Next, 0.0, &host);
        assert_eq!(menu.highlight_color(), Some(Rgba::new(1, 2, 3, 4)));
    }
}
