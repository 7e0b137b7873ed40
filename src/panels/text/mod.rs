//! Text-option picker shown while an interaction is active.

pub mod render;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::bridge::{HostBridge, HostRequest};
use crate::catalog::Interaction;
use crate::input::InputMapping;
use crate::nav::{Direction, NavConfig, NavigableList};
use crate::panels::{MoveTrail, Panel};
use crate::theme::Theme;
use crate::widgets::BADGE_HEIGHT;

pub struct TextPicker {
    interaction: Option<String>,
    list: NavigableList,
    mapping: InputMapping,
    trail: MoveTrail,
}

impl TextPicker {
    pub fn new(nav: NavConfig, mapping: InputMapping) -> Self {
        Self {
            interaction: None,
            list: NavigableList::new(nav),
            mapping,
            trail: MoveTrail::default(),
        }
    }

    /// Show a new interaction, or hide the picker with `None`.
    pub fn set_interaction(&mut self, interaction: Option<Interaction>, host: &dyn HostBridge) {
        self.trail.clear();
        let Some(interaction) = interaction else {
            self.interaction = None;
            self.list.replace(Vec::new(), true);
            return;
        };

        tracing::debug!(
            id = %interaction.id,
            options = interaction.options.len(),
            "interaction updated"
        );
        self.interaction = Some(interaction.id);
        if let Some(index) = self.list.replace(interaction.options, true) {
            host.send(HostRequest::SetCurrentTextOption(index + 1));
        }
    }

    pub fn is_active(&self) -> bool {
        self.interaction.is_some() && !self.list.is_empty()
    }

    #[cfg(test)]
    pub fn interaction_id(&self) -> Option<&str> {
        self.interaction.as_deref()
    }

    pub fn list(&self) -> &NavigableList {
        &self.list
    }

    pub fn trail(&self) -> &MoveTrail {
        &self.trail
    }
}

impl Panel for TextPicker {
    fn input_mapping(&self) -> &InputMapping {
        &self.mapping
    }

    fn navigate(&mut self, direction: Direction, now_ms: f64, host: &dyn HostBridge) -> bool {
        let from = self.list.current_index();
        let Some(index) = self.list.advance(direction) else {
            return false;
        };
        self.trail.record(from, index, now_ms);
        host.send(HostRequest::SetCurrentTextOption(index + 1));
        true
    }

    fn tick(&mut self, _now_ms: f64, _host: &dyn HostBridge) {}

    fn height(&self) -> u16 {
        match self.list.enabled_count() as u16 {
            0 => 0,
            rows => rows.max(BADGE_HEIGHT),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, now_ms: f64) {
        render::render(self, f, area, theme, now_ms);
    }
}

impl Default for TextPicker {
    fn default() -> Self {
        TextPicker::new(NavConfig::PICKER, InputMapping::PICKER)
    }
}
