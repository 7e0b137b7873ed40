//! The HUD: owns both panels and every page-level flag.
//!
//! Message, input and frame handlers all go through one [`Hud`]; nothing here
//! touches the DOM, so the whole state machine runs under `cargo test`.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::Frame;

use crate::bridge::{HostBridge, HostRequest};
use crate::color::Rgba;
use crate::config::HudConfig;
use crate::input::InputEvent;
use crate::message::HostMessage;
use crate::panels::text::TextPicker;
use crate::panels::world::WorldMenu;
use crate::panels::Panel;
use crate::theme::{PageStyle, Theme};

/// Determine whether a screen width (in columns) should use narrow layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

pub struct Hud {
    config: HudConfig,
    host: Box<dyn HostBridge>,
    world: WorldMenu,
    picker: TextPicker,
    visible: bool,
    paused: bool,
    cooldown: bool,
    default_tint: Rgba,
    now_ms: f64,
}

impl Hud {
    pub fn new(config: HudConfig, host: Box<dyn HostBridge>) -> Self {
        Self {
            world: WorldMenu::new(config.world_nav, config.world_input),
            picker: TextPicker::new(config.picker_nav, config.picker_input),
            default_tint: config.default_color,
            config,
            host,
            visible: false,
            paused: false,
            cooldown: false,
            now_ms: 0.0,
        }
    }

    /// Tell the host the page is ready for messages.
    pub fn announce_ready(&self) {
        self.host.send(HostRequest::Load);
    }

    pub fn apply(&mut self, message: HostMessage) {
        let host = self.host.as_ref();
        match message {
            HostMessage::Visible(visible) => self.visible = visible,
            HostMessage::SetOptions { options, reset } => {
                tracing::debug!(count = options.len(), reset, "options replaced");
                self.world.set_options(options, reset, host);
            }
            HostMessage::UpdateInteraction(interaction) => {
                self.picker.set_interaction(interaction, host);
            }
            HostMessage::Interact => self.world.interact(self.now_ms, host),
            HostMessage::Release => {
                self.world.release();
            }
            HostMessage::SetColor(color) => self.default_tint = color,
            HostMessage::SetCooldown(cooldown) => self.cooldown = cooldown,
            HostMessage::Pause(paused) => self.paused = paused,
        }
    }

    /// Route an input to the active panel. Returns true if the cursor moved.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if self.paused {
            return false;
        }
        let host = self.host.as_ref();
        if self.picker.is_active() {
            route(&mut self.picker, event, self.now_ms, host)
        } else {
            route(&mut self.world, event, self.now_ms, host)
        }
    }

    /// Classify a raw wheel delta with the active panel's mapping.
    pub fn handle_wheel(&mut self, delta_y: f64) -> bool {
        let event = if self.picker.is_active() {
            self.picker.input_mapping().wheel(delta_y)
        } else {
            self.world.input_mapping().wheel(delta_y)
        };
        self.handle_input(event)
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        let host = self.host.as_ref();
        self.world.tick(now_ms, host);
        self.picker.tick(now_ms, host);
    }

    pub fn theme(&self) -> Theme {
        let tint = if self.picker.is_active() {
            self.default_tint
        } else {
            self.world.highlight_color().unwrap_or(self.default_tint)
        };
        let key_glyph = if self.cooldown {
            self.config.busy_glyph.clone()
        } else {
            self.config.interact_key.clone()
        };
        Theme {
            tint,
            key_glyph,
            dimmed: self.cooldown,
        }
    }

    pub fn page_style(&self) -> PageStyle {
        PageStyle {
            visible: self.visible,
            opacity: if self.cooldown {
                self.config.cooldown_opacity
            } else {
                1.0
            },
            theme_color: self.theme().tint.to_css(),
        }
    }

    pub fn render(&self, f: &mut Frame) {
        if !self.visible {
            return;
        }
        let theme = self.theme();
        let world_height = if self.world.list().is_empty() {
            0
        } else {
            self.world.height()
        };
        let picker_height = if self.picker.is_active() {
            self.picker.height()
        } else {
            0
        };
        if world_height + picker_height == 0 {
            return;
        }

        let gap = u16::from(world_height > 0 && picker_height > 0);
        let area = overlay_area(f.area(), world_height + gap + picker_height);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(world_height),
                Constraint::Length(gap),
                Constraint::Length(picker_height),
            ])
            .split(area);

        self.world.render(f, chunks[0], &theme, self.now_ms);
        self.picker.render(f, chunks[2], &theme, self.now_ms);
    }

    #[cfg(test)]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[cfg(test)]
    pub fn world(&self) -> &WorldMenu {
        &self.world
    }

    #[cfg(test)]
    pub fn picker(&self) -> &TextPicker {
        &self.picker
    }
}

fn route(panel: &mut dyn Panel, event: InputEvent, now_ms: f64, host: &dyn HostBridge) -> bool {
    let Some(direction) = panel.input_mapping().direction(event) else {
        return false;
    };
    panel.navigate(direction, now_ms, host)
}

/// Where the menu sits on screen: right of centre and vertically centred on
/// wide screens, full width on narrow ones.
pub(crate) fn overlay_area(screen: Rect, height: u16) -> Rect {
    let height = height.min(screen.height);
    let y = screen.y + (screen.height - height) / 2;
    if is_narrow_layout(screen.width) {
        let x = screen.x + u16::from(screen.width > 0);
        let width = screen.width.saturating_sub(2);
        Rect::new(x, y, width, height)
    } else {
        let x = screen.x + (u32::from(screen.width) * 55 / 100) as u16;
        let width = (screen.x + screen.width).saturating_sub(x + 1);
        Rect::new(x, y, width, height)
    }
}
