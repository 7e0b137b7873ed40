//! Shared input handling: normalized input events and per-panel mappings.
//!
//! This module knows nothing about the DOM. The bootstrap turns keyboard and
//! wheel events into [`InputEvent`]s; each panel's [`InputMapping`] decides
//! which of them move its cursor, and in which direction.

use serde::Deserialize;

use crate::nav::Direction;

/// All navigation inputs, normalized from keyboard and wheel sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyUp,
    KeyDown,
    ScrollUp,
    ScrollDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputMapping {
    pub key_up: Option<Direction>,
    pub key_down: Option<Direction>,
    pub scroll_up: Option<Direction>,
    pub scroll_down: Option<Direction>,
    /// How a wheel event with `deltaY == 0` is classified.
    #[serde(default)]
    pub flat_wheel_scrolls_down: bool,
}

impl InputMapping {
    /// World menu: wheel only, `deltaY > 0` is down.
    pub const WORLD: InputMapping = InputMapping {
        key_up: None,
        key_down: None,
        scroll_up: Some(Direction::Previous),
        scroll_down: Some(Direction::Next),
        flat_wheel_scrolls_down: false,
    };

    /// Text picker: arrows and wheel, `deltaY < 0` is up.
    pub const PICKER: InputMapping = InputMapping {
        key_up: Some(Direction::Previous),
        key_down: Some(Direction::Next),
        scroll_up: Some(Direction::Previous),
        scroll_down: Some(Direction::Next),
        flat_wheel_scrolls_down: true,
    };

    pub fn direction(&self, event: InputEvent) -> Option<Direction> {
        match event {
            InputEvent::KeyUp => self.key_up,
            InputEvent::KeyDown => self.key_down,
            InputEvent::ScrollUp => self.scroll_up,
            InputEvent::ScrollDown => self.scroll_down,
        }
    }

    /// Classify a raw wheel `deltaY`.
    pub fn wheel(&self, delta_y: f64) -> InputEvent {
        let down = if delta_y == 0.0 {
            self.flat_wheel_scrolls_down
        } else {
            delta_y > 0.0
        };
        if down {
            InputEvent::ScrollDown
        } else {
            InputEvent::ScrollUp
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_ignores_arrow_keys() {
        let m = InputMapping::WORLD;
        assert_eq!(m.direction(InputEvent::KeyUp), None);
        assert_eq!(m.direction(InputEvent::KeyDown), None);
        assert_eq!(m.direction(InputEvent::ScrollDown), Some(Direction::Next));
        assert_eq!(m.direction(InputEvent::ScrollUp), Some(Direction::Previous));
    }

    #[test]
    fn picker_maps_arrows_and_wheel() {
        let m = InputMapping::PICKER;
        assert_eq!(m.direction(InputEvent::KeyUp), Some(Direction::Previous));
        assert_eq!(m.direction(InputEvent::KeyDown), Some(Direction::Next));
        assert_eq!(m.direction(InputEvent::ScrollUp), Some(Direction::Previous));
        assert_eq!(m.direction(InputEvent::ScrollDown), Some(Direction::Next));
    }

    #[test]
    fn flat_wheel_classification_differs_per_mapping() {
        assert_eq!(InputMapping::WORLD.wheel(0.0), InputEvent::ScrollUp);
        assert_eq!(InputMapping::PICKER.wheel(0.0), InputEvent::ScrollDown);
        for m in [InputMapping::WORLD, InputMapping::PICKER] {
            assert_eq!(m.wheel(120.0), InputEvent::ScrollDown);
            assert_eq!(m.wheel(-3.0), InputEvent::ScrollUp);
        }
    }

    #[test]
    fn mapping_deserializes_from_partial_config() {
        let m: InputMapping = serde_json::from_str(r#"{"keyUp": "previous"}"#).unwrap();
        assert_eq!(m.key_up, Some(Direction::Previous));
        // unlisted inputs stay unmapped
        assert_eq!(m.scroll_down, None);
        assert_eq!(m.key_down, None);
        assert!(!m.flat_wheel_scrolls_down);
    }
}
