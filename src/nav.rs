//! Navigable list: cyclic cursor movement over a catalog.
//!
//! Both pickers use this one component. They differ only in [`NavConfig`]:
//! the world menu lets the cursor rest on disabled entries, the text picker
//! skips them and moves off a disabled first entry when a catalog arrives.

use serde::Deserialize;

use crate::catalog::{MenuOption, OptionRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    pub skip_disabled: bool,
    pub auto_advance_on_load: bool,
}

impl NavConfig {
    pub const WORLD: NavConfig = NavConfig {
        skip_disabled: false,
        auto_advance_on_load: false,
    };

    pub const PICKER: NavConfig = NavConfig {
        skip_disabled: true,
        auto_advance_on_load: true,
    };
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig::WORLD
    }
}

#[derive(Debug)]
pub struct NavigableList {
    config: NavConfig,
    options: Vec<MenuOption>,
    current: Option<usize>,
    generation: u64,
}

impl NavigableList {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            options: Vec::new(),
            current: None,
            generation: 0,
        }
    }

    /// Replace the catalog.
    ///
    /// Returns the settled index when the cursor was (re)placed, so the caller
    /// can report it. Returns `None` when the catalog is empty or the previous
    /// index was kept.
    pub fn replace(&mut self, options: Vec<MenuOption>, reset: bool) -> Option<usize> {
        self.generation += 1;
        self.options = options;

        if self.options.is_empty() {
            self.current = None;
            return None;
        }

        let still_valid = self.current.is_some_and(|i| i < self.options.len());
        if still_valid && !reset {
            return None;
        }

        self.current = Some(0);
        if self.config.auto_advance_on_load && self.options[0].disabled {
            if let Some(found) = self.seek(0, Direction::Next, true) {
                self.current = Some(found);
            }
        }
        self.current
    }

    /// Move the cursor one step. Returns the new index, or `None` when nothing
    /// moved (empty catalog, or every candidate disabled in skip mode).
    pub fn advance(&mut self, direction: Direction) -> Option<usize> {
        let from = self.current?;
        let next = self.seek(from, direction, self.config.skip_disabled)?;
        self.current = Some(next);
        Some(next)
    }

    /// Try at most `len` candidates after `from`. Without skipping, the first
    /// candidate always wins.
    fn seek(&self, from: usize, direction: Direction, skip_disabled: bool) -> Option<usize> {
        let len = self.options.len();
        if len == 0 {
            return None;
        }
        let mut candidate = from;
        for _ in 0..len {
            candidate = direction.step(candidate, len);
            if !skip_disabled || !self.options[candidate].disabled {
                return Some(candidate);
            }
        }
        None
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_option(&self) -> Option<&MenuOption> {
        self.options.get(self.current?)
    }

    pub fn current_ref(&self) -> Option<OptionRef> {
        self.current.map(|index| OptionRef {
            generation: self.generation,
            index,
        })
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn enabled_count(&self) -> usize {
        self.options.iter().filter(|o| !o.disabled).count()
    }
}
