//! Visual state derived from the HUD, shared by every panel's renderer and
//! by the page-level style sync.

use ratzilla::ratatui::style::{Color, Modifier, Style};

use crate::color::Rgba;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Highlighted world option's color, else the default tint.
    pub tint: Rgba,
    /// Interact key, or the busy glyph during a cooldown.
    pub key_glyph: String,
    pub dimmed: bool,
}

impl Theme {
    pub fn accent(&self) -> Color {
        if self.dimmed {
            Color::DarkGray
        } else {
            self.tint.into()
        }
    }

    pub fn active_row(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn previous_row(&self) -> Style {
        Style::default().fg(self.accent()).add_modifier(Modifier::DIM)
    }

    pub fn idle_row(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn disabled_row(&self) -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    }
}

/// Styles applied to the page `<body>` itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStyle {
    pub visible: bool,
    pub opacity: f64,
    /// Value for the `--theme-color` custom property.
    pub theme_color: String,
}

impl PageStyle {
    pub fn visibility(&self) -> &'static str {
        if self.visible {
            "visible"
        } else {
            "hidden"
        }
    }

    pub fn opacity_css(&self) -> String {
        self.opacity.to_string()
    }
}
