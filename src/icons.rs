//! Icon names to terminal glyphs.
//!
//! Hosts name icons the FontAwesome way: either a bare name (`"car"`) or a
//! class list (`"fa-solid fa-car"`). Only the icon name matters here.

use std::str::FromStr;

use ratzilla::ratatui::style::Color;

const FALLBACK: &str = "•";

const GLYPHS: &[(&str, &str)] = &[
    ("hand", "✋"),
    ("hand-holding", "✋"),
    ("car", "🚗"),
    ("car-side", "🚗"),
    ("door-open", "🚪"),
    ("door-closed", "🚪"),
    ("box", "📦"),
    ("box-open", "📦"),
    ("user", "👤"),
    ("users", "👥"),
    ("lock", "🔒"),
    ("unlock", "🔓"),
    ("lock-open", "🔓"),
    ("key", "🔑"),
    ("house", "🏠"),
    ("home", "🏠"),
    ("eye", "👁"),
    ("comment", "💬"),
    ("comments", "💬"),
    ("gear", "⚙"),
    ("cog", "⚙"),
    ("wrench", "🔧"),
    ("circle-info", "ℹ"),
    ("info", "ℹ"),
    ("trash", "🗑"),
    ("money-bill", "💵"),
    ("gas-pump", "⛽"),
    ("shop", "🏪"),
    ("store", "🏪"),
    ("phone", "📞"),
    ("hourglass-half", "⧗"),
    ("caret-right", "▸"),
];

const STYLE_CLASSES: &[&str] = &[
    "fw", "solid", "regular", "brands", "light", "duotone", "fas", "far", "fab",
];

/// Icon name with any FontAwesome style/size classes stripped.
pub fn icon_name(icon: &str) -> Option<&str> {
    icon.split_whitespace()
        .map(|class| class.strip_prefix("fa-").unwrap_or(class))
        .filter(|name| !STYLE_CLASSES.contains(name))
        .last()
}

pub fn glyph(icon: Option<&str>) -> &'static str {
    let Some(name) = icon.and_then(icon_name) else {
        return FALLBACK;
    };
    GLYPHS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(FALLBACK)
}

/// Parse a CSS-ish icon color (`"red"`, `"#ff8800"`). Unknown strings are ignored.
pub fn icon_color(color: Option<&str>) -> Option<Color> {
    Color::from_str(color?.trim()).ok()
}
