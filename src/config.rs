//! HUD configuration.
//!
//! The host page may embed `<script id="hud-config" type="application/json">`
//! with any subset of these fields; everything missing keeps its default.

use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::color::Rgba;
use crate::error::HudError;
use crate::input::InputMapping;
use crate::nav::NavConfig;

/// Element id of the inline config block.
pub const CONFIG_ELEMENT_ID: &str = "hud-config";

/// Resource name used when neither the config nor the page provides one.
pub const DEFAULT_RESOURCE: &str = "sleepless_interact";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HudConfig {
    /// NUI resource the bridge posts to. `None` asks the page.
    pub resource_name: Option<String>,
    pub interact_key: String,
    /// Shown in place of the interact key while the host reports a cooldown.
    pub busy_glyph: String,
    pub cooldown_opacity: f64,
    pub default_color: Rgba,
    pub log_level: String,
    pub world_input: InputMapping,
    pub picker_input: InputMapping,
    pub world_nav: NavConfig,
    pub picker_nav: NavConfig,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            resource_name: None,
            interact_key: "E".to_string(),
            busy_glyph: "⧗".to_string(),
            cooldown_opacity: 0.3,
            default_color: Rgba::new(28, 126, 214, 166),
            log_level: "info".to_string(),
            world_input: InputMapping::WORLD,
            picker_input: InputMapping::PICKER,
            world_nav: NavConfig::WORLD,
            picker_nav: NavConfig::PICKER,
        }
    }
}

impl HudConfig {
    pub fn from_json(raw: &str) -> Result<HudConfig, HudError> {
        serde_json::from_str(raw).map_err(|e| HudError::Config(e.to_string()))
    }

    /// Parse the inline block if there is one; a broken block falls back to
    /// the defaults.
    pub fn load(raw: Option<&str>) -> HudConfig {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return HudConfig::default();
        };
        match HudConfig::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "ignoring hud config");
                HudConfig::default()
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::INFO)
    }

    pub fn resource<'a>(&'a self, page_resource: Option<&'a str>) -> &'a str {
        self.resource_name
            .as_deref()
            .or(page_resource)
            .unwrap_or(DEFAULT_RESOURCE)
    }
}
