//! Option catalog: the selectable entries supplied by the host.
//!
//! The host sends world options grouped by target type and text options as a
//! flat list. Both are flattened into `Vec<MenuOption>` here; the catalog is
//! always replaced wholesale, never diffed.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::color::Rgba;

/// Identifiers echoed back to the host when an option is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Group key the option arrived under.
    pub kind: String,
    /// 1-based position inside its group, counted before hidden entries are dropped.
    pub id: u32,
}

/// One selectable entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOption {
    pub label: String,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    /// Theme tint while this option is highlighted.
    pub color: Option<Rgba>,
    /// 0 selects immediately.
    pub hold_ms: u32,
    pub disabled: bool,
    pub target: Target,
}

impl MenuOption {
    pub fn requires_hold(&self) -> bool {
        self.hold_ms > 0
    }

    pub fn display_label(&self) -> String {
        if self.requires_hold() {
            format!("{} (hold)", self.label)
        } else {
            self.label.clone()
        }
    }
}

/// Identity of one option instance: the catalog generation it belongs to plus
/// its index. Two refs are equal only if the catalog was not replaced between
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRef {
    pub generation: u64,
    pub index: usize,
}

// ── Wire format ─────────────────────────────────────────────────

/// A field that degrades to "absent" when the host sends the wrong shape,
/// instead of failing the option it belongs to.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Valid(T),
    Invalid(Value),
}

impl<T> Lenient<T> {
    fn into_valid(self, field: &'static str) -> Option<T> {
        match self {
            Lenient::Valid(v) => Some(v),
            Lenient::Invalid(value) => {
                tracing::warn!(field, %value, "ignoring malformed option field");
                None
            }
        }
    }
}

fn lenient<T>(field: Option<Lenient<T>>, name: &'static str) -> Option<T> {
    field.and_then(|f| f.into_valid(name))
}

/// FontAwesome icon: a class string (`"fa-solid fa-car"`) or a
/// `[prefix, name]` pair (`["fas", "car"]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IconProp {
    Name(String),
    Parts(Vec<String>),
}

impl IconProp {
    fn into_name(self) -> Option<String> {
        match self {
            IconProp::Name(name) => Some(name),
            IconProp::Parts(mut parts) => parts.pop(),
        }
    }
}

fn icon(field: Option<Lenient<IconProp>>) -> Option<String> {
    lenient(field, "icon").and_then(IconProp::into_name)
}

/// A world option as sent by the host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionData {
    pub label: String,
    pub icon: Option<Lenient<IconProp>>,
    pub icon_color: Option<Lenient<String>>,
    pub color: Option<Lenient<Rgba>>,
    /// Anything that is not a positive number means "no hold".
    pub hold_time: Option<Value>,
    pub hide: bool,
    pub disabled: bool,
}

impl OptionData {
    pub fn hold_ms(&self) -> u32 {
        match self.hold_time.as_ref().and_then(Value::as_f64) {
            Some(ms) if ms.is_finite() && ms > 0.0 => ms.round().min(u32::MAX as f64) as u32,
            _ => 0,
        }
    }

    fn into_option(self, target: Target) -> MenuOption {
        let hold_ms = self.hold_ms();
        MenuOption {
            label: self.label,
            icon: icon(self.icon),
            icon_color: lenient(self.icon_color, "iconColor"),
            color: lenient(self.color, "color"),
            hold_ms,
            disabled: self.disabled,
            target,
        }
    }
}

/// World options keyed by target type, in the order the host listed them.
///
/// Lua encodes an empty table as `[]`, so anything that is not a map decodes
/// into `Other` and flattens to nothing. Entries are decoded one by one: a
/// malformed entry is dropped on its own and the rest of the catalog stays.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OptionGroups {
    Keyed(IndexMap<String, Value>),
    Other(Value),
}

impl Default for OptionGroups {
    fn default() -> Self {
        OptionGroups::Keyed(IndexMap::new())
    }
}

impl OptionGroups {
    pub fn into_options(self) -> Vec<MenuOption> {
        match self {
            OptionGroups::Keyed(groups) => groups
                .into_iter()
                .flat_map(|(kind, entries)| decode_group(kind, entries))
                .collect(),
            OptionGroups::Other(value) => {
                if !matches!(&value, Value::Array(items) if items.is_empty()) {
                    tracing::debug!(%value, "option groups are not a map, treating as empty");
                }
                Vec::new()
            }
        }
    }
}

fn decode_group(kind: String, entries: Value) -> Vec<MenuOption> {
    let entries = match entries {
        Value::Array(entries) => entries,
        other => {
            tracing::warn!(group = %kind, value = %other, "option group is not a list");
            return Vec::new();
        }
    };
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let id = i as u32 + 1;
            match serde_json::from_value::<OptionData>(entry) {
                Ok(data) if data.hide => None,
                Ok(data) => Some(data.into_option(Target {
                    kind: kind.clone(),
                    id,
                })),
                Err(err) => {
                    tracing::warn!(group = %kind, id, %err, "dropping malformed option");
                    None
                }
            }
        })
        .collect()
}

/// A text option inside an active interaction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextOptionData {
    pub text: String,
    pub icon: Option<Lenient<IconProp>>,
    pub disable: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum InteractionId {
    Text(String),
    Number(serde_json::Number),
}

impl Default for InteractionId {
    fn default() -> Self {
        InteractionId::Text(String::new())
    }
}

/// `updateInteraction` payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InteractionData {
    id: InteractionId,
    options: Vec<TextOptionData>,
}

/// An active interaction, flattened for the text picker.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub id: String,
    pub options: Vec<MenuOption>,
}

impl From<InteractionData> for Interaction {
    fn from(data: InteractionData) -> Self {
        let id = match data.id {
            InteractionId::Text(s) => s,
            InteractionId::Number(n) => n.to_string(),
        };
        let options = data
            .options
            .into_iter()
            .enumerate()
            .map(|(i, opt)| MenuOption {
                label: opt.text,
                icon: icon(opt.icon),
                icon_color: None,
                color: None,
                hold_ms: 0,
                disabled: opt.disable.unwrap_or(false),
                target: Target {
                    kind: id.clone(),
                    id: i as u32 + 1,
                },
            })
            .collect();
        Interaction { id, options }
    }
}

#[cfg(test)]
pub(crate) fn option(label: &str, disabled: bool) -> MenuOption {
    MenuOption {
        label: label.to_string(),
        icon: None,
        icon_color: None,
        color: None,
        hold_ms: 0,
        disabled,
        target: Target {
            kind: "test".to_string(),
            id: 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_flatten_in_host_order() {
        let json = r#"{
            "vehicle": [{"label": "Lock"}, {"label": "Trunk", "holdTime": 800}],
            "ped": [{"label": "Talk", "icon": "comment"}]
        }"#;
        let groups: OptionGroups = serde_json::from_str(json).unwrap();
        let options = groups.into_options();

        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Lock", "Trunk", "Talk"]);
        assert_eq!(options[1].target, Target { kind: "vehicle".into(), id: 2 });
        assert_eq!(options[1].hold_ms, 800);
        assert_eq!(options[2].target, Target { kind: "ped".into(), id: 1 });
        assert_eq!(options[2].icon.as_deref(), Some("comment"));
    }

    #[test]
    fn hidden_options_keep_original_target_ids() {
        let json = r#"{"door": [{"label": "A", "hide": true}, {"label": "B"}]}"#;
        let groups: OptionGroups = serde_json::from_str(json).unwrap();
        let options = groups.into_options();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "B");
        assert_eq!(options[0].target.id, 2);
    }

    #[test]
    fn empty_lua_table_is_empty_catalog() {
        let groups: OptionGroups = serde_json::from_str("[]").unwrap();
        assert!(groups.into_options().is_empty());
    }

    #[test]
    fn bad_color_only_affects_its_own_row() {
        let json = r#"{
            "door": [{"label": "Open"}, {"label": "Lock", "color": [255, 0, 0]}],
            "ped": [{"label": "Talk", "iconColor": 7}]
        }"#;
        let groups: OptionGroups = serde_json::from_str(json).unwrap();
        let options = groups.into_options();

        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Open", "Lock", "Talk"]);
        assert_eq!(options[1].color, None);
        assert_eq!(options[2].icon_color, None);
    }

    #[test]
    fn malformed_entry_is_dropped_alone() {
        let json = r#"{
            "door": [{"label": 12}, {"label": "Lock", "color": [1, 2, 3, 4]}],
            "trunk": {"label": "not a list"},
            "ped": [{"label": "Talk"}]
        }"#;
        let groups: OptionGroups = serde_json::from_str(json).unwrap();
        let options = groups.into_options();

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Lock");
        assert_eq!(options[0].target, Target { kind: "door".into(), id: 2 });
        assert_eq!(options[0].color, Some(Rgba::new(1, 2, 3, 4)));
        assert_eq!(options[1].target, Target { kind: "ped".into(), id: 1 });
    }

    #[test]
    fn icon_accepts_prefix_name_pair() {
        let json = r#"{
            "id": "atm",
            "options": [
                {"text": "a", "icon": ["fas", "house"]},
                {"text": "b", "icon": "fa-solid fa-car"},
                {"text": "c", "icon": {"iconName": "house"}}
            ]
        }"#;
        let data: InteractionData = serde_json::from_str(json).unwrap();
        let interaction = Interaction::from(data);
        assert_eq!(interaction.options.len(), 3);
        assert_eq!(interaction.options[0].icon.as_deref(), Some("house"));
        assert_eq!(interaction.options[1].icon.as_deref(), Some("fa-solid fa-car"));
        assert_eq!(interaction.options[2].icon, None);
    }

    #[test]
    fn hold_time_is_lenient() {
        let cases = [
            (r#"{"holdTime": 1500}"#, 1500),
            (r#"{"holdTime": 0}"#, 0),
            (r#"{"holdTime": -20}"#, 0),
            (r#"{"holdTime": "soon"}"#, 0),
            (r#"{"holdTime": null}"#, 0),
            (r#"{}"#, 0),
        ];
        for (json, expected) in cases {
            let data: OptionData = serde_json::from_str(json).unwrap();
            assert_eq!(data.hold_ms(), expected, "{json}");
        }
    }

    #[test]
    fn hold_label_suffix() {
        let mut opt = option("Search", false);
        assert_eq!(opt.display_label(), "Search");
        opt.hold_ms = 500;
        assert_eq!(opt.display_label(), "Search (hold)");
    }

    #[test]
    fn interaction_converts_text_options() {
        let json = r#"{
            "id": 42,
            "options": [
                {"text": "do something", "icon": "house", "disable": true},
                {"text": "world2", "icon": "house"}
            ]
        }"#;
        let data: InteractionData = serde_json::from_str(json).unwrap();
        let interaction = Interaction::from(data);
        assert_eq!(interaction.id, "42");
        assert_eq!(interaction.options.len(), 2);
        assert!(interaction.options[0].disabled);
        assert!(!interaction.options[1].disabled);
        assert_eq!(interaction.options[1].label, "world2");
        assert_eq!(interaction.options[1].target.id, 2);
    }
}
