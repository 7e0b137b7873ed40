//! Inbound host messages.
//!
//! The host posts `{ action, value }` envelopes to the page (some scripts use
//! `data` instead of `value`). Boolean payloads follow JavaScript truthiness.

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::{Interaction, InteractionData, MenuOption, OptionGroups};
use crate::color::Rgba;
use crate::error::HudError;

#[derive(Debug, Clone, PartialEq)]
pub enum HostMessage {
    Visible(bool),
    SetOptions { options: Vec<MenuOption>, reset: bool },
    /// `None` hides the text picker.
    UpdateInteraction(Option<Interaction>),
    Interact,
    Release,
    SetColor(Rgba),
    SetCooldown(bool),
    Pause(bool),
}

#[derive(Deserialize)]
struct Envelope {
    action: String,
    #[serde(default, alias = "data")]
    value: Option<Value>,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct OptionsPayload {
    options: Option<OptionGroups>,
    reset_index: Value,
}

impl HostMessage {
    pub fn decode(raw: &str) -> Result<HostMessage, HudError> {
        let envelope: Envelope = serde_json::from_str(raw)?;
        Self::from_envelope(envelope)
    }

    fn from_envelope(envelope: Envelope) -> Result<HostMessage, HudError> {
        let value = envelope.value;
        let message = match envelope.action.as_str() {
            "visible" | "setVisible" => HostMessage::Visible(truthy(value.as_ref())),
            "setOptions" => {
                let payload: OptionsPayload = match value {
                    Some(Value::Null) | None => OptionsPayload::default(),
                    Some(v) => serde_json::from_value(v)?,
                };
                HostMessage::SetOptions {
                    options: payload
                        .options
                        .map(OptionGroups::into_options)
                        .unwrap_or_default(),
                    reset: truthy(Some(&payload.reset_index)),
                }
            }
            "updateInteraction" => match value {
                Some(Value::Null) | None => HostMessage::UpdateInteraction(None),
                Some(v) => {
                    let data: InteractionData = serde_json::from_value(v)?;
                    HostMessage::UpdateInteraction(Some(data.into()))
                }
            },
            "interact" => HostMessage::Interact,
            "release" => HostMessage::Release,
            "setColor" => {
                let v = value.ok_or(HudError::MissingPayload("setColor"))?;
                HostMessage::SetColor(serde_json::from_value(v)?)
            }
            "setCooldown" => HostMessage::SetCooldown(truthy(value.as_ref())),
            "pause" => HostMessage::Pause(truthy(value.as_ref())),
            other => return Err(HudError::UnknownAction(other.to_string())),
        };
        Ok(message)
    }
}

/// JavaScript truthiness of a JSON value; a missing value is falsy.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_accepts_both_spellings_and_payload_keys() {
        assert_eq!(
            HostMessage::decode(r#"{"action":"visible","value":true}"#).unwrap(),
            HostMessage::Visible(true)
        );
        assert_eq!(
            HostMessage::decode(r#"{"action":"setVisible","data":true}"#).unwrap(),
            HostMessage::Visible(true)
        );
        assert_eq!(
            HostMessage::decode(r#"{"action":"visible"}"#).unwrap(),
            HostMessage::Visible(false)
        );
    }

    #[test]
    fn set_options_flattens_and_reads_reset_flag() {
        let raw = r#"{
            "action": "setOptions",
            "value": {
                "options": {"door": [{"label": "Open", "holdTime": 750}]},
                "resetIndex": true
            }
        }"#;
        let msg = HostMessage::decode(raw).unwrap();
        let HostMessage::SetOptions { options, reset } = msg else {
            panic!("expected SetOptions");
        };
        assert!(reset);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "Open");
        assert_eq!(options[0].hold_ms, 750);
    }

    #[test]
    fn set_options_without_options_is_empty() {
        let msg = HostMessage::decode(r#"{"action":"setOptions","value":{}}"#).unwrap();
        assert_eq!(
            msg,
            HostMessage::SetOptions {
                options: Vec::new(),
                reset: false
            }
        );
    }

    #[test]
    fn update_interaction_null_hides_picker() {
        assert_eq!(
            HostMessage::decode(r#"{"action":"updateInteraction","data":null}"#).unwrap(),
            HostMessage::UpdateInteraction(None)
        );
    }

    #[test]
    fn update_interaction_decodes_options() {
        let raw = r#"{"action":"updateInteraction","data":{"id":"123123",
            "options":[{"text":"a","disable":true},{"text":"b"}]}}"#;
        let msg = HostMessage::decode(raw).unwrap();
        let HostMessage::UpdateInteraction(Some(interaction)) = msg else {
            panic!("expected an interaction");
        };
        assert_eq!(interaction.id, "123123");
        assert_eq!(interaction.options.len(), 2);
        assert!(interaction.options[0].disabled);
    }

    #[test]
    fn malformed_option_keeps_rest_of_catalog() {
        let raw = r#"{"action":"setOptions","value":{"options":{
            "door":[{"label":"Open"},{"label":"Lock","color":[255,0,0]}],
            "ped":[{"label":"Talk"}]
        }}}"#;
        let msg = HostMessage::decode(raw).unwrap();
        let HostMessage::SetOptions { options, .. } = msg else {
            panic!("expected SetOptions");
        };
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn update_interaction_accepts_icon_pairs() {
        let raw = r#"{"action":"updateInteraction","value":{"id":"atm",
            "options":[{"text":"a","icon":["fas","house"]}]}}"#;
        let msg = HostMessage::decode(raw).unwrap();
        let HostMessage::UpdateInteraction(Some(interaction)) = msg else {
            panic!("expected an interaction");
        };
        assert_eq!(interaction.options[0].icon.as_deref(), Some("house"));
    }

    #[test]
    fn set_color_decodes_each_shape() {
        let expected = HostMessage::SetColor(Rgba::new(28, 126, 214, 166));
        for raw in [
            r#"{"action":"setColor","value":[28,126,214,166]}"#,
            r#"{"action":"setColor","value":{"r":28,"g":126,"b":214,"a":166}}"#,
            r#"{"action":"setColor","data":{"x":28,"y":126,"z":214,"w":166}}"#,
        ] {
            assert_eq!(HostMessage::decode(raw).unwrap(), expected, "{raw}");
        }
    }

    #[test]
    fn set_color_without_payload_is_an_error() {
        let err = HostMessage::decode(r#"{"action":"setColor"}"#).unwrap_err();
        assert!(matches!(err, HudError::MissingPayload("setColor")));
    }

    #[test]
    fn unknown_action_is_reported() {
        let err = HostMessage::decode(r#"{"action":"dance"}"#).unwrap_err();
        assert!(matches!(err, HudError::UnknownAction(a) if a == "dance"));
    }

    #[test]
    fn bare_actions() {
        assert_eq!(
            HostMessage::decode(r#"{"action":"interact"}"#).unwrap(),
            HostMessage::Interact
        );
        assert_eq!(
            HostMessage::decode(r#"{"action":"release"}"#).unwrap(),
            HostMessage::Release
        );
        assert_eq!(
            HostMessage::decode(r#"{"action":"pause","value":1}"#).unwrap(),
            HostMessage::Pause(true)
        );
        assert_eq!(
            HostMessage::decode(r#"{"action":"setCooldown","value":0}"#).unwrap(),
            HostMessage::SetCooldown(false)
        );
    }

    #[test]
    fn truthiness_follows_javascript() {
        assert!(!truthy(None));
        assert!(!truthy(Some(&Value::Null)));
        assert!(!truthy(Some(&serde_json::json!(""))));
        assert!(!truthy(Some(&serde_json::json!(0))));
        assert!(truthy(Some(&serde_json::json!("yes"))));
        assert!(truthy(Some(&serde_json::json!([]))));
        assert!(truthy(Some(&serde_json::json!({}))));
    }
}
