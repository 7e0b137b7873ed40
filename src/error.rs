//! Error type for the fallible edges of the HUD.
//!
//! Nothing here ever reaches the player: the bootstrap logs and drops every
//! `HudError`. Navigation and hold operations are infallible by construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HudError {
    /// The host sent JSON that does not match the expected payload shape.
    #[error("malformed host message: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("host message data is not JSON")]
    NotJson,

    #[error("unknown host action `{0}`")]
    UnknownAction(String),

    #[error("host action `{0}` is missing its payload")]
    MissingPayload(&'static str),

    #[error("invalid hud config: {0}")]
    Config(String),

    /// A request to the host could not be built, sent, or read back.
    #[error("host request `{event}` failed: {reason}")]
    Bridge { event: &'static str, reason: String },
}

impl HudError {
    pub fn bridge(event: &'static str, reason: impl Into<String>) -> Self {
        HudError::Bridge {
            event,
            reason: reason.into(),
        }
    }
}
