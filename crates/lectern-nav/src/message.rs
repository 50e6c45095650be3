//! Cross-frame messages
//!
//! Content loaded into the frame posts `{ type: "..." }` payloads to the
//! host. Only two type values are recognized; everything else, including
//! payloads of unexpected shape, maps to `Unknown`. Sender identity is not
//! part of the contract and is never checked.

use serde_json::Value;

/// Message type hiding the API test console nav entry
pub const HIDE_API_TEST_NAV: &str = "hideApiTestConsoleNav";

/// Message type hiding the load test console nav entry
pub const HIDE_LOAD_TEST_NAV: &str = "hideLoadTestConsoleNav";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMessage {
    /// Hide the API test console nav entry
    HideApiTestNav,
    /// Hide the load test console nav entry
    HideLoadTestNav,
    /// Unrecognized payload, ignored by contract
    Unknown,
}

impl FrameMessage {
    /// Classify a payload by its `type` field
    pub fn parse(payload: &Value) -> Self {
        match payload.get("type").and_then(Value::as_str) {
            Some(HIDE_API_TEST_NAV) => FrameMessage::HideApiTestNav,
            Some(HIDE_LOAD_TEST_NAV) => FrameMessage::HideLoadTestNav,
            _ => FrameMessage::Unknown,
        }
    }

    /// Classify a raw JSON payload; unparseable input is `Unknown`
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(payload) => Self::parse(&payload),
            Err(_) => FrameMessage::Unknown,
        }
    }

    /// Wire name of the message type, if it has one
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            FrameMessage::HideApiTestNav => Some(HIDE_API_TEST_NAV),
            FrameMessage::HideLoadTestNav => Some(HIDE_LOAD_TEST_NAV),
            FrameMessage::Unknown => None,
        }
    }
}

impl std::fmt::Display for FrameMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name().unwrap_or("unknown"))
    }
}
