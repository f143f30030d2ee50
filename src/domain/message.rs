//! Wire-level notification payload
//!
//! The host exposes exactly one inbound API to embedded applications: a
//! one-way notification whose serialized shape is
//! `{"type":"SHARED_MESSAGE","message":<string>}`. The tag and field names are
//! the interoperability contract; embedded applications are free to ignore the
//! payload, and anything that fails to decode is dropped by the receiver.

use serde::{Deserialize, Serialize};

/// Notification sent from the shell to the currently embedded application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Notification {
    #[serde(rename = "SHARED_MESSAGE")]
    SharedMessage { message: String },
}

impl Notification {
    /// Wraps a user message, untrimmed, in the shared-message envelope
    pub fn shared(message: impl Into<String>) -> Self {
        Notification::SharedMessage {
            message: message.into(),
        }
    }

    /// Serializes the notification into its wire form
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decodes a wire payload; `None` for anything of an unrecognized shape
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_shape_is_exact() {
        let encoded = Notification::shared("hello").encode().expect("encodes");
        let value: serde_json::Value = serde_json::from_str(&encoded).expect("valid json");
        assert_eq!(value, json!({ "type": "SHARED_MESSAGE", "message": "hello" }));
    }

    #[test]
    fn message_text_is_not_trimmed() {
        let encoded = Notification::shared("  spaced  ").encode().expect("encodes");
        let value: serde_json::Value = serde_json::from_str(&encoded).expect("valid json");
        assert_eq!(value["message"], "  spaced  ");
    }

    #[test]
    fn decode_round_trip() {
        let note = Notification::shared("hello");
        let raw = note.encode().expect("encodes");
        assert_eq!(Notification::decode(&raw), Some(note));
    }

    #[test]
    fn unrecognized_payloads_decode_to_none() {
        assert_eq!(Notification::decode("not json"), None);
        assert_eq!(Notification::decode(r#"{"type":"OTHER","message":"x"}"#), None);
        assert_eq!(Notification::decode(r#"{"message":"x"}"#), None);
    }
}
