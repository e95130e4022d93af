//! Contact-form payload shared by the client and the relay.

use serde::{Deserialize, Serialize};

/// A contact-form submission. One per request, never persisted.
///
/// `message` is the only required field. The relay substitutes its
/// configured account address for a missing recipient or sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Recipient address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Sender display address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Subject line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Free-text message body.
    pub message: String,
    /// Display name of the person submitting the form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_payload_deserializes() {
        let msg: ContactMessage = serde_json::from_str(r#"{"message":"hello"}"#).unwrap();
        assert_eq!(msg.message, "hello");
        assert_eq!(msg.to, None);
        assert_eq!(msg.from, None);
        assert_eq!(msg.subject, None);
        assert_eq!(msg.name, None);
    }

    #[test]
    fn test_full_payload_roundtrips() {
        let msg = ContactMessage {
            to: Some("owner@example.com".to_string()),
            from: Some("ada@example.com".to_string()),
            subject: Some("hi".to_string()),
            message: "hello".to_string(),
            name: Some("Ada".to_string()),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(serde_json::from_str::<ContactMessage>(&json).unwrap(), msg);
    }

    #[test]
    fn test_absent_fields_are_omitted_when_serializing() {
        let msg = ContactMessage {
            to: None,
            from: None,
            subject: None,
            message: "hello".to_string(),
            name: None,
        };
        assert_eq!(serde_json::to_string(&msg).unwrap(), r#"{"message":"hello"}"#);
    }
}
