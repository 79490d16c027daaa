//! Wire messages for the chat socket channel.

use serde::{Deserialize, Serialize};

use crate::client::CreatedArtifact;

/// Messages received from chat clients over the socket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// A user chat message.
    ChatMessage {
        message: String,
        #[serde(default)]
        user_id: Option<String>,
    },
}

/// Messages sent to chat clients over the socket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Reply to a chat message, with any artifacts already created.
    ChatResponse {
        response: String,
        artifacts: Vec<CreatedArtifact>,
    },

    /// Processing failed.
    ChatError { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_use_the_socket_tags() {
        let parsed: ClientMessage =
            serde_json::from_str(r#"{"type": "chat_message", "message": "hi"}"#).unwrap();

        let ClientMessage::ChatMessage { message, user_id } = parsed;
        assert_eq!(message, "hi");
        assert_eq!(user_id, None);
    }

    #[test]
    fn responses_serialize_with_the_socket_tags() {
        let reply = ServerMessage::ChatResponse {
            response: "done".to_string(),
            artifacts: vec![CreatedArtifact {
                id: "t1".to_string(),
                url: "/artifacts/t1.html".to_string(),
                preview_url: None,
            }],
        };

        let json = serde_json::to_string(&reply).unwrap();

        assert!(json.contains(r#""type":"chat_response""#));
        assert!(json.contains(r#""artifacts":[{"id":"t1""#));
    }

    #[test]
    fn errors_serialize_with_the_socket_tags() {
        let reply = ServerMessage::ChatError {
            error: "boom".to_string(),
        };

        let json = serde_json::to_string(&reply).unwrap();

        assert!(json.contains(r#""type":"chat_error""#));
        assert!(json.contains("boom"));
    }
}
