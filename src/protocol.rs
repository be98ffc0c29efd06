use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    SetUsername {
        username: String,
    },
    Draw(Stroke),
    /// Only honoured when sent by the current drawer
    Clear,
    /// Plain chat, or a guess when it matches the secret word
    ChatMessage {
        text: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Sent once to a new connection so it can tell whether it is the drawer
    Welcome {
        connection_id: ConnectionId,
    },
    CurrentDrawer {
        connection_id: ConnectionId,
    },
    /// Drawer-only disclosure of the secret word
    Word {
        word: String,
    },
    /// Placeholder shown to guessers
    DisplayWord {
        hint: String,
    },
    Timer {
        seconds: u32,
    },
    Draw(Stroke),
    Clear,
    ChatMessage {
        text: String,
    },
    Scores {
        scores: Vec<ScoreEntry>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_client_messages() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"t":"set_username","username":"Alice"}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::SetUsername {
                username: "Alice".to_string()
            }
        );

        let msg: ClientMessage = serde_json::from_str(r#"{"t":"clear"}"#).unwrap();
        assert_eq!(msg, ClientMessage::Clear);

        let msg: ClientMessage =
            serde_json::from_str(r#"{"t":"chat_message","text":"katze"}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::ChatMessage {
                text: "katze".to_string()
            }
        );
    }

    #[test]
    fn test_parse_draw_message() {
        let json = r##"{"t":"draw","lastX":10,"lastY":20,"x":11,"y":21,"color":"#000000","thickness":3}"##;
        match serde_json::from_str::<ClientMessage>(json).unwrap() {
            ClientMessage::Draw(stroke) => {
                assert_eq!(stroke["lastX"], 10);
                assert_eq!(stroke["y"], 21);
                assert_eq!(stroke["thickness"], 3);
                assert!(!stroke.contains_key("t"));
            }
            other => panic!("Expected Draw, got {:?}", other),
        }
    }

    #[test]
    fn test_draw_relayed_verbatim() {
        // Browsers send the slider value as a string; unknown fields must survive too
        let json = r##"{"t":"draw","lastX":1,"lastY":2,"x":3,"y":4,"color":"#00ff00","thickness":"5","tool":"eraser"}"##;
        let stroke = match serde_json::from_str::<ClientMessage>(json).unwrap() {
            ClientMessage::Draw(stroke) => stroke,
            other => panic!("Expected Draw, got {:?}", other),
        };

        let relayed = serde_json::to_value(ServerMessage::Draw(stroke)).unwrap();
        let original: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(relayed, original);
        assert_eq!(relayed["thickness"], "5");
        assert_eq!(relayed["tool"], "eraser");
    }

    #[test]
    fn test_reject_unknown_message() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"t":"become_drawer"}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>(r#"{"t":"chat_message"}"#).is_err());
    }

    #[test]
    fn test_server_message_shape() {
        let json = serde_json::to_value(ServerMessage::Timer { seconds: 42 }).unwrap();
        assert_eq!(json["t"], "timer");
        assert_eq!(json["seconds"], 42);

        let json = serde_json::to_value(ServerMessage::Scores {
            scores: vec![ScoreEntry {
                username: "Bob".to_string(),
                score: 1,
            }],
        })
        .unwrap();
        assert_eq!(json["t"], "scores");
        assert_eq!(json["scores"][0]["username"], "Bob");
        assert_eq!(json["scores"][0]["score"], 1);

        let json = serde_json::to_value(ServerMessage::Clear).unwrap();
        assert_eq!(json, serde_json::json!({"t": "clear"}));
    }
}
