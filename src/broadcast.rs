use crate::protocol::ServerMessage;
use crate::types::ConnectionId;

/// A server message together with who should receive it.
///
/// The session publishes these on one broadcast channel; every connection
/// task keeps only the deliveries addressed to it.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    /// Every connection, including the one that caused it
    Broadcast { msg: ServerMessage },
    /// Every connection except `exclude`
    BroadcastExcept {
        exclude: ConnectionId,
        msg: ServerMessage,
    },
    /// Exactly one connection
    SendTo {
        connection_id: ConnectionId,
        msg: ServerMessage,
    },
}

impl Outbound {
    pub fn all(msg: ServerMessage) -> Self {
        Self::Broadcast { msg }
    }

    pub fn all_except(exclude: impl Into<ConnectionId>, msg: ServerMessage) -> Self {
        Self::BroadcastExcept {
            exclude: exclude.into(),
            msg,
        }
    }

    pub fn only(connection_id: impl Into<ConnectionId>, msg: ServerMessage) -> Self {
        Self::SendTo {
            connection_id: connection_id.into(),
            msg,
        }
    }

    pub fn message(&self) -> &ServerMessage {
        match self {
            Self::Broadcast { msg }
            | Self::BroadcastExcept { msg, .. }
            | Self::SendTo { msg, .. } => msg,
        }
    }

    /// The message if `connection_id` is among the recipients
    pub fn message_for(&self, connection_id: &str) -> Option<&ServerMessage> {
        let addressed = match self {
            Self::Broadcast { .. } => true,
            Self::BroadcastExcept { exclude, .. } => exclude != connection_id,
            Self::SendTo {
                connection_id: target,
                ..
            } => target == connection_id,
        };
        addressed.then(|| self.message())
    }
}

/// Everything `connection_id` would receive from a batch of deliveries, in order
pub fn messages_for<'a>(
    outbound: &'a [Outbound],
    connection_id: &'a str,
) -> impl Iterator<Item = &'a ServerMessage> + 'a {
    outbound.iter().filter_map(move |o| o.message_for(connection_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addressing() {
        let all = Outbound::all(ServerMessage::Clear);
        assert!(all.message_for("a").is_some());
        assert!(all.message_for("b").is_some());

        let except = Outbound::all_except("a", ServerMessage::Clear);
        assert!(except.message_for("a").is_none());
        assert!(except.message_for("b").is_some());

        let only = Outbound::only(
            "a",
            ServerMessage::Word {
                word: "Katze".to_string(),
            },
        );
        assert!(only.message_for("a").is_some());
        assert!(only.message_for("b").is_none());
    }

    #[test]
    fn test_messages_for_filters_batch() {
        let batch = vec![
            Outbound::all(ServerMessage::Timer { seconds: 3 }),
            Outbound::only("a", ServerMessage::Clear),
            Outbound::all_except(
                "a",
                ServerMessage::ChatMessage {
                    text: "hi".to_string(),
                },
            ),
        ];

        assert_eq!(messages_for(&batch, "a").count(), 2);
        let for_b: Vec<_> = messages_for(&batch, "b").collect();
        assert_eq!(
            for_b,
            vec![
                &ServerMessage::Timer { seconds: 3 },
                &ServerMessage::ChatMessage {
                    text: "hi".to_string()
                },
            ]
        );
    }
}
