use crate::types::ConnectionId;

/// Connections that are currently open, in connect order.
/// This is the pool drawers are picked from.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: Vec<ConnectionId>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the id was already registered
    pub fn connect(&mut self, connection_id: ConnectionId) -> bool {
        if self.contains(&connection_id) {
            return false;
        }
        self.connections.push(connection_id);
        true
    }

    /// Returns false if the id was not registered
    pub fn disconnect(&mut self, connection_id: &str) -> bool {
        let before = self.connections.len();
        self.connections.retain(|id| id != connection_id);
        self.connections.len() != before
    }

    pub fn contains(&self, connection_id: &str) -> bool {
        self.connections.iter().any(|id| id == connection_id)
    }

    pub fn ids(&self) -> &[ConnectionId] {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
