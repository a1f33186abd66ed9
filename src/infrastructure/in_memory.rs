use crate::domain::client::Client;
use crate::domain::ports::ClientRepository;
use crate::error::Result;
use async_trait::async_trait;
use tracing::trace;

/// An append-only, sequence-backed client store.
///
/// Clients are listed in the order they were added. Adding the same client
/// twice keeps both copies; nothing is de-duplicated or looked up by id.
#[derive(Debug, Default, Clone)]
pub struct InMemoryClientStore {
    clients: Vec<Client>,
}

impl InMemoryClientStore {
    /// Creates a new, empty in-memory client store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientStore {
    async fn add_client(&mut self, client: Client) -> Result<()> {
        trace!(client = client.id, position = self.clients.len(), "append");
        self.clients.push(client);
        Ok(())
    }

    async fn list_clients(&self) -> Result<Vec<Client>> {
        Ok(self.clients.clone())
    }
}
