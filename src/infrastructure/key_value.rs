use crate::domain::client::Client;
use crate::domain::ports::ClientRepository;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// A client store keyed by `Client::id`, standing in for a database table.
///
/// Writing a client whose id is already present replaces the stored value
/// (last write wins). Listing returns clients in ascending id order, which is
/// not necessarily the order they were added in.
///
/// Nothing is written to disk or sent over the network.
#[derive(Debug, Default, Clone)]
pub struct KeyValueClientStore {
    rows: BTreeMap<u32, Client>,
}

impl KeyValueClientStore {
    /// Creates a new, empty key-value client store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for KeyValueClientStore {
    async fn add_client(&mut self, client: Client) -> Result<()> {
        let key = client.id;
        match self.rows.insert(key, client) {
            Some(previous) => debug!(client = key, previous = %previous.name, "overwrote"),
            None => trace!(client = key, "insert"),
        }
        Ok(())
    }

    async fn list_clients(&self) -> Result<Vec<Client>> {
        Ok(self.rows.values().cloned().collect())
    }
}
