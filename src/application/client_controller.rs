use crate::domain::client::Client;
use crate::domain::ports::ClientRepositoryBox;
use crate::error::Result;
use tracing::debug;

/// Entry point for client registration.
///
/// Written against [`ClientRepository`](crate::domain::ports::ClientRepository)
/// only, so the backing store is chosen by whoever constructs the controller.
/// Results from the store are returned as-is.
pub struct ClientController {
    repository: ClientRepositoryBox,
}

impl ClientController {
    pub fn new(repository: ClientRepositoryBox) -> Self {
        Self { repository }
    }

    pub async fn add_client(&mut self, client: Client) -> Result<()> {
        debug!(client = client.id, "add_client");
        self.repository.add_client(client).await
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        debug!("list_clients");
        self.repository.list_clients().await
    }
}
