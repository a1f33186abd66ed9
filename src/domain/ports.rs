use super::client::Client;
use crate::error::Result;
use async_trait::async_trait;

/// Storage capability the client controller is written against.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn add_client(&mut self, client: Client) -> Result<()>;
    async fn list_clients(&self) -> Result<Vec<Client>>;
}

pub type ClientRepositoryBox = Box<dyn ClientRepository>;

pub type ClientRepositoryFactory = Box<dyn Fn() -> ClientRepositoryBox + Send + Sync>;
