//! Client Application Service (Use Cases)

use std::sync::Arc;

use uuid::Uuid;

use oficina::{Client, ClientRepository, DomainError};

/// Application service for clients
pub struct ClientService<R: ClientRepository> {
    repo: Arc<R>,
}

impl<R: ClientRepository> ClientService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        name: String,
        document: String,
        phone: Option<String>,
    ) -> Result<Client, DomainError> {
        let client = Client::new(name, document, phone)?;
        self.repo.save(&client).await?;
        tracing::info!(client_id = %client.id, "client registered");
        Ok(client)
    }

    pub async fn get(&self, id: Uuid) -> Result<Client, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Client", id))
    }

    pub async fn list(&self) -> Result<Vec<Client>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Client", id));
        }
        Ok(())
    }
}
