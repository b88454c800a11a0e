//! Client DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use oficina::Client;

/// Create client request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClientRequest {
    pub name: String,
    /// CPF or CNPJ
    pub document: String,
    pub phone: Option<String>,
}

/// Client response
#[derive(Debug, Serialize, ToSchema)]
pub struct ClientResponse {
    pub id: Uuid,
    pub name: String,
    pub document: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Client> for ClientResponse {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            name: client.name.value().to_string(),
            document: client.document.clone(),
            phone: client.phone.clone(),
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}
