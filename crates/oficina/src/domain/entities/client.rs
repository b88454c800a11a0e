//! Client - Shop customer

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::Name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: Uuid,
    pub name: Name,
    /// CPF or CNPJ, digits only.
    pub document: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    pub fn new(name: impl Into<String>, document: String, phone: Option<String>) -> DomainResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: Name::new(name)?,
            document,
            phone,
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_gets_an_id_and_timestamps() {
        let client = Client::new("João Silva", "12345678901".into(), Some("11999999999".into()))
            .unwrap();
        assert_eq!(client.name.value(), "João Silva");
        assert_eq!(client.document, "12345678901");
        assert_eq!(client.created_at, client.updated_at);
    }

    #[test]
    fn name_rules_apply() {
        assert!(Client::new("J", "123".into(), None).is_err());
    }
}
