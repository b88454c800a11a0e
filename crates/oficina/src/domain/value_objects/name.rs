//! Name - Human-readable label for catalog entries and clients

use crate::domain::errors::{DomainError, DomainResult};

/// Trimmed, at least 2 characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.chars().count() < 2 {
            return Err(DomainError::validation(
                "name must be at least 2 characters long",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_names_with_accents_and_spaces() {
        let name = Name::new("Troca de Óleo e Filtro").unwrap();
        assert_eq!(name.value(), "Troca de Óleo e Filtro");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(Name::new("  Filtro  ").unwrap().value(), "Filtro");
    }

    #[test]
    fn rejects_empty_and_single_character_names() {
        assert!(Name::new("").is_err());
        assert!(Name::new("x").is_err());
        assert!(Name::new("   ").is_err());
    }
}
