//! Code - Optional internal part code (e.g. "FO-001")

use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(String);

impl Code {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("code cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_given_code() {
        assert_eq!(Code::new("FO-001").unwrap().value(), "FO-001");
    }

    #[test]
    fn rejects_blank_codes() {
        assert!(Code::new("").is_err());
        assert!(Code::new("  ").is_err());
    }
}
