//! Client domain entity
//!
//! A registered customer, identified either by id or by CPF.

use serde::{Deserialize, Serialize};

/// Unique identifier for a client, assigned by persistence
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub String);

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ClientId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    /// National tax id, unique and immutable after creation
    pub cpf: String,
    pub name: String,
    pub email: String,
}

/// Data needed to register a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub cpf: String,
    pub name: String,
    pub email: String,
}
