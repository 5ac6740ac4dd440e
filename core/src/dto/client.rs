//! Client DTOs

use serde::{Deserialize, Serialize};

use crate::domain::entities::NewClient;

/// Request body for client registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateClientDto {
    pub cpf: String,
    pub name: String,
    pub email: String,
}

impl From<CreateClientDto> for NewClient {
    fn from(dto: CreateClientDto) -> Self {
        NewClient {
            cpf: dto.cpf,
            name: dto.name,
            email: dto.email,
        }
    }
}
