//! Client use cases
//!
//! Registration and lookup by id or CPF.

use std::sync::Arc;

use async_trait::async_trait;

use super::usecase::UseCase;
use crate::domain::entities::{Client, ClientId, NewClient};
use crate::domain::ports::ClientGateway;
use crate::dto::CreateClientDto;
use crate::error::UseCaseError;

pub const CREATE_CLIENT_FAILED: &str = "failed to create client";
pub const GET_CLIENT_BY_ID_FAILED: &str = "failed to get client by id";
pub const GET_CLIENT_BY_CPF_FAILED: &str = "failed to get client by cpf";

/// Register a new client
pub struct CreateClientUseCase<G>
where
    G: ClientGateway + ?Sized,
{
    clients: Arc<G>,
}

impl<G> CreateClientUseCase<G>
where
    G: ClientGateway + ?Sized,
{
    pub fn new(clients: Arc<G>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl<G> UseCase for CreateClientUseCase<G>
where
    G: ClientGateway + ?Sized,
{
    type Input = CreateClientDto;
    type Output = Client;
    type Error = UseCaseError;

    async fn execute(&self, input: CreateClientDto) -> Result<Client, UseCaseError> {
        let new_client = NewClient::from(input);

        let client = self
            .clients
            .create_client(&new_client)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", CREATE_CLIENT_FAILED);
                UseCaseError::gateway(CREATE_CLIENT_FAILED, e)
            })?;

        tracing::debug!(client_id = %client.id, "Client created");
        Ok(client)
    }
}

/// Look a client up by id
pub struct GetClientByIdUseCase<G>
where
    G: ClientGateway + ?Sized,
{
    clients: Arc<G>,
}

impl<G> GetClientByIdUseCase<G>
where
    G: ClientGateway + ?Sized,
{
    pub fn new(clients: Arc<G>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl<G> UseCase for GetClientByIdUseCase<G>
where
    G: ClientGateway + ?Sized,
{
    type Input = ClientId;
    type Output = Client;
    type Error = UseCaseError;

    async fn execute(&self, id: ClientId) -> Result<Client, UseCaseError> {
        let client = self
            .clients
            .get_client_by_id(&id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", GET_CLIENT_BY_ID_FAILED);
                UseCaseError::gateway(GET_CLIENT_BY_ID_FAILED, e)
            })?;

        tracing::debug!(client_id = %client.id, "Client fetched");
        Ok(client)
    }
}

/// Look a client up by CPF (the identification used at the ordering totem)
pub struct GetClientByCpfUseCase<G>
where
    G: ClientGateway + ?Sized,
{
    clients: Arc<G>,
}

impl<G> GetClientByCpfUseCase<G>
where
    G: ClientGateway + ?Sized,
{
    pub fn new(clients: Arc<G>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl<G> UseCase for GetClientByCpfUseCase<G>
where
    G: ClientGateway + ?Sized,
{
    type Input = String;
    type Output = Client;
    type Error = UseCaseError;

    async fn execute(&self, cpf: String) -> Result<Client, UseCaseError> {
        let client = self
            .clients
            .get_client_by_cpf(&cpf)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", GET_CLIENT_BY_CPF_FAILED);
                UseCaseError::gateway(GET_CLIENT_BY_CPF_FAILED, e)
            })?;

        tracing::debug!(client_id = %client.id, "Client fetched by CPF");
        Ok(client)
    }
}
