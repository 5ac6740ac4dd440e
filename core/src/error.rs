//! Error types for the use-case layer
//!
//! This module defines error types for each boundary:
//! - `GatewayError`: failures surfaced by a persistence/external gateway
//! - `UseCaseError`: what a use case hands back to the transport layer
//! - `ConfigError`: environment and telemetry setup failures

use thiserror::Error;

/// Gateway errors - anything a persistence collaborator reports
///
/// The use-case layer never branches on the variant. The distinction only
/// exists so the transport layer can pick a response code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Use case errors - returned from every `execute` except product deletion
#[derive(Debug, Error)]
pub enum UseCaseError {
    /// The single gateway call failed; `context` names the operation
    #[error("{context}: {source}")]
    Gateway {
        context: &'static str,
        #[source]
        source: GatewayError,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl UseCaseError {
    /// Wrap a gateway failure with a fixed operation message
    pub fn gateway(context: &'static str, source: GatewayError) -> Self {
        UseCaseError::Gateway { context, source }
    }

    /// The operation message, if this came from a gateway
    pub fn context(&self) -> Option<&'static str> {
        match self {
            UseCaseError::Gateway { context, .. } => Some(*context),
            UseCaseError::Validation(_) => None,
        }
    }

    /// The underlying gateway failure, if any
    pub fn gateway_error(&self) -> Option<&GatewayError> {
        match self {
            UseCaseError::Gateway { source, .. } => Some(source),
            UseCaseError::Validation(_) => None,
        }
    }
}

/// Configuration and telemetry errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },

    #[error("Failed to initialize tracing: {0}")]
    Telemetry(String),
}
