//! Fastfood core
//!
//! Use-case layer of a restaurant ordering backend: client registration,
//! catalog management, category lookup, the order lifecycle and payment
//! checkout. Uses hexagonal (ports & adapters) architecture: the use cases
//! depend only on the gateway traits in `domain::ports`, and persistence
//! adapters plug in from outside.

pub mod app;
pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod telemetry;



pub use app::UseCase;
pub use config::{Config, LogFormat};
pub use error::{ConfigError, GatewayError, UseCaseError};
