//! Domain ports (traits)
//!
//! Port traits define interfaces that the use cases require.
//! Adapters provide concrete implementations of these traits.

pub mod gateways;

pub use gateways::{CategoryGateway, ClientGateway, OrderGateway, PaymentGateway, ProductGateway};
