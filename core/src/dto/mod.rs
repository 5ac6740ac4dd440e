//! Data transfer objects
//!
//! Shapes that cross the boundary between the transport layer and the use
//! cases. Inputs convert into the `New*`/update records the gateways take;
//! outputs are built from entities.

pub mod client;
pub mod order;
pub mod payment;
pub mod product;

pub use client::CreateClientDto;
pub use order::{CreateOrderDto, OrderDto, UpdateOrderStatusDto};
pub use payment::{CreatePaymentDto, PaymentDto};
pub use product::{CreateProductDto, UpdateProductDto};
