//! Domain entities
//!
//! Plain records with identity and attributes. Identity is always assigned
//! by persistence; creation goes through the `New*` records, which carry no
//! id at all.

pub mod category;
pub mod client;
pub mod order;
pub mod payment;
pub mod product;

pub use category::{Category, CategoryId};
pub use client::{Client, ClientId, NewClient};
pub use order::{
    NewOrder, Order, OrderId, OrderPaymentStatus, OrderStatus, PAYMENT_STATUS_PAID,
    PAYMENT_STATUS_PENDING,
};
pub use payment::{NewPayment, Payment, PaymentId};
pub use product::{NewProduct, Product, ProductId, ProductUpdate};
