//! Gateway port traits
//!
//! These traits define what the use cases need from persistence.
//! Implementations live outside this crate (database adapters, HTTP
//! clients for payment providers, ...).
//!
//! Every method either returns a fully populated value or an error, never
//! both. A missing record is reported as `GatewayError::NotFound`.

use async_trait::async_trait;

use crate::domain::entities::{
    Category, CategoryId, Client, ClientId, NewClient, NewOrder, NewPayment, NewProduct, Order,
    OrderId, OrderPaymentStatus, Payment, Product, ProductId, ProductUpdate,
};
use crate::error::GatewayError;

/// Gateway for Client entities
#[async_trait]
pub trait ClientGateway: Send + Sync {
    /// Persist a new client and return it with its assigned id
    async fn create_client(&self, client: &NewClient) -> Result<Client, GatewayError>;

    /// Find a client by ID
    async fn get_client_by_id(&self, id: &ClientId) -> Result<Client, GatewayError>;

    /// Find a client by CPF
    async fn get_client_by_cpf(&self, cpf: &str) -> Result<Client, GatewayError>;
}

/// Gateway for Category entities (read-only)
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    /// Find a category by ID
    async fn get_category_by_id(&self, id: &CategoryId) -> Result<Category, GatewayError>;

    /// List every category
    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError>;
}

/// Gateway for Product entities
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Persist a new product and return it with its assigned id
    async fn create_product(&self, product: &NewProduct) -> Result<Product, GatewayError>;

    /// List products, optionally only those in one category
    async fn list_products(
        &self,
        category_id: Option<&CategoryId>,
    ) -> Result<Vec<Product>, GatewayError>;

    /// Apply a partial update and return the stored product
    async fn update_product(&self, update: &ProductUpdate) -> Result<Product, GatewayError>;

    /// Delete a product
    async fn delete_product(&self, id: &ProductId) -> Result<(), GatewayError>;
}

/// Gateway for Order entities
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Persist a new order and return it with id, number and status assigned
    async fn create_order(&self, order: &NewOrder) -> Result<Order, GatewayError>;

    /// Find an order by ID
    async fn get_order_by_id(&self, id: &OrderId) -> Result<Order, GatewayError>;

    /// List orders, returning at most `limit` of them
    async fn list_orders(&self, limit: u64) -> Result<Vec<Order>, GatewayError>;

    /// Overwrite the order status. Legality of the change is up to the implementation.
    async fn update_order_status(&self, id: &OrderId, status: &str)
        -> Result<Order, GatewayError>;

    /// Get the payment status of an order
    async fn get_order_payment_status(
        &self,
        id: &OrderId,
    ) -> Result<OrderPaymentStatus, GatewayError>;
}

/// Gateway for Payment entities
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Register a payment and return it with id, provider and type assigned
    async fn create_payment(&self, payment: &NewPayment) -> Result<Payment, GatewayError>;
}
