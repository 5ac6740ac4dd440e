//! In-memory implementations of gateway traits
//!
//! Each gateway stores data in memory, can be pre-seeded with `with_*`
//! builders, told which id to assign next with `with_next_id`, or forced to
//! fail every call with `failing_with`. `calls()` reports how many times the
//! gateway was hit.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::domain::entities::{
    Category, CategoryId, Client, ClientId, NewClient, NewOrder, NewPayment, NewProduct, Order,
    OrderId, OrderPaymentStatus, OrderStatus, Payment, PaymentId, Product, ProductId,
    ProductUpdate, PAYMENT_STATUS_PAID, PAYMENT_STATUS_PENDING,
};
use crate::domain::ports::{
    CategoryGateway, ClientGateway, OrderGateway, PaymentGateway, ProductGateway,
};
use crate::error::GatewayError;

// ============================================================================
// Shared scripting
// ============================================================================

#[derive(Default)]
struct Script {
    next_ids: RwLock<VecDeque<String>>,
    failure: RwLock<Option<GatewayError>>,
    calls: AtomicUsize,
}

impl Script {
    /// Count the call and return the scripted failure, if any
    fn enter(&self) -> Result<(), GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.read().unwrap().as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> String {
        self.next_ids
            .write()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }

    fn push_id(&self, id: &str) {
        self.next_ids.write().unwrap().push_back(id.to_string());
    }

    fn fail_with(&self, err: GatewayError) {
        *self.failure.write().unwrap() = Some(err);
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

// ============================================================================
// In-Memory Client Gateway
// ============================================================================

#[derive(Default)]
pub struct InMemoryClientGateway {
    clients: RwLock<HashMap<ClientId, Client>>,
    script: Script,
}

impl InMemoryClientGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(self, client: Client) -> Self {
        self.clients
            .write()
            .unwrap()
            .insert(client.id.clone(), client);
        self
    }

    pub fn with_next_id(self, id: &str) -> Self {
        self.script.push_id(id);
        self
    }

    pub fn failing_with(self, err: GatewayError) -> Self {
        self.script.fail_with(err);
        self
    }

    pub fn calls(&self) -> usize {
        self.script.calls()
    }
}

#[async_trait]
impl ClientGateway for InMemoryClientGateway {
    async fn create_client(&self, new_client: &NewClient) -> Result<Client, GatewayError> {
        self.script.enter()?;

        let mut clients = self.clients.write().unwrap();
        if clients.values().any(|c| c.cpf == new_client.cpf) {
            return Err(GatewayError::AlreadyExists(format!(
                "Client with cpf {} already exists",
                new_client.cpf
            )));
        }

        let client = Client {
            id: ClientId(self.script.next_id()),
            cpf: new_client.cpf.clone(),
            name: new_client.name.clone(),
            email: new_client.email.clone(),
        };
        clients.insert(client.id.clone(), client.clone());
        Ok(client)
    }

    async fn get_client_by_id(&self, id: &ClientId) -> Result<Client, GatewayError> {
        self.script.enter()?;
        self.clients
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(format!("Client {} not found", id)))
    }

    async fn get_client_by_cpf(&self, cpf: &str) -> Result<Client, GatewayError> {
        self.script.enter()?;
        self.clients
            .read()
            .unwrap()
            .values()
            .find(|c| c.cpf == cpf)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(format!("Client with cpf {} not found", cpf)))
    }
}

// ============================================================================
// In-Memory Category Gateway
// ============================================================================

#[derive(Default)]
pub struct InMemoryCategoryGateway {
    categories: RwLock<Vec<Category>>,
    script: Script,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(self, category: Category) -> Self {
        self.categories.write().unwrap().push(category);
        self
    }

    pub fn failing_with(self, err: GatewayError) -> Self {
        self.script.fail_with(err);
        self
    }

    pub fn calls(&self) -> usize {
        self.script.calls()
    }
}

#[async_trait]
impl CategoryGateway for InMemoryCategoryGateway {
    async fn get_category_by_id(&self, id: &CategoryId) -> Result<Category, GatewayError> {
        self.script.enter()?;
        self.categories
            .read()
            .unwrap()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(format!("Category {} not found", id)))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.script.enter()?;
        Ok(self.categories.read().unwrap().clone())
    }
}

// ============================================================================
// In-Memory Product Gateway
// ============================================================================

#[derive(Default)]
pub struct InMemoryProductGateway {
    products: RwLock<Vec<Product>>,
    script: Script,
}

impl InMemoryProductGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(self, product: Product) -> Self {
        self.products.write().unwrap().push(product);
        self
    }

    pub fn with_next_id(self, id: &str) -> Self {
        self.script.push_id(id);
        self
    }

    pub fn failing_with(self, err: GatewayError) -> Self {
        self.script.fail_with(err);
        self
    }

    pub fn calls(&self) -> usize {
        self.script.calls()
    }

    pub fn stored(&self, id: &ProductId) -> Option<Product> {
        self.products
            .read()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }
}

#[async_trait]
impl ProductGateway for InMemoryProductGateway {
    async fn create_product(&self, new_product: &NewProduct) -> Result<Product, GatewayError> {
        self.script.enter()?;

        let now = Utc::now();
        let product = Product {
            id: ProductId(self.script.next_id()),
            name: new_product.name.clone(),
            description: new_product.description.clone(),
            price: new_product.price,
            category_id: new_product.category_id.clone(),
            created_at: now,
            updated_at: now,
        };
        self.products.write().unwrap().push(product.clone());
        Ok(product)
    }

    async fn list_products(
        &self,
        category_id: Option<&CategoryId>,
    ) -> Result<Vec<Product>, GatewayError> {
        self.script.enter()?;
        let products = self.products.read().unwrap();
        Ok(match category_id {
            Some(category_id) => products
                .iter()
                .filter(|p| p.belongs_to(category_id))
                .cloned()
                .collect(),
            None => products.clone(),
        })
    }

    async fn update_product(&self, update: &ProductUpdate) -> Result<Product, GatewayError> {
        self.script.enter()?;
        let mut products = self.products.write().unwrap();
        let product = products
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| GatewayError::NotFound(format!("Product {} not found", update.id)))?;

        update.apply_to(product);
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), GatewayError> {
        self.script.enter()?;
        let mut products = self.products.write().unwrap();
        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() == before {
            return Err(GatewayError::NotFound(format!("Product {} not found", id)));
        }
        Ok(())
    }
}

// ============================================================================
// In-Memory Order Gateway
// ============================================================================

#[derive(Default)]
pub struct InMemoryOrderGateway {
    orders: RwLock<Vec<Order>>,
    script: Script,
}

impl InMemoryOrderGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(self, order: Order) -> Self {
        self.orders.write().unwrap().push(order);
        self
    }

    pub fn with_next_id(self, id: &str) -> Self {
        self.script.push_id(id);
        self
    }

    pub fn failing_with(self, err: GatewayError) -> Self {
        self.script.fail_with(err);
        self
    }

    pub fn calls(&self) -> usize {
        self.script.calls()
    }
}

#[async_trait]
impl OrderGateway for InMemoryOrderGateway {
    async fn create_order(&self, new_order: &NewOrder) -> Result<Order, GatewayError> {
        self.script.enter()?;

        let mut orders = self.orders.write().unwrap();
        let now = Utc::now();
        let order = Order {
            id: OrderId(self.script.next_id()),
            number: orders.len() as i64 + 1,
            status: OrderStatus::Received.to_string(),
            client_id: new_order.client_id.clone(),
            payment_id: None,
            total: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };
        orders.push(order.clone());
        Ok(order)
    }

    async fn get_order_by_id(&self, id: &OrderId) -> Result<Order, GatewayError> {
        self.script.enter()?;
        self.orders
            .read()
            .unwrap()
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(format!("Order {} not found", id)))
    }

    async fn list_orders(&self, limit: u64) -> Result<Vec<Order>, GatewayError> {
        self.script.enter()?;
        Ok(self
            .orders
            .read()
            .unwrap()
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update_order_status(
        &self,
        id: &OrderId,
        status: &str,
    ) -> Result<Order, GatewayError> {
        self.script.enter()?;
        let mut orders = self.orders.write().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| GatewayError::NotFound(format!("Order {} not found", id)))?;

        order.status = status.to_string();
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    async fn get_order_payment_status(
        &self,
        id: &OrderId,
    ) -> Result<OrderPaymentStatus, GatewayError> {
        self.script.enter()?;
        let orders = self.orders.read().unwrap();
        let order = orders
            .iter()
            .find(|o| &o.id == id)
            .ok_or_else(|| GatewayError::NotFound(format!("Order {} not found", id)))?;

        let status = if order.payment_id.is_some() || order.is_marked_paid() {
            PAYMENT_STATUS_PAID
        } else {
            PAYMENT_STATUS_PENDING
        };
        Ok(OrderPaymentStatus {
            order_id: order.id.clone(),
            status: status.to_string(),
        })
    }
}

/// Order gateway whose calls never complete, for cancellation tests
pub struct PendingOrderGateway;

#[async_trait]
impl OrderGateway for PendingOrderGateway {
    async fn create_order(&self, _order: &NewOrder) -> Result<Order, GatewayError> {
        std::future::pending().await
    }

    async fn get_order_by_id(&self, _id: &OrderId) -> Result<Order, GatewayError> {
        std::future::pending().await
    }

    async fn list_orders(&self, _limit: u64) -> Result<Vec<Order>, GatewayError> {
        std::future::pending().await
    }

    async fn update_order_status(
        &self,
        _id: &OrderId,
        _status: &str,
    ) -> Result<Order, GatewayError> {
        std::future::pending().await
    }

    async fn get_order_payment_status(
        &self,
        _id: &OrderId,
    ) -> Result<OrderPaymentStatus, GatewayError> {
        std::future::pending().await
    }
}

// ============================================================================
// In-Memory Payment Gateway
// ============================================================================

#[derive(Default)]
pub struct InMemoryPaymentGateway {
    payments: RwLock<Vec<Payment>>,
    script: Script,
}

impl InMemoryPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_next_id(self, id: &str) -> Self {
        self.script.push_id(id);
        self
    }

    pub fn failing_with(self, err: GatewayError) -> Self {
        self.script.fail_with(err);
        self
    }

    pub fn calls(&self) -> usize {
        self.script.calls()
    }

    pub fn payments_for(&self, order_id: &OrderId) -> Vec<Payment> {
        self.payments
            .read()
            .unwrap()
            .iter()
            .filter(|p| &p.order_id == order_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PaymentGateway for InMemoryPaymentGateway {
    async fn create_payment(&self, new_payment: &NewPayment) -> Result<Payment, GatewayError> {
        self.script.enter()?;

        let now = Utc::now();
        let payment = Payment {
            id: PaymentId(self.script.next_id()),
            order_id: new_payment.order_id.clone(),
            provider: "mercado_pago".to_string(),
            payment_type: "qr_code".to_string(),
            amount: new_payment.amount,
            created_at: now,
            updated_at: now,
        };
        self.payments.write().unwrap().push(payment.clone());
        Ok(payment)
    }
}
