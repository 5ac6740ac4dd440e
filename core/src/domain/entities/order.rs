//! Order domain entity
//!
//! An order placed by a client. The `status` field is kept as a free-form
//! string: kitchen statuses (`received` → `preparing` → `ready` →
//! `completed`) and the payment marker `PAID` share it, and no transition
//! table is enforced here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::client::ClientId;
use super::payment::PaymentId;

/// Payment marker written into the order status once paid
pub const PAYMENT_STATUS_PAID: &str = "PAID";

/// Payment marker for orders still waiting on checkout
pub const PAYMENT_STATUS_PENDING: &str = "PENDING";

/// Unique identifier for an order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Known kitchen statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Received,
    Preparing,
    Ready,
    Completed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Received => write!(f, "received"),
            OrderStatus::Preparing => write!(f, "preparing"),
            OrderStatus::Ready => write!(f, "ready"),
            OrderStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "received" => Ok(OrderStatus::Received),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "completed" => Ok(OrderStatus::Completed),
            _ => Err(format!("Unknown order status: {}", s)),
        }
    }
}

/// A client order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Display number shown on the pickup screen
    pub number: i64,
    pub status: String,
    pub client_id: ClientId,
    pub payment_id: Option<PaymentId>,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// The status as a kitchen status, if it is one
    pub fn kitchen_status(&self) -> Option<OrderStatus> {
        self.status.parse().ok()
    }

    /// Check if the order carries the payment marker
    pub fn is_marked_paid(&self) -> bool {
        self.status.eq_ignore_ascii_case(PAYMENT_STATUS_PAID)
    }
}

/// Data needed to create a new order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub client_id: ClientId,
}

/// Payment state of an order, as reported by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPaymentStatus {
    pub order_id: OrderId,
    pub status: String,
}

impl OrderPaymentStatus {
    pub fn is_paid(&self) -> bool {
        self.status.eq_ignore_ascii_case(PAYMENT_STATUS_PAID)
    }
}
