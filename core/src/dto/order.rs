//! Order DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{ClientId, NewOrder, Order, OrderId, PaymentId};

/// Request body for order creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderDto {
    pub client_id: ClientId,
}

impl From<CreateOrderDto> for NewOrder {
    fn from(dto: CreateOrderDto) -> Self {
        NewOrder {
            client_id: dto.client_id,
        }
    }
}

/// Request body for an order status change. `status` is forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOrderStatusDto {
    pub id: OrderId,
    pub status: String,
}

/// Response shape for an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: OrderId,
    pub number: i64,
    pub status: String,
    pub client_id: ClientId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<PaymentId>,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        OrderDto {
            id: order.id,
            number: order.number,
            status: order.status,
            client_id: order.client_id,
            payment_id: order.payment_id,
            total: order.total,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
