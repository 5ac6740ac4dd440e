//! Payment DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewPayment, OrderId, Payment, PaymentId};

/// Request body for checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePaymentDto {
    pub order_id: OrderId,
    pub amount: Decimal,
}

impl From<CreatePaymentDto> for NewPayment {
    fn from(dto: CreatePaymentDto) -> Self {
        NewPayment {
            order_id: dto.order_id,
            amount: dto.amount,
        }
    }
}

/// Response shape for a payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDto {
    pub id: PaymentId,
    pub provider: String,
    #[serde(rename = "type")]
    pub payment_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Payment> for PaymentDto {
    fn from(payment: Payment) -> Self {
        PaymentDto {
            id: payment.id,
            provider: payment.provider,
            payment_type: payment.payment_type,
            created_at: payment.created_at,
            updated_at: payment.updated_at,
        }
    }
}
