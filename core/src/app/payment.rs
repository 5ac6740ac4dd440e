//! Payment use cases

use std::sync::Arc;

use async_trait::async_trait;

use super::usecase::UseCase;
use super::validation::ensure_non_negative;
use crate::domain::entities::{NewPayment, Payment};
use crate::domain::ports::PaymentGateway;
use crate::dto::CreatePaymentDto;
use crate::error::UseCaseError;

pub const PAYMENT_CHECKOUT_FAILED: &str = "failed to checkout payment";

/// Register the payment for an order
pub struct PaymentCheckoutUseCase<G>
where
    G: PaymentGateway + ?Sized,
{
    payments: Arc<G>,
}

impl<G> PaymentCheckoutUseCase<G>
where
    G: PaymentGateway + ?Sized,
{
    pub fn new(payments: Arc<G>) -> Self {
        Self { payments }
    }
}

#[async_trait]
impl<G> UseCase for PaymentCheckoutUseCase<G>
where
    G: PaymentGateway + ?Sized,
{
    type Input = CreatePaymentDto;
    type Output = Payment;
    type Error = UseCaseError;

    async fn execute(&self, input: CreatePaymentDto) -> Result<Payment, UseCaseError> {
        ensure_non_negative("amount", input.amount)?;
        let new_payment = NewPayment::from(input);

        let payment = self
            .payments
            .create_payment(&new_payment)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", PAYMENT_CHECKOUT_FAILED);
                UseCaseError::gateway(PAYMENT_CHECKOUT_FAILED, e)
            })?;

        tracing::info!(
            payment_id = %payment.id,
            order_id = %payment.order_id,
            amount = %payment.amount,
            provider = %payment.provider,
            "Payment checked out"
        );
        Ok(payment)
    }
}
