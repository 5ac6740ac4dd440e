//! Order use cases
//!
//! Order creation, lookup, listing, status changes and payment status.
//! Status strings are forwarded verbatim: whether a change is legal is the
//! gateway's call.

use std::sync::Arc;

use async_trait::async_trait;

use super::usecase::UseCase;
use crate::domain::entities::{NewOrder, Order, OrderId, OrderPaymentStatus};
use crate::domain::ports::OrderGateway;
use crate::dto::{CreateOrderDto, UpdateOrderStatusDto};
use crate::error::UseCaseError;

pub const CREATE_ORDER_FAILED: &str = "failed to create order";
pub const GET_ORDER_FAILED: &str = "failed to get order by id";
pub const LIST_ORDERS_FAILED: &str = "failed to list orders";
pub const UPDATE_ORDER_STATUS_FAILED: &str = "failed to update order status";
pub const GET_ORDER_PAYMENT_STATUS_FAILED: &str = "failed to get order payment status";

/// Open a new order for a client
pub struct CreateOrderUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    orders: Arc<G>,
}

impl<G> CreateOrderUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    pub fn new(orders: Arc<G>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl<G> UseCase for CreateOrderUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    type Input = CreateOrderDto;
    type Output = Order;
    type Error = UseCaseError;

    async fn execute(&self, input: CreateOrderDto) -> Result<Order, UseCaseError> {
        let new_order = NewOrder::from(input);

        let order = self
            .orders
            .create_order(&new_order)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", CREATE_ORDER_FAILED);
                UseCaseError::gateway(CREATE_ORDER_FAILED, e)
            })?;

        tracing::debug!(
            order_id = %order.id,
            number = order.number,
            client_id = %order.client_id,
            "Order created"
        );
        Ok(order)
    }
}

pub struct GetOrderUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    orders: Arc<G>,
}

impl<G> GetOrderUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    pub fn new(orders: Arc<G>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl<G> UseCase for GetOrderUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    type Input = OrderId;
    type Output = Order;
    type Error = UseCaseError;

    async fn execute(&self, id: OrderId) -> Result<Order, UseCaseError> {
        let order = self
            .orders
            .get_order_by_id(&id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", GET_ORDER_FAILED);
                UseCaseError::gateway(GET_ORDER_FAILED, e)
            })?;

        tracing::debug!(order_id = %order.id, "Order fetched");
        Ok(order)
    }
}

/// List orders, at most `limit` of them
pub struct ListOrdersUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    orders: Arc<G>,
}

impl<G> ListOrdersUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    pub fn new(orders: Arc<G>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl<G> UseCase for ListOrdersUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    type Input = u64;
    type Output = Vec<Order>;
    type Error = UseCaseError;

    async fn execute(&self, limit: u64) -> Result<Vec<Order>, UseCaseError> {
        let orders = self
            .orders
            .list_orders(limit)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", LIST_ORDERS_FAILED);
                UseCaseError::gateway(LIST_ORDERS_FAILED, e)
            })?;

        tracing::debug!(limit, count = orders.len(), "Listed orders");
        Ok(orders)
    }
}

/// Overwrite an order's status
pub struct UpdateOrderStatusUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    orders: Arc<G>,
}

impl<G> UpdateOrderStatusUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    pub fn new(orders: Arc<G>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl<G> UseCase for UpdateOrderStatusUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    type Input = UpdateOrderStatusDto;
    type Output = Order;
    type Error = UseCaseError;

    async fn execute(&self, input: UpdateOrderStatusDto) -> Result<Order, UseCaseError> {
        let order = self
            .orders
            .update_order_status(&input.id, &input.status)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", UPDATE_ORDER_STATUS_FAILED);
                UseCaseError::gateway(UPDATE_ORDER_STATUS_FAILED, e)
            })?;

        tracing::debug!(order_id = %order.id, status = %order.status, "Order status updated");
        Ok(order)
    }
}

pub struct GetOrderPaymentStatusUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    orders: Arc<G>,
}

impl<G> GetOrderPaymentStatusUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    pub fn new(orders: Arc<G>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl<G> UseCase for GetOrderPaymentStatusUseCase<G>
where
    G: OrderGateway + ?Sized,
{
    type Input = OrderId;
    type Output = OrderPaymentStatus;
    type Error = UseCaseError;

    async fn execute(&self, id: OrderId) -> Result<OrderPaymentStatus, UseCaseError> {
        let status = self
            .orders
            .get_order_payment_status(&id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", GET_ORDER_PAYMENT_STATUS_FAILED);
                UseCaseError::gateway(GET_ORDER_PAYMENT_STATUS_FAILED, e)
            })?;

        tracing::debug!(
            order_id = %status.order_id,
            status = %status.status,
            "Order payment status fetched"
        );
        Ok(status)
    }
}
