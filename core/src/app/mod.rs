//! Application layer
//!
//! Contains the use cases. Each one is built with the gateway it needs and
//! performs a single delegated call through `UseCase::execute`.

pub mod category;
pub mod client;
pub mod order;
pub mod payment;
pub mod product;
pub mod usecase;
mod validation;

pub use category::{GetCategoryUseCase, ListCategoriesUseCase};
pub use client::{CreateClientUseCase, GetClientByCpfUseCase, GetClientByIdUseCase};
pub use order::{
    CreateOrderUseCase, GetOrderPaymentStatusUseCase, GetOrderUseCase, ListOrdersUseCase,
    UpdateOrderStatusUseCase,
};
pub use payment::PaymentCheckoutUseCase;
pub use product::{
    CreateProductUseCase, DeleteProductUseCase, ListProductsUseCase, UpdateProductUseCase,
};
pub use usecase::UseCase;
