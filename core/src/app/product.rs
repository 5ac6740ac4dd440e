//! Product use cases
//!
//! Catalog management: create, list (optionally by category), partial
//! update and delete.

use std::sync::Arc;

use async_trait::async_trait;

use super::usecase::UseCase;
use super::validation::ensure_non_negative;
use crate::domain::entities::{CategoryId, NewProduct, Product, ProductId, ProductUpdate};
use crate::domain::ports::ProductGateway;
use crate::dto::{CreateProductDto, UpdateProductDto};
use crate::error::{GatewayError, UseCaseError};

pub const CREATE_PRODUCT_FAILED: &str = "failed to create product";
pub const LIST_PRODUCTS_FAILED: &str = "failed to list products";
pub const UPDATE_PRODUCT_FAILED: &str = "failed to update product";

/// Add a product to the catalog
pub struct CreateProductUseCase<G>
where
    G: ProductGateway + ?Sized,
{
    products: Arc<G>,
}

impl<G> CreateProductUseCase<G>
where
    G: ProductGateway + ?Sized,
{
    pub fn new(products: Arc<G>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl<G> UseCase for CreateProductUseCase<G>
where
    G: ProductGateway + ?Sized,
{
    type Input = CreateProductDto;
    type Output = Product;
    type Error = UseCaseError;

    async fn execute(&self, input: CreateProductDto) -> Result<Product, UseCaseError> {
        ensure_non_negative("price", input.price)?;
        let new_product = NewProduct::from(input);

        let product = self
            .products
            .create_product(&new_product)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", CREATE_PRODUCT_FAILED);
                UseCaseError::gateway(CREATE_PRODUCT_FAILED, e)
            })?;

        tracing::debug!(
            product_id = %product.id,
            category_id = %product.category_id,
            "Product created"
        );
        Ok(product)
    }
}

/// List products; `None` lists the whole catalog
pub struct ListProductsUseCase<G>
where
    G: ProductGateway + ?Sized,
{
    products: Arc<G>,
}

impl<G> ListProductsUseCase<G>
where
    G: ProductGateway + ?Sized,
{
    pub fn new(products: Arc<G>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl<G> UseCase for ListProductsUseCase<G>
where
    G: ProductGateway + ?Sized,
{
    type Input = Option<CategoryId>;
    type Output = Vec<Product>;
    type Error = UseCaseError;

    async fn execute(&self, category_id: Option<CategoryId>) -> Result<Vec<Product>, UseCaseError> {
        let products = self
            .products
            .list_products(category_id.as_ref())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", LIST_PRODUCTS_FAILED);
                UseCaseError::gateway(LIST_PRODUCTS_FAILED, e)
            })?;

        tracing::debug!(count = products.len(), "Listed products");
        Ok(products)
    }
}

/// Partially update a product
pub struct UpdateProductUseCase<G>
where
    G: ProductGateway + ?Sized,
{
    products: Arc<G>,
}

impl<G> UpdateProductUseCase<G>
where
    G: ProductGateway + ?Sized,
{
    pub fn new(products: Arc<G>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl<G> UseCase for UpdateProductUseCase<G>
where
    G: ProductGateway + ?Sized,
{
    type Input = UpdateProductDto;
    type Output = Product;
    type Error = UseCaseError;

    async fn execute(&self, input: UpdateProductDto) -> Result<Product, UseCaseError> {
        if let Some(price) = input.price {
            ensure_non_negative("price", price)?;
        }
        let update = ProductUpdate::from(input);

        let product = self
            .products
            .update_product(&update)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", UPDATE_PRODUCT_FAILED);
                UseCaseError::gateway(UPDATE_PRODUCT_FAILED, e)
            })?;

        tracing::debug!(product_id = %product.id, "Product updated");
        Ok(product)
    }
}

/// Remove a product from the catalog
///
/// Unlike every other use case, a failure is handed back exactly as the
/// gateway reported it, without an operation prefix.
pub struct DeleteProductUseCase<G>
where
    G: ProductGateway + ?Sized,
{
    products: Arc<G>,
}

impl<G> DeleteProductUseCase<G>
where
    G: ProductGateway + ?Sized,
{
    pub fn new(products: Arc<G>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl<G> UseCase for DeleteProductUseCase<G>
where
    G: ProductGateway + ?Sized,
{
    type Input = ProductId;
    type Output = ();
    type Error = GatewayError;

    async fn execute(&self, id: ProductId) -> Result<(), GatewayError> {
        if let Err(e) = self.products.delete_product(&id).await {
            tracing::warn!(error = %e, product_id = %id, "Failed to delete product");
            return Err(e);
        }

        tracing::debug!(product_id = %id, "Product deleted");
        Ok(())
    }
}
