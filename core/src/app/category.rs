//! Category use cases

use std::sync::Arc;

use async_trait::async_trait;

use super::usecase::UseCase;
use crate::domain::entities::{Category, CategoryId};
use crate::domain::ports::CategoryGateway;
use crate::error::UseCaseError;

pub const GET_CATEGORY_FAILED: &str = "failed to get category by id";
pub const LIST_CATEGORIES_FAILED: &str = "failed to list categories";

pub struct GetCategoryUseCase<G>
where
    G: CategoryGateway + ?Sized,
{
    categories: Arc<G>,
}

impl<G> GetCategoryUseCase<G>
where
    G: CategoryGateway + ?Sized,
{
    pub fn new(categories: Arc<G>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl<G> UseCase for GetCategoryUseCase<G>
where
    G: CategoryGateway + ?Sized,
{
    type Input = CategoryId;
    type Output = Category;
    type Error = UseCaseError;

    async fn execute(&self, id: CategoryId) -> Result<Category, UseCaseError> {
        let category = self
            .categories
            .get_category_by_id(&id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", GET_CATEGORY_FAILED);
                UseCaseError::gateway(GET_CATEGORY_FAILED, e)
            })?;

        tracing::debug!(category_id = %category.id, "Category fetched");
        Ok(category)
    }
}

/// List the whole menu structure
pub struct ListCategoriesUseCase<G>
where
    G: CategoryGateway + ?Sized,
{
    categories: Arc<G>,
}

impl<G> ListCategoriesUseCase<G>
where
    G: CategoryGateway + ?Sized,
{
    pub fn new(categories: Arc<G>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl<G> UseCase for ListCategoriesUseCase<G>
where
    G: CategoryGateway + ?Sized,
{
    type Input = ();
    type Output = Vec<Category>;
    type Error = UseCaseError;

    async fn execute(&self, _input: ()) -> Result<Vec<Category>, UseCaseError> {
        let categories = self
            .categories
            .list_categories()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "{}", LIST_CATEGORIES_FAILED);
                UseCaseError::gateway(LIST_CATEGORIES_FAILED, e)
            })?;

        tracing::debug!(count = categories.len(), "Listed categories");
        Ok(categories)
    }
}
