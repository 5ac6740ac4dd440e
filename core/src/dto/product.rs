//! Product DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CategoryId, NewProduct, ProductId, ProductUpdate};

/// Request body for product creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProductDto {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: CategoryId,
}

impl From<CreateProductDto> for NewProduct {
    fn from(dto: CreateProductDto) -> Self {
        NewProduct {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            category_id: dto.category_id,
        }
    }
}

/// Request body for a partial product update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductDto {
    pub id: ProductId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<CategoryId>,
}

impl From<UpdateProductDto> for ProductUpdate {
    fn from(dto: UpdateProductDto) -> Self {
        ProductUpdate {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            category_id: dto.category_id,
        }
    }
}
