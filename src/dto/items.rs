use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Item;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// Read-only projection of an [`Item`] returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            created_date: item.created_date,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ItemList {
    #[schema(value_type = Vec<ItemDto>)]
    pub items: Vec<ItemDto>,
}
