use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::items::{CreateItemRequest, ItemDto, ItemList, UpdateItemRequest},
    response::ApiResponse,
    routes::{health, items},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        items::list_items,
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item
    ),
    components(
        schemas(
            ItemDto,
            ItemList,
            CreateItemRequest,
            UpdateItemRequest,
            health::HealthData,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Items", description = "Catalog item endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
