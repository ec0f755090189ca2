use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::items::{CreateItemRequest, ItemDto, ItemList, UpdateItemRequest},
    error::AppResult,
    services::item_service,
    state::AppState,
};

pub const ITEMS_PATH: &str = "/items";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
}

/// Path at which a single item can be fetched.
pub fn item_location(id: Uuid) -> String {
    format!("{ITEMS_PATH}/{id}")
}

#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All catalog items", body = ItemList),
        (status = 500, description = "Internal Server Error"),
    ),
    tag = "Items"
)]
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<ItemList>> {
    let items = item_service::list_items(&state).await?;
    Ok(Json(ItemList { items }))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Get item", body = ItemDto),
        (status = 400, description = "Malformed item ID"),
        (status = 404, description = "Item not found"),
    ),
    tag = "Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ItemDto>> {
    let item = item_service::get_item(&state, id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemDto,
            headers(("location" = String, description = "Path of the new item"))),
        (status = 422, description = "Missing or invalid field"),
    ),
    tag = "Items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemRequest>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<ItemDto>)> {
    let item = item_service::create_item(&state, payload).await?;
    let location = item_location(item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item),
    ))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 204, description = "Item replaced"),
        (status = 400, description = "Malformed item ID"),
        (status = 404, description = "Item not found"),
    ),
    tag = "Items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateItemRequest>,
) -> AppResult<StatusCode> {
    item_service::update_item(&state, id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Malformed item ID"),
        (status = 404, description = "Item not found"),
    ),
    tag = "Items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    item_service::delete_item(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
