//! Request handling for catalog items, independent of the HTTP layer.
//!
//! Every function is stateless: all item state lives behind the repository.
//! Update and delete check for existence and then act in a second repository
//! call; the pair is not atomic, so a concurrent delete in between surfaces as
//! a repository failure rather than a 404.

use uuid::Uuid;

use crate::{
    dto::items::{CreateItemRequest, ItemDto, UpdateItemRequest},
    error::{AppError, AppResult},
    models::Item,
    state::AppState,
};

pub async fn list_items(state: &AppState) -> AppResult<Vec<ItemDto>> {
    let items = state
        .items
        .list()
        .await?
        .into_iter()
        .map(ItemDto::from)
        .collect();
    Ok(items)
}

pub async fn get_item(state: &AppState, id: Uuid) -> AppResult<ItemDto> {
    match state.items.get(id).await? {
        Some(item) => Ok(item.into()),
        None => {
            tracing::debug!(item_id = %id, "item not found");
            Err(AppError::NotFound)
        }
    }
}

pub async fn create_item(state: &AppState, payload: CreateItemRequest) -> AppResult<ItemDto> {
    let item = Item::new(payload.name, payload.price);
    state.items.create(item.clone()).await?;

    tracing::info!(item_id = %item.id, "item created");
    Ok(item.into())
}

pub async fn update_item(state: &AppState, id: Uuid, payload: UpdateItemRequest) -> AppResult<()> {
    let existing = match state.items.get(id).await? {
        Some(item) => item,
        None => {
            tracing::debug!(item_id = %id, "update of unknown item");
            return Err(AppError::NotFound);
        }
    };

    let item = existing.replaced_with(payload.name, payload.price);
    state.items.update(item).await?;

    tracing::info!(item_id = %id, "item updated");
    Ok(())
}

pub async fn delete_item(state: &AppState, id: Uuid) -> AppResult<()> {
    if state.items.get(id).await?.is_none() {
        tracing::debug!(item_id = %id, "delete of unknown item");
        return Err(AppError::NotFound);
    }

    state.items.delete(id).await?;

    tracing::info!(item_id = %id, "item deleted");
    Ok(())
}
