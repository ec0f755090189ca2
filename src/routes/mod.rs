use axum::Router;

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod items;

// Build the item router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new().nest(items::ITEMS_PATH, items::router())
}
