use std::sync::Arc;

use crate::repositories::ItemRepository;

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepository>,
}

impl AppState {
    pub fn new(items: impl ItemRepository + 'static) -> Self {
        Self {
            items: Arc::new(items),
        }
    }
}
