use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::IntoResponse,
};
use catalog_api::{
    dto::items::{CreateItemRequest, UpdateItemRequest},
    error::AppError,
    models::Item,
    repositories::{ItemRepository, RepositoryError, RepositoryResult},
    services::item_service,
    state::AppState,
};
use mockall::{mock, predicate::eq};
use rust_decimal::Decimal;
use uuid::Uuid;

mock! {
    pub Repo {}

    #[async_trait]
    impl ItemRepository for Repo {
        async fn list(&self) -> RepositoryResult<Vec<Item>>;
        async fn get(&self, id: Uuid) -> RepositoryResult<Option<Item>>;
        async fn create(&self, item: Item) -> RepositoryResult<()>;
        async fn update(&self, item: Item) -> RepositoryResult<()>;
        async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
    }
}

fn update_request() -> UpdateItemRequest {
    UpdateItemRequest {
        name: "Potion".into(),
        price: Decimal::from(12),
    }
}

#[tokio::test]
async fn update_of_unknown_item_never_touches_storage() {
    let id = Uuid::new_v4();
    let mut repo = MockRepo::new();
    repo.expect_get().with(eq(id)).times(1).returning(|_| Ok(None));
    repo.expect_update().never();

    let result = item_service::update_item(&AppState::new(repo), id, update_request()).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn delete_of_unknown_item_never_touches_storage() {
    let id = Uuid::new_v4();
    let mut repo = MockRepo::new();
    repo.expect_get().with(eq(id)).times(1).returning(|_| Ok(None));
    repo.expect_delete().never();

    let result = item_service::delete_item(&AppState::new(repo), id).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn update_replaces_name_and_price_only() {
    let existing = Item::new("Potion".into(), Decimal::from(9));
    let expected = Item {
        name: "Hi-Potion".into(),
        price: Decimal::from(25),
        ..existing.clone()
    };

    let mut repo = MockRepo::new();
    let found = existing.clone();
    repo.expect_get()
        .with(eq(existing.id))
        .returning(move |_| Ok(Some(found.clone())));
    repo.expect_update()
        .with(eq(expected))
        .times(1)
        .returning(|_| Ok(()));

    let request = UpdateItemRequest {
        name: "Hi-Potion".into(),
        price: Decimal::from(25),
    };
    item_service::update_item(&AppState::new(repo), existing.id, request)
        .await
        .expect("updated");
}

#[tokio::test]
async fn create_hands_a_fully_populated_item_to_storage() {
    let mut repo = MockRepo::new();
    repo.expect_create()
        .withf(|item| !item.id.is_nil() && item.name == "Potion" && item.price == Decimal::from(9))
        .times(1)
        .returning(|_| Ok(()));

    let request = CreateItemRequest {
        name: "Potion".into(),
        price: Decimal::from(9),
    };
    let created = item_service::create_item(&AppState::new(repo), request)
        .await
        .expect("created");

    assert_eq!(created.name, "Potion");
}

#[tokio::test]
async fn repository_failure_surfaces_as_server_error() {
    let id = Uuid::new_v4();
    let mut repo = MockRepo::new();
    let found = Item {
        id,
        ..Item::new("Potion".into(), Decimal::from(9))
    };
    repo.expect_get().returning(move |_| Ok(Some(found.clone())));
    // Item vanished between the existence check and the delete.
    repo.expect_delete()
        .times(1)
        .returning(|id| Err(RepositoryError::Missing(id)));

    let result = item_service::delete_item(&AppState::new(repo), id).await;

    let err = result.expect_err("delete should fail");
    assert!(matches!(err, AppError::Repository(RepositoryError::Missing(missing)) if missing == id));
    assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn list_failure_is_passed_through() {
    let mut repo = MockRepo::new();
    repo.expect_list()
        .returning(|| Err(RepositoryError::Database(sea_orm::DbErr::Custom("down".into()))));

    let result = item_service::list_items(&AppState::new(repo)).await;

    assert!(matches!(
        result,
        Err(AppError::Repository(RepositoryError::Database(_)))
    ));
}
