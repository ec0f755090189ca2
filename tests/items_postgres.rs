use catalog_api::{
    db::{MIGRATIONS_DIR, create_orm_conn, run_migrations},
    dto::items::{CreateItemRequest, UpdateItemRequest},
    error::AppError,
    repositories::{DbItemRepository, ItemRepository, RepositoryError},
    services::item_service,
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, Statement};

// Full item lifecycle against Postgres: create -> get -> replace -> delete.
#[tokio::test]
async fn item_lifecycle_against_postgres() -> anyhow::Result<()> {
    // Only a dedicated test database is used; the items table gets truncated.
    let database_url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) if !url.is_empty() => url,
        _ => {
            eprintln!("Skipping test: set TEST_DATABASE_URL to run postgres item tests.");
            return Ok(());
        }
    };

    let repository = setup_repository(&database_url).await?;
    let state = AppState::new(repository.clone());

    let created = item_service::create_item(
        &state,
        CreateItemRequest {
            name: "Potion".into(),
            price: Decimal::new(950, 2),
        },
    )
    .await?;

    let fetched = item_service::get_item(&state, created.id).await?;
    assert_eq!(fetched.name, "Potion");
    assert_eq!(fetched.price, Decimal::new(950, 2));
    // timestamptz keeps microseconds; whole seconds must survive.
    assert_eq!(
        fetched.created_date.timestamp(),
        created.created_date.timestamp()
    );

    item_service::update_item(
        &state,
        created.id,
        UpdateItemRequest {
            name: "Potion".into(),
            price: Decimal::from(12),
        },
    )
    .await?;
    let updated = item_service::get_item(&state, created.id).await?;
    assert_eq!(updated.price, Decimal::from(12));
    assert_eq!(updated.created_date, fetched.created_date);

    let listed = item_service::list_items(&state).await?;
    assert_eq!(listed.len(), 1);

    item_service::delete_item(&state, created.id).await?;
    assert!(matches!(
        item_service::get_item(&state, created.id).await,
        Err(AppError::NotFound)
    ));

    assert!(matches!(
        repository.delete(created.id).await,
        Err(RepositoryError::Missing(_))
    ));

    Ok(())
}

async fn setup_repository(database_url: &str) -> anyhow::Result<DbItemRepository> {
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm, MIGRATIONS_DIR).await?;

    // Clean table between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(backend, "TRUNCATE TABLE items"))
        .await?;

    Ok(DbItemRepository::new(orm))
}
