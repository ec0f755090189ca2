use std::collections::HashSet;

use catalog_api::{
    config::AppConfig,
    db::{MIGRATIONS_DIR, create_orm_conn, run_migrations},
    models::Item,
    repositories::{DbItemRepository, ItemRepository},
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(config.require_database_url()?).await?;
    // Ensure migrations are applied.
    run_migrations(&orm, MIGRATIONS_DIR).await?;

    let repository = DbItemRepository::new(orm);
    let seeded = seed_items(&repository).await?;

    println!("Seed completed. {seeded} new items");
    Ok(())
}

async fn seed_items(repository: &impl ItemRepository) -> anyhow::Result<usize> {
    let items = [
        ("Potion", Decimal::new(9, 0)),
        ("Antidote", Decimal::new(7, 0)),
        ("Hi-Potion", Decimal::new(2450, 2)),
        ("Bronze Sword", Decimal::new(20, 0)),
        ("Phoenix Down", Decimal::new(9999, 2)),
    ];

    // Names are not unique in the schema, so skip anything already present.
    let existing: HashSet<String> = repository
        .list()
        .await?
        .into_iter()
        .map(|item| item.name)
        .collect();

    let mut seeded = 0;
    for (name, price) in items {
        if existing.contains(name) {
            continue;
        }
        repository.create(Item::new(name.to_string(), price)).await?;
        println!("Seeded {name}");
        seeded += 1;
    }

    Ok(seeded)
}
