use catalog_api::{
    config::AppConfig,
    db::{MIGRATIONS_DIR, create_orm_conn, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(config.require_database_url()?).await?;
    run_migrations(&orm, MIGRATIONS_DIR).await?;
    println!("Migrations applied");
    Ok(())
}
