use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::{
    app::build_app,
    config::AppConfig,
    db::{MIGRATIONS_DIR, create_orm_conn, run_migrations},
    repositories::{DbItemRepository, InMemoryItemRepository},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let state = match config.database_url.as_deref() {
        Some(database_url) => {
            let orm = create_orm_conn(database_url).await?;
            run_migrations(&orm, MIGRATIONS_DIR).await?;
            tracing::info!("using postgres item repository");
            AppState::new(DbItemRepository::new(orm))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, items are kept in memory");
            AppState::new(InMemoryItemRepository::new())
        }
    };

    let app = build_app(state);

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    tracing::info!("listening on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
