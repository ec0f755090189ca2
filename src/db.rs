use anyhow::{Context, Result};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const MIGRATIONS_DIR: &str = "migrations";

/// Open a SeaORM connection to the catalog database.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url)
        .await
        .context("connecting to catalog database")?;
    Ok(conn)
}

/// Apply every `.sql` file under `dir` in filename order.
///
/// Files are expected to be idempotent (`IF NOT EXISTS`); nothing records which
/// ones already ran.
pub async fn run_migrations(conn: &DatabaseConnection, dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("reading migrations from {}", dir.display()))?;
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let backend = conn.get_database_backend();
    for file in files {
        let sql = fs::read_to_string(&file).await?;
        // Postgres prepared statements cannot contain multiple commands.
        for stmt in sql.split(';') {
            let stmt = stmt.trim();
            if stmt.is_empty() {
                continue;
            }
            conn.execute(Statement::from_string(backend, format!("{stmt};")))
                .await?;
        }
        tracing::debug!(file = %file.display(), "migration applied");
    }

    Ok(())
}
