//! Database initialization and cleanup utilities
//!
//! This module applies the embedded SQLite migrations and clears the paged
//! collection between benchmark runs.

use sqlx::SqlitePool;

/// Initialize the database by applying the embedded migrations in order
///
/// Migrations already recorded in `_sqlx_migrations` are skipped, so calling
/// this on an initialized database is a no-op.
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::SqlitePool;
/// use paged_list_sqlite::repository::db_init::init_database;
///
/// # async fn example(pool: &SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}

/// Remove every person row and restart id assignment at 1
pub async fn reset_database(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(
        r#"
        DELETE FROM person;
        DELETE FROM sqlite_sequence WHERE name = 'person';
        "#,
    )
    .execute(pool)
    .await?;
    tracing::debug!("person table reset");
    Ok(())
}
