use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::repository::db_init::init_database;
use crate::repository::person_repository::PersonRepositoryImpl;

/// Default database: a private in-memory SQLite database shared by the pool
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

pub struct SqliteRepositories {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositories {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Open a pool on `database_url` and bring the schema up to date
    ///
    /// At least one connection is held open for the lifetime of the pool so
    /// that an in-memory database survives between queries.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use paged_list_sqlite::SqliteRepositories;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    /// let repos = SqliteRepositories::connect("sqlite::memory:", 4).await?;
    /// let person_repo = repos.person_repository();
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        init_database(&pool).await?;
        tracing::debug!(database_url, max_connections, "sqlite pool ready");

        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Build a PersonRepository sharing this pool
    pub fn person_repository(&self) -> Arc<PersonRepositoryImpl> {
        Arc::new(PersonRepositoryImpl::new(self.pool.clone()))
    }

    /// Close every pooled connection, dropping an in-memory database
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
