//! Test helper module for database-per-test isolation
//!
//! Every context gets its own in-memory SQLite database. The database lives
//! as long as the context's pool and disappears when it is dropped, so tests
//! never need explicit cleanup.

use crate::repository::person_repository::PersonRepositoryImpl;
use crate::sqlite_repositories::{SqliteRepositories, DEFAULT_DATABASE_URL};
use std::sync::Arc;

/// Test context holding a freshly migrated database
pub struct TestContext {
    pub repos: SqliteRepositories,
}

impl TestContext {
    pub fn repos(&self) -> &SqliteRepositories {
        &self.repos
    }

    pub fn person_repository(&self) -> Arc<PersonRepositoryImpl> {
        self.repos.person_repository()
    }
}

/// Setup a test context backed by a new in-memory database
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     let person_repo = ctx.person_repository();
///
///     // Perform test operations...
///
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let repos = SqliteRepositories::connect(DEFAULT_DATABASE_URL, 4).await?;
    Ok(TestContext { repos })
}
