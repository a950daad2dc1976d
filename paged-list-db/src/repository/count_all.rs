use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for counting every entity of a collection
///
/// This is the "count matching rows" half of a paged read. The result feeds
/// the pagination metadata of a page fetched with [`FetchWindow`].
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl CountAll<Sqlite, PersonModel> for PersonRepositoryImpl {
///     async fn count_all(&self) -> Result<usize, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
///
/// [`FetchWindow`]: crate::repository::fetch_window::FetchWindow
#[async_trait]
pub trait CountAll<DB: Database, T: Identifiable>: Send + Sync {
    /// Count all entities in the collection
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of stored entities
    /// * `Err` - An error if the query could not be executed
    async fn count_all(&self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
