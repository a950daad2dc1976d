use async_trait::async_trait;
use paged_list_api::PageRequest;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for fetching one offset/limit window of a collection
///
/// Entities are returned ordered by their identifier so that consecutive
/// windows never overlap.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// let request = PageRequest::new(2, 100)?;
/// let rows = repo.fetch_window(request).await?; // rows 101..=200
/// ```
#[async_trait]
pub trait FetchWindow<DB: Database, T: Identifiable>: Send + Sync {
    /// Fetch the entities of one page
    ///
    /// # Arguments
    /// * `request` - Page to fetch, turned into `LIMIT` and `OFFSET`
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - At most `request.limit()` entities, empty past the end
    /// * `Err` - An error if the query could not be executed
    async fn fetch_window(
        &self,
        request: PageRequest,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
