use async_trait::async_trait;
use paged_list_api::{PageRequest, PagedList};
use sqlx::Database;

use crate::models::identifiable::Identifiable;
use crate::repository::paging_strategy::PagingStrategy;

/// Generic repository trait for loading a complete page with its metadata
///
/// Combines a count and a window fetch. How the two reads are issued is
/// chosen by the [`PagingStrategy`]; every strategy must produce the same
/// page for the same data.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// let request = PageRequest::new(1, 100)?;
/// let page = repo.load_page(request, PagingStrategy::Concurrent).await?;
/// println!("Page {} of {}", page.metadata().page_number, page.metadata().page_count);
/// ```
#[async_trait]
pub trait LoadPage<DB: Database, T: Identifiable>: Send + Sync {
    /// Load one page of the collection
    ///
    /// # Arguments
    /// * `request` - The page to load
    /// * `strategy` - How the count and the window fetch are executed
    ///
    /// # Returns
    /// * `Ok(PagedList<T>)` - The page with its metadata
    /// * `Err` - An error if either read failed
    async fn load_page(
        &self,
        request: PageRequest,
        strategy: PagingStrategy,
    ) -> Result<PagedList<T>, Box<dyn std::error::Error + Send + Sync>>;
}
