use async_trait::async_trait;
use paged_list_api::PageRequest;
use paged_list_db::models::person::PersonModel;
use paged_list_db::repository::fetch_window::FetchWindow;
use sqlx::Sqlite;
use std::error::Error;

use super::repo_impl::PersonRepositoryImpl;

impl PersonRepositoryImpl {
    pub(super) async fn fetch_window_impl(
        repo: &PersonRepositoryImpl,
        request: PageRequest,
    ) -> Result<Vec<PersonModel>, Box<dyn Error + Send + Sync>> {
        Self::fetch_window_with(&*repo.pool, request).await
    }
}

#[async_trait]
impl FetchWindow<Sqlite, PersonModel> for PersonRepositoryImpl {
    async fn fetch_window(
        &self,
        request: PageRequest,
    ) -> Result<Vec<PersonModel>, Box<dyn Error + Send + Sync>> {
        Self::fetch_window_impl(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::test_utils::create_test_people;
    use crate::test_helper::setup_test_context;
    use paged_list_api::PageRequest;
    use paged_list_db::repository::create_batch::CreateBatch;
    use paged_list_db::repository::fetch_window::FetchWindow;

    #[tokio::test]
    async fn test_fetch_window_pages_do_not_overlap() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let person_repo = ctx.person_repository();
        person_repo.create_batch(create_test_people(25)).await?;

        let first = person_repo.fetch_window(PageRequest::new(1, 10)?).await?;
        let second = person_repo.fetch_window(PageRequest::new(2, 10)?).await?;
        let third = person_repo.fetch_window(PageRequest::new(3, 10)?).await?;

        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), 10);
        assert_eq!(third.len(), 5);
        assert_eq!(first[0].id, 1);
        assert_eq!(second[0].id, 11);
        assert_eq!(third.last().map(|p| p.id), Some(25));

        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_window_past_end_is_empty() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let person_repo = ctx.person_repository();
        person_repo.create_batch(create_test_people(5)).await?;

        let rows = person_repo.fetch_window(PageRequest::new(4, 10)?).await?;
        assert!(rows.is_empty());

        Ok(())
    }
}
