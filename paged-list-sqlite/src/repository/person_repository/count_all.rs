use async_trait::async_trait;
use paged_list_db::models::person::PersonModel;
use paged_list_db::repository::count_all::CountAll;
use sqlx::Sqlite;
use std::error::Error;

use super::repo_impl::PersonRepositoryImpl;

impl PersonRepositoryImpl {
    pub(super) async fn count_all_impl(
        repo: &PersonRepositoryImpl,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let total = Self::count_with(&*repo.pool).await?;
        tracing::debug!(total, "counted person rows");
        Ok(total)
    }
}

#[async_trait]
impl CountAll<Sqlite, PersonModel> for PersonRepositoryImpl {
    async fn count_all(&self) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::count_all_impl(self).await
    }
}
