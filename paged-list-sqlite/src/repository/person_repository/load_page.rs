use async_trait::async_trait;
use paged_list_api::{PageRequest, PagedList};
use paged_list_db::models::person::PersonModel;
use paged_list_db::repository::load_page::LoadPage;
use paged_list_db::repository::paging_strategy::PagingStrategy;
use sqlx::{Row, Sqlite};
use std::error::Error;

use super::repo_impl::{PersonRepositoryImpl, BATCHED_WINDOW_QUERY};
use crate::utils::{bound_to_i64, count_to_usize, TryFromRow};

impl PersonRepositoryImpl {
    pub(super) async fn load_page_impl(
        repo: &PersonRepositoryImpl,
        request: PageRequest,
        strategy: PagingStrategy,
    ) -> Result<PagedList<PersonModel>, Box<dyn Error + Send + Sync>> {
        let (items, total) = match strategy {
            PagingStrategy::Sequential => Self::load_sequential(repo, request).await?,
            PagingStrategy::Transactional => Self::load_transactional(repo, request).await?,
            PagingStrategy::Concurrent => Self::load_concurrent(repo, request).await?,
            PagingStrategy::Batched => Self::load_batched(repo, request).await?,
        };

        let page = PagedList::new(items, total, request);
        if let Err(e) = page.verify() {
            tracing::warn!(%strategy, page_number = request.page_number(), error = %e, "page does not match count");
        }
        tracing::debug!(
            %strategy,
            page_number = request.page_number(),
            page_size = request.page_size(),
            total,
            rows = page.len(),
            "loaded page"
        );

        Ok(page)
    }

    /// Count, then fetch, each on whichever pooled connection is free
    async fn load_sequential(
        repo: &PersonRepositoryImpl,
        request: PageRequest,
    ) -> Result<(Vec<PersonModel>, usize), Box<dyn Error + Send + Sync>> {
        let total = Self::count_with(&*repo.pool).await?;
        let items = Self::fetch_window_with(&*repo.pool, request).await?;
        Ok((items, total))
    }

    /// Count and fetch inside one transaction so both read the same snapshot
    async fn load_transactional(
        repo: &PersonRepositoryImpl,
        request: PageRequest,
    ) -> Result<(Vec<PersonModel>, usize), Box<dyn Error + Send + Sync>> {
        let mut tx = repo.pool.begin().await?;
        let total = Self::count_with(&mut *tx).await?;
        let items = Self::fetch_window_with(&mut *tx, request).await?;
        tx.commit().await?;
        Ok((items, total))
    }

    /// Issue count and fetch at once on two pooled connections
    async fn load_concurrent(
        repo: &PersonRepositoryImpl,
        request: PageRequest,
    ) -> Result<(Vec<PersonModel>, usize), Box<dyn Error + Send + Sync>> {
        let (total, items) = tokio::try_join!(
            Self::count_with(&*repo.pool),
            Self::fetch_window_with(&*repo.pool, request),
        )?;
        Ok((items, total))
    }

    /// Fetch the window with the total attached to every row
    ///
    /// A window past the end carries no rows and therefore no total; only
    /// then is a separate count issued.
    async fn load_batched(
        repo: &PersonRepositoryImpl,
        request: PageRequest,
    ) -> Result<(Vec<PersonModel>, usize), Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(BATCHED_WINDOW_QUERY)
            .bind(bound_to_i64(request.limit()))
            .bind(bound_to_i64(request.offset()))
            .fetch_all(&*repo.pool)
            .await?;

        let total = match rows.first() {
            Some(row) => count_to_usize(row.try_get::<i64, _>("total_count")?)?,
            None => {
                tracing::debug!(page_number = request.page_number(), "empty window, counting separately");
                Self::count_with(&*repo.pool).await?
            }
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(PersonModel::try_from_row(&row)?);
        }

        Ok((items, total))
    }
}

#[async_trait]
impl LoadPage<Sqlite, PersonModel> for PersonRepositoryImpl {
    async fn load_page(
        &self,
        request: PageRequest,
        strategy: PagingStrategy,
    ) -> Result<PagedList<PersonModel>, Box<dyn Error + Send + Sync>> {
        Self::load_page_impl(self, request, strategy).await
    }
}
