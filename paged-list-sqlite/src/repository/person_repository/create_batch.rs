use async_trait::async_trait;
use paged_list_db::models::person::PersonModel;
use paged_list_db::repository::create_batch::CreateBatch;
use sqlx::Sqlite;
use std::error::Error;

use super::repo_impl::PersonRepositoryImpl;

impl PersonRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &PersonRepositoryImpl,
        items: Vec<PersonModel>,
    ) -> Result<Vec<PersonModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut saved_items = Vec::with_capacity(items.len());
        let mut tx = repo.pool.begin().await?;

        for mut item in items {
            let result = sqlx::query(
                r#"
                INSERT INTO person
                (phone, first_name, last_name, weight, height, date_of_birth)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(item.phone.as_deref())
            .bind(item.first_name.as_str())
            .bind(item.last_name.as_str())
            .bind(item.weight)
            .bind(item.height)
            .bind(item.date_of_birth)
            .execute(&mut *tx)
            .await?;

            item.id = result.last_insert_rowid();
            saved_items.push(item);
        }

        tx.commit().await?;
        tracing::debug!(count = saved_items.len(), "created person rows");

        Ok(saved_items)
    }
}

#[async_trait]
impl CreateBatch<Sqlite, PersonModel> for PersonRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<PersonModel>,
    ) -> Result<Vec<PersonModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
