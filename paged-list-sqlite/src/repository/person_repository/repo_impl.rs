use chrono::NaiveDate;
use paged_list_api::PageRequest;
use paged_list_db::models::person::PersonModel;
use sqlx::{sqlite::SqliteRow, Executor, Row, Sqlite, SqlitePool};
use std::error::Error;
use std::sync::Arc;

use crate::utils::{
    bound_to_i64, count_to_usize, get_heapless_string, get_optional_heapless_string, TryFromRow,
};

pub(super) const COUNT_QUERY: &str = r#"SELECT COUNT(*) AS count FROM person"#;

pub(super) const WINDOW_QUERY: &str = r#"
    SELECT id, phone, first_name, last_name, weight, height, date_of_birth
    FROM person
    ORDER BY id
    LIMIT ? OFFSET ?
"#;

pub(super) const BATCHED_WINDOW_QUERY: &str = r#"
    SELECT id, phone, first_name, last_name, weight, height, date_of_birth,
           COUNT(*) OVER () AS total_count
    FROM person
    ORDER BY id
    LIMIT ? OFFSET ?
"#;

pub struct PersonRepositoryImpl {
    pub pool: Arc<SqlitePool>,
}

impl PersonRepositoryImpl {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Count every person through any executor, pool or open transaction
    pub(super) async fn count_with<'e, E>(executor: E) -> Result<usize, Box<dyn Error + Send + Sync>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let total: i64 = sqlx::query_scalar(COUNT_QUERY).fetch_one(executor).await?;
        count_to_usize(total)
    }

    /// Fetch one window of people ordered by id through any executor
    pub(super) async fn fetch_window_with<'e, E>(
        executor: E,
        request: PageRequest,
    ) -> Result<Vec<PersonModel>, Box<dyn Error + Send + Sync>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query(WINDOW_QUERY)
            .bind(bound_to_i64(request.limit()))
            .bind(bound_to_i64(request.offset()))
            .fetch_all(executor)
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(PersonModel::try_from_row(&row)?);
        }
        Ok(items)
    }
}

impl TryFromRow<SqliteRow> for PersonModel {
    fn try_from_row(row: &SqliteRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PersonModel {
            id: row.try_get("id")?,
            phone: get_optional_heapless_string(row, "phone")?,
            first_name: get_heapless_string(row, "first_name")?,
            last_name: get_heapless_string(row, "last_name")?,
            weight: row.try_get("weight")?,
            height: row.try_get("height")?,
            date_of_birth: row.try_get::<Option<NaiveDate>, _>("date_of_birth")?,
        })
    }
}
