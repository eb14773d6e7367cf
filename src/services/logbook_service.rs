use chrono::Utc;
use sqlx::PgPool;

use crate::database::models::{LogbookEntry, LogbookInput, Workgroup};
use crate::database::repository::{not_found, Repository};
use crate::services::ServiceError;

pub struct LogbookService {
    pool: PgPool,
}

impl LogbookService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn repo(&self) -> Repository<LogbookEntry> {
        Repository::new(self.pool.clone())
    }

    pub async fn list(&self) -> Result<Vec<LogbookEntry>, ServiceError> {
        Ok(self.repo().select_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<LogbookEntry, ServiceError> {
        Ok(self.repo().select_404(id).await?)
    }

    pub async fn for_workgroup(&self, workgroup_id: i32) -> Result<Vec<LogbookEntry>, ServiceError> {
        Repository::<Workgroup>::new(self.pool.clone())
            .select_404(workgroup_id)
            .await?;
        Ok(self.repo().select_by("workgroup_id", workgroup_id).await?)
    }

    pub async fn create(&self, input: &LogbookInput) -> Result<LogbookEntry, ServiceError> {
        let entry_date = input.entry_date.unwrap_or_else(|| Utc::now().date_naive());
        let entry = sqlx::query_as::<_, LogbookEntry>(
            "INSERT INTO logbook_entries (workgroup_id, member_id, entry_date, text)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(input.workgroup_id)
        .bind(input.member_id)
        .bind(entry_date)
        .bind(input.text.trim())
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    pub async fn update(&self, id: i32, input: &LogbookInput) -> Result<LogbookEntry, ServiceError> {
        let entry = sqlx::query_as::<_, LogbookEntry>(
            "UPDATE logbook_entries
             SET workgroup_id = $2, member_id = $3, entry_date = COALESCE($4, entry_date),
                 text = $5, updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(input.workgroup_id)
        .bind(input.member_id)
        .bind(input.entry_date)
        .bind(input.text.trim())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found::<LogbookEntry>(id))?;

        Ok(entry)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        Ok(self.repo().delete_404(id).await?)
    }
}
