use sqlx::PgPool;

use crate::database::models::{Workgroup, WorkgroupInput};
use crate::database::repository::{not_found, Repository};
use crate::hierarchy::WorkgroupRecord;
use crate::services::hierarchy_service::{parent_errors, SNAPSHOT_SQL};
use crate::services::ServiceError;

pub struct WorkgroupService {
    pool: PgPool,
}

impl WorkgroupService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn repo(&self) -> Repository<Workgroup> {
        Repository::new(self.pool.clone())
    }

    pub async fn list(&self) -> Result<Vec<Workgroup>, ServiceError> {
        Ok(self.repo().select_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Workgroup, ServiceError> {
        Ok(self.repo().select_404(id).await?)
    }

    pub async fn create(&self, input: &WorkgroupInput) -> Result<Workgroup, ServiceError> {
        let workgroup = sqlx::query_as::<_, Workgroup>(
            "INSERT INTO workgroups (name, parent_id, description)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(input.name.trim())
        .bind(input.parent_id)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Created workgroup {} '{}'", workgroup.id, workgroup.name);
        Ok(workgroup)
    }

    /// Replace a workgroup. The parent is re-checked against the rows as they
    /// stand under `SHARE ROW EXCLUSIVE`, so two crossing moves cannot both
    /// commit and leave a cycle behind.
    pub async fn update(&self, id: i32, input: &WorkgroupInput) -> Result<Workgroup, ServiceError> {
        let mut tx = self.pool.begin().await?;

        if let Some(parent_id) = input.parent_id {
            sqlx::query("LOCK TABLE workgroups IN SHARE ROW EXCLUSIVE MODE")
                .execute(&mut *tx)
                .await?;
            let records = sqlx::query_as::<_, WorkgroupRecord>(SNAPSHOT_SQL)
                .fetch_all(&mut *tx)
                .await?;
            parent_errors(Some(id), parent_id, &records).into_result()?;
        }

        let workgroup = sqlx::query_as::<_, Workgroup>(
            "UPDATE workgroups
             SET name = $2, parent_id = $3, description = $4, updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(input.name.trim())
        .bind(input.parent_id)
        .bind(&input.description)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found::<Workgroup>(id))?;

        tx.commit().await?;
        Ok(workgroup)
    }

    /// Children are kept and become roots (parent_id is set to NULL)
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo().delete_404(id).await?;
        tracing::info!("Deleted workgroup {}", id);
        Ok(())
    }
}
