use chrono::NaiveDate;
use sqlx::PgPool;

use crate::database::models::{Membership, MembershipInput, Workgroup};
use crate::database::repository::{not_found, Repository};
use crate::services::ServiceError;

pub struct MembershipService {
    pool: PgPool,
}

impl MembershipService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn repo(&self) -> Repository<Membership> {
        Repository::new(self.pool.clone())
    }

    pub async fn list(&self) -> Result<Vec<Membership>, ServiceError> {
        Ok(self.repo().select_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Membership, ServiceError> {
        Ok(self.repo().select_404(id).await?)
    }

    /// Memberships of a workgroup, optionally only those active on `active_on`
    pub async fn for_workgroup(
        &self,
        workgroup_id: i32,
        active_on: Option<NaiveDate>,
    ) -> Result<Vec<Membership>, ServiceError> {
        Repository::<Workgroup>::new(self.pool.clone())
            .select_404(workgroup_id)
            .await?;

        let mut memberships = self.repo().select_by("workgroup_id", workgroup_id).await?;
        if let Some(date) = active_on {
            memberships.retain(|m| m.is_active_on(date));
        }
        Ok(memberships)
    }

    pub async fn create(&self, input: &MembershipInput) -> Result<Membership, ServiceError> {
        let membership = sqlx::query_as::<_, Membership>(
            "INSERT INTO memberships (member_id, workgroup_id, role, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(input.member_id)
        .bind(input.workgroup_id)
        .bind(input.role.as_str())
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "Member {} joined workgroup {} as {}",
            membership.member_id,
            membership.workgroup_id,
            membership.role
        );
        Ok(membership)
    }

    pub async fn update(&self, id: i32, input: &MembershipInput) -> Result<Membership, ServiceError> {
        let membership = sqlx::query_as::<_, Membership>(
            "UPDATE memberships
             SET member_id = $2, workgroup_id = $3, role = $4, start_date = $5, end_date = $6,
                 updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(input.member_id)
        .bind(input.workgroup_id)
        .bind(input.role.as_str())
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found::<Membership>(id))?;

        Ok(membership)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        Ok(self.repo().delete_404(id).await?)
    }
}
