use sqlx::PgPool;

use crate::database::models::{Member, MemberInput, Membership};
use crate::database::repository::{not_found, Repository};
use crate::services::ServiceError;

pub struct MemberService {
    pool: PgPool,
}

impl MemberService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn repo(&self) -> Repository<Member> {
        Repository::new(self.pool.clone())
    }

    pub async fn list(&self) -> Result<Vec<Member>, ServiceError> {
        Ok(self.repo().select_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Member, ServiceError> {
        Ok(self.repo().select_404(id).await?)
    }

    pub async fn create(&self, input: &MemberInput) -> Result<Member, ServiceError> {
        let member = sqlx::query_as::<_, Member>(
            "INSERT INTO members (first_name, last_name, email, phone)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(input.first_name.trim())
        .bind(input.last_name.trim())
        .bind(input.email.as_deref().map(str::trim))
        .bind(&input.phone)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Created member {} ({})", member.id, member.full_name());
        Ok(member)
    }

    pub async fn update(&self, id: i32, input: &MemberInput) -> Result<Member, ServiceError> {
        let member = sqlx::query_as::<_, Member>(
            "UPDATE members
             SET first_name = $2, last_name = $3, email = $4, phone = $5, updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(input.first_name.trim())
        .bind(input.last_name.trim())
        .bind(input.email.as_deref().map(str::trim))
        .bind(&input.phone)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found::<Member>(id))?;

        Ok(member)
    }

    /// Memberships and attendance cascade; logbook authorship is cleared
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo().delete_404(id).await?;
        tracing::info!("Deleted member {}", id);
        Ok(())
    }

    pub async fn memberships(&self, id: i32) -> Result<Vec<Membership>, ServiceError> {
        self.repo().select_404(id).await?;
        let memberships = Repository::<Membership>::new(self.pool.clone())
            .select_by("member_id", id)
            .await?;
        Ok(memberships)
    }
}
