use sqlx::PgPool;

use crate::database::models::{Attendance, AttendanceInput, Meeting, MeetingInput, Workgroup};
use crate::database::repository::{not_found, Repository};
use crate::services::ServiceError;

/// Meetings and the attendance recorded against them
pub struct MeetingService {
    pool: PgPool,
}

impl MeetingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn repo(&self) -> Repository<Meeting> {
        Repository::new(self.pool.clone())
    }

    pub async fn list(&self) -> Result<Vec<Meeting>, ServiceError> {
        Ok(self.repo().select_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Meeting, ServiceError> {
        Ok(self.repo().select_404(id).await?)
    }

    pub async fn for_workgroup(&self, workgroup_id: i32) -> Result<Vec<Meeting>, ServiceError> {
        Repository::<Workgroup>::new(self.pool.clone())
            .select_404(workgroup_id)
            .await?;
        Ok(self.repo().select_by("workgroup_id", workgroup_id).await?)
    }

    pub async fn create(&self, input: &MeetingInput) -> Result<Meeting, ServiceError> {
        let meeting = sqlx::query_as::<_, Meeting>(
            "INSERT INTO meetings (workgroup_id, title, location, starts_at, ends_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(input.workgroup_id)
        .bind(input.title.trim())
        .bind(&input.location)
        .bind(input.starts_at)
        .bind(input.ends_at)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Scheduled meeting {} for workgroup {}", meeting.id, meeting.workgroup_id);
        Ok(meeting)
    }

    pub async fn update(&self, id: i32, input: &MeetingInput) -> Result<Meeting, ServiceError> {
        let meeting = sqlx::query_as::<_, Meeting>(
            "UPDATE meetings
             SET workgroup_id = $2, title = $3, location = $4, starts_at = $5, ends_at = $6,
                 updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(input.workgroup_id)
        .bind(input.title.trim())
        .bind(&input.location)
        .bind(input.starts_at)
        .bind(input.ends_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found::<Meeting>(id))?;

        Ok(meeting)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        Ok(self.repo().delete_404(id).await?)
    }

    pub async fn attendance(&self, meeting_id: i32) -> Result<Vec<Attendance>, ServiceError> {
        self.repo().select_404(meeting_id).await?;
        let records = Repository::<Attendance>::new(self.pool.clone())
            .select_by("meeting_id", meeting_id)
            .await?;
        Ok(records)
    }

    /// Insert or replace the attendance of one member at one meeting
    pub async fn record_attendance(&self, input: &AttendanceInput) -> Result<Attendance, ServiceError> {
        let attendance = sqlx::query_as::<_, Attendance>(
            "INSERT INTO attendance (meeting_id, member_id, status, note)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (meeting_id, member_id)
             DO UPDATE SET status = EXCLUDED.status, note = EXCLUDED.note
             RETURNING *",
        )
        .bind(input.meeting_id)
        .bind(input.member_id)
        .bind(input.status.as_str())
        .bind(&input.note)
        .fetch_one(&self.pool)
        .await?;

        Ok(attendance)
    }

    pub async fn delete_attendance(&self, id: i32) -> Result<(), ServiceError> {
        Ok(Repository::<Attendance>::new(self.pool.clone())
            .delete_404(id)
            .await?)
    }
}
