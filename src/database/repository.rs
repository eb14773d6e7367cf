use serde::Serialize;
use sqlx::{postgres::PgRow, FromRow, PgPool};

use crate::database::manager::DatabaseError;

/// A table whose rows map onto `Self`. `TABLE` is a compile-time constant,
/// never user input, so it is safe to splice into SQL.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin + Serialize {
    const TABLE: &'static str;
    /// Human-readable name used in not-found messages
    const LABEL: &'static str;
}

/// Id-keyed reads and deletes shared by every entity
pub struct Repository<T> {
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Entity> Repository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn select_all(&self) -> Result<Vec<T>, DatabaseError> {
        let sql = format!("SELECT * FROM {} ORDER BY id", T::TABLE);
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Rows whose foreign key `column` equals `value`. `column` must be a
    /// literal from calling code.
    pub async fn select_by(&self, column: &'static str, value: i32) -> Result<Vec<T>, DatabaseError> {
        let sql = format!("SELECT * FROM {} WHERE {} = $1 ORDER BY id", T::TABLE, column);
        let rows = sqlx::query_as::<_, T>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn select_one(&self, id: i32) -> Result<Option<T>, DatabaseError> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", T::TABLE);
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn select_404(&self, id: i32) -> Result<T, DatabaseError> {
        self.select_one(id)
            .await?
            .ok_or_else(|| not_found::<T>(id))
    }

    pub async fn delete_404(&self, id: i32) -> Result<(), DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(not_found::<T>(id));
        }
        Ok(())
    }
}

pub fn not_found<T: Entity>(id: i32) -> DatabaseError {
    DatabaseError::NotFound(format!("{} {} not found", T::LABEL, id))
}
