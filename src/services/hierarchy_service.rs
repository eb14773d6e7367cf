use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::sync::Arc;

use crate::database::DatabaseError;
use crate::hierarchy::{
    ancestor_path, build_tree, descendant_ids, find_in_forest, WorkgroupNode, WorkgroupRecord,
};
use crate::services::ServiceError;
use crate::validation::FieldErrors;

pub(crate) const SNAPSHOT_SQL: &str = "SELECT id, name, parent_id FROM workgroups ORDER BY id";

/// Source of the flat workgroup snapshot the hierarchy is built from
#[async_trait]
pub trait WorkgroupStore: Send + Sync {
    async fn list_records(&self) -> Result<Vec<WorkgroupRecord>, DatabaseError>;
}

/// Reads every workgroup from PostgreSQL, ordered by id
pub struct PgWorkgroupStore {
    pool: PgPool,
}

impl PgWorkgroupStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkgroupStore for PgWorkgroupStore {
    async fn list_records(&self) -> Result<Vec<WorkgroupRecord>, DatabaseError> {
        let records = sqlx::query_as::<_, WorkgroupRecord>(SNAPSHOT_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }
}

/// Fixed in-memory snapshot, for tests and offline rendering
#[derive(Debug, Clone, Default)]
pub struct StaticWorkgroupStore {
    records: Vec<WorkgroupRecord>,
}

impl StaticWorkgroupStore {
    pub fn new(records: Vec<WorkgroupRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl WorkgroupStore for StaticWorkgroupStore {
    async fn list_records(&self) -> Result<Vec<WorkgroupRecord>, DatabaseError> {
        Ok(self.records.clone())
    }
}

/// Navigation payload: the whole forest plus the breadcrumb of the
/// selected workgroup (empty when nothing is selected)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkgroupTree {
    pub roots: Vec<WorkgroupNode>,
    pub breadcrumb: Vec<WorkgroupRecord>,
}

pub struct HierarchyService {
    store: Arc<dyn WorkgroupStore>,
}

impl HierarchyService {
    pub fn new(store: Arc<dyn WorkgroupStore>) -> Self {
        Self { store }
    }

    async fn snapshot(&self) -> Result<Vec<WorkgroupRecord>, ServiceError> {
        Ok(self.store.list_records().await?)
    }

    pub async fn tree(&self, selected: Option<i32>) -> Result<WorkgroupTree, ServiceError> {
        let records = self.snapshot().await?;
        let roots = build_tree(&records)?;
        let breadcrumb = ancestor_path(selected, &records)?;
        tracing::debug!(
            "Built workgroup forest: {} roots from {} records",
            roots.len(),
            records.len()
        );
        Ok(WorkgroupTree { roots, breadcrumb })
    }

    pub async fn path(&self, id: i32) -> Result<Vec<WorkgroupRecord>, ServiceError> {
        let records = self.snapshot().await?;
        Ok(ancestor_path(Some(id), &records)?)
    }

    /// Direct children of `id`, in stored order
    pub async fn children(&self, id: i32) -> Result<Vec<WorkgroupRecord>, ServiceError> {
        let records = self.snapshot().await?;
        let roots = build_tree(&records)?;
        let node = find_in_forest(&roots, id)
            .ok_or_else(|| ServiceError::NotFound(format!("Workgroup {} not found", id)))?;
        Ok(node.children.iter().map(WorkgroupNode::record).collect())
    }

    /// Refuse parents that do not exist, or that would close a cycle when
    /// `id` (the workgroup being updated) is moved under them.
    ///
    /// This is an early answer from the current snapshot; updates repeat the
    /// check under a table lock before writing.
    pub async fn check_parent(&self, id: Option<i32>, parent_id: Option<i32>) -> Result<(), ServiceError> {
        let Some(parent_id) = parent_id else {
            return Ok(());
        };

        let records = self.snapshot().await?;
        Ok(parent_errors(id, parent_id, &records).into_result()?)
    }
}

/// Problems with placing workgroup `id` (`None` when creating) under
/// `parent_id`, judged against `records`
pub fn parent_errors(id: Option<i32>, parent_id: i32, records: &[WorkgroupRecord]) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(id) = id {
        if parent_id == id {
            errors.add("parent_id", "A workgroup cannot be its own parent");
        } else if descendant_ids(id, records).contains(&parent_id) {
            errors.add("parent_id", "Cannot move a workgroup under one of its descendants");
        }
    }
    if !records.iter().any(|r| r.id == parent_id) {
        errors.add("parent_id", format!("Parent workgroup {} does not exist", parent_id));
    }

    errors
}
