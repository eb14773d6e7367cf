//! Workgroup hierarchy: forest construction and breadcrumb resolution.
//!
//! Both operations are pure functions over a flat snapshot of
//! [`WorkgroupRecord`]s. The snapshot is fetched by the caller (see
//! [`crate::services::hierarchy_service`]) and nothing here performs I/O.

pub mod error;
pub mod path;
pub mod tree;

pub use error::HierarchyError;
pub use path::ancestor_path;
pub use tree::{build_tree, descendant_ids};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flat workgroup reference as stored: id, display name and optional parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkgroupRecord {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
}

impl WorkgroupRecord {
    pub fn new(id: i32, name: impl Into<String>, parent_id: Option<i32>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
        }
    }
}

/// A workgroup together with its nested children, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkgroupNode {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
    pub children: Vec<WorkgroupNode>,
}

impl WorkgroupNode {
    pub fn leaf(record: &WorkgroupRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            parent_id: record.parent_id,
            children: Vec::new(),
        }
    }

    /// The flat record this node was built from.
    pub fn record(&self) -> WorkgroupRecord {
        WorkgroupRecord::new(self.id, self.name.clone(), self.parent_id)
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(WorkgroupNode::size).sum::<usize>()
    }

    /// Depth-first search for the node with `id` inside this subtree.
    pub fn find(&self, id: i32) -> Option<&WorkgroupNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Pre-order walk yielding `(depth, node)` pairs, depth 0 for `self`.
    pub fn walk(&self) -> Vec<(usize, &WorkgroupNode)> {
        let mut out = Vec::new();
        self.walk_into(0, &mut out);
        out
    }

    fn walk_into<'a>(&'a self, depth: usize, out: &mut Vec<(usize, &'a WorkgroupNode)>) {
        out.push((depth, self));
        for child in &self.children {
            child.walk_into(depth + 1, out);
        }
    }
}

/// Total number of nodes across a forest.
pub fn forest_size(roots: &[WorkgroupNode]) -> usize {
    roots.iter().map(WorkgroupNode::size).sum()
}

/// Find a node anywhere in a forest.
pub fn find_in_forest(roots: &[WorkgroupNode], id: i32) -> Option<&WorkgroupNode> {
    roots.iter().find_map(|root| root.find(id))
}

/// Maps each id to its position in `records`, rejecting duplicate ids.
pub(crate) fn index_by_id(records: &[WorkgroupRecord]) -> Result<HashMap<i32, usize>, HierarchyError> {
    let mut index = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        if index.insert(record.id, position).is_some() {
            return Err(HierarchyError::DuplicateId(record.id));
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<WorkgroupNode> {
        let records = vec![
            WorkgroupRecord::new(1, "Board", None),
            WorkgroupRecord::new(2, "Finance", Some(1)),
            WorkgroupRecord::new(3, "Audit", Some(2)),
            WorkgroupRecord::new(4, "Events", None),
        ];
        build_tree(&records).unwrap()
    }

    #[test]
    fn size_counts_nested_nodes() {
        let forest = sample();
        assert_eq!(forest[0].size(), 3);
        assert_eq!(forest_size(&forest), 4);
    }

    #[test]
    fn find_descends_into_children() {
        let forest = sample();
        assert_eq!(find_in_forest(&forest, 3).map(|n| n.name.as_str()), Some("Audit"));
        assert!(find_in_forest(&forest, 9).is_none());
    }

    #[test]
    fn walk_is_preorder_with_depths() {
        let forest = sample();
        let walked: Vec<(usize, i32)> = forest[0].walk().into_iter().map(|(d, n)| (d, n.id)).collect();
        assert_eq!(walked, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn index_rejects_duplicates() {
        let records = vec![
            WorkgroupRecord::new(1, "A", None),
            WorkgroupRecord::new(1, "B", None),
        ];
        assert_eq!(index_by_id(&records), Err(HierarchyError::DuplicateId(1)));
    }
}
