use std::collections::HashSet;

use super::{index_by_id, HierarchyError, WorkgroupNode, WorkgroupRecord};

/// Build the workgroup forest from a flat list.
///
/// Every record is materialized before linking, so children may precede
/// their parent in `records`. Records whose `parent_id` is null or does not
/// resolve become roots. Children and roots keep input order.
///
/// Records that no root reaches can only sit on a parent cycle; the first of
/// them in input order is reported as [`HierarchyError::CyclicAncestry`].
pub fn build_tree(records: &[WorkgroupRecord]) -> Result<Vec<WorkgroupNode>, HierarchyError> {
    let index = index_by_id(records)?;

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut roots = Vec::new();

    for (position, record) in records.iter().enumerate() {
        match record.parent_id.and_then(|parent_id| index.get(&parent_id)) {
            Some(&parent) => children[parent].push(position),
            None => {
                if let Some(parent_id) = record.parent_id {
                    tracing::debug!(
                        "Workgroup {} references missing parent {}, treating as root",
                        record.id,
                        parent_id
                    );
                }
                roots.push(position);
            }
        }
    }

    let mut placed = vec![false; records.len()];
    let forest: Vec<WorkgroupNode> = roots
        .iter()
        .map(|&root| assemble(root, records, &children, &mut placed))
        .collect();

    if let Some(position) = placed.iter().position(|done| !done) {
        return Err(HierarchyError::CyclicAncestry(records[position].id));
    }

    Ok(forest)
}

fn assemble(
    position: usize,
    records: &[WorkgroupRecord],
    children: &[Vec<usize>],
    placed: &mut [bool],
) -> WorkgroupNode {
    placed[position] = true;
    let mut node = WorkgroupNode::leaf(&records[position]);
    node.children = children[position]
        .iter()
        .map(|&child| assemble(child, records, children, placed))
        .collect();
    node
}

/// Ids of every workgroup below `root_id` (not including `root_id`).
///
/// Used to refuse re-parenting a workgroup under one of its own descendants.
pub fn descendant_ids(root_id: i32, records: &[WorkgroupRecord]) -> HashSet<i32> {
    let mut found = HashSet::new();
    let mut frontier = vec![root_id];

    while let Some(current) = frontier.pop() {
        for record in records.iter().filter(|r| r.parent_id == Some(current)) {
            if record.id != root_id && found.insert(record.id) {
                frontier.push(record.id);
            }
        }
    }

    found
}
