use std::collections::{HashSet, VecDeque};

use super::{index_by_id, HierarchyError, WorkgroupRecord};

/// Resolve the breadcrumb for `target_id`: the top-most resolvable ancestor
/// first, the target itself last.
///
/// `None` or an id missing from `records` yields an empty path. The walk
/// stops at a null or unresolvable `parent_id`, and a revisited id fails
/// with [`HierarchyError::CyclicAncestry`].
pub fn ancestor_path(
    target_id: Option<i32>,
    records: &[WorkgroupRecord],
) -> Result<Vec<WorkgroupRecord>, HierarchyError> {
    let Some(target_id) = target_id else {
        return Ok(Vec::new());
    };

    let index = index_by_id(records)?;
    let mut path = VecDeque::new();
    let mut visited = HashSet::new();
    let mut current = index.get(&target_id).copied();

    while let Some(position) = current {
        let record = &records[position];
        if !visited.insert(record.id) {
            return Err(HierarchyError::CyclicAncestry(record.id));
        }
        path.push_front(record.clone());
        current = record.parent_id.and_then(|parent_id| index.get(&parent_id).copied());
    }

    Ok(path.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<WorkgroupRecord> {
        vec![
            WorkgroupRecord::new(1, "Root", None),
            WorkgroupRecord::new(2, "Child", Some(1)),
            WorkgroupRecord::new(3, "Grandchild", Some(2)),
        ]
    }

    fn ids(path: &[WorkgroupRecord]) -> Vec<i32> {
        path.iter().map(|r| r.id).collect()
    }

    #[test]
    fn none_gives_empty_path() {
        assert!(ancestor_path(None, &records()).unwrap().is_empty());
    }

    #[test]
    fn unknown_target_gives_empty_path() {
        assert!(ancestor_path(Some(42), &records()).unwrap().is_empty());
        assert!(ancestor_path(Some(1), &[]).unwrap().is_empty());
    }

    #[test]
    fn root_path_is_itself() {
        assert_eq!(ids(&ancestor_path(Some(1), &records()).unwrap()), vec![1]);
    }

    #[test]
    fn path_runs_top_down() {
        assert_eq!(ids(&ancestor_path(Some(3), &records()).unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn walk_stops_at_unresolvable_parent() {
        let records = vec![
            WorkgroupRecord::new(5, "Detached", Some(77)),
            WorkgroupRecord::new(6, "Leaf", Some(5)),
        ];
        assert_eq!(ids(&ancestor_path(Some(6), &records).unwrap()), vec![5, 6]);
    }

    #[test]
    fn cycle_fails_fast() {
        let records = vec![
            WorkgroupRecord::new(1, "A", Some(3)),
            WorkgroupRecord::new(2, "B", Some(1)),
            WorkgroupRecord::new(3, "C", Some(2)),
        ];
        assert_eq!(
            ancestor_path(Some(2), &records),
            Err(HierarchyError::CyclicAncestry(2))
        );
    }
}
