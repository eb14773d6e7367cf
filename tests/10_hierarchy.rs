use membership_api::hierarchy::{
    ancestor_path, build_tree, forest_size, HierarchyError, WorkgroupNode, WorkgroupRecord,
};

fn root_and_child() -> Vec<WorkgroupRecord> {
    vec![
        WorkgroupRecord::new(1, "Root", None),
        WorkgroupRecord::new(2, "Child", Some(1)),
    ]
}

fn expected_root_and_child() -> Vec<WorkgroupNode> {
    let mut root = WorkgroupNode::leaf(&WorkgroupRecord::new(1, "Root", None));
    root.children.push(WorkgroupNode::leaf(&WorkgroupRecord::new(2, "Child", Some(1))));
    vec![root]
}

fn ids(path: &[WorkgroupRecord]) -> Vec<i32> {
    path.iter().map(|r| r.id).collect()
}

#[test]
fn child_nests_under_root() {
    assert_eq!(build_tree(&root_and_child()).unwrap(), expected_root_and_child());
}

#[test]
fn child_listed_before_parent_nests_the_same_way() {
    let records = vec![
        WorkgroupRecord::new(2, "Child", Some(1)),
        WorkgroupRecord::new(1, "Root", None),
    ];
    assert_eq!(build_tree(&records).unwrap(), expected_root_and_child());
}

#[test]
fn missing_parent_is_treated_as_root() {
    let records = vec![WorkgroupRecord::new(1, "A", Some(99))];
    let forest = build_tree(&records).unwrap();

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].id, 1);
    assert_eq!(forest[0].parent_id, Some(99));
    assert!(forest[0].children.is_empty());
}

#[test]
fn path_to_child_starts_at_root() {
    let path = ancestor_path(Some(2), &root_and_child()).unwrap();
    assert_eq!(ids(&path), vec![1, 2]);
}

#[test]
fn path_without_target_is_empty() {
    assert!(ancestor_path(None, &root_and_child()).unwrap().is_empty());
}

#[test]
fn path_to_unknown_id_is_empty() {
    assert!(ancestor_path(Some(42), &root_and_child()).unwrap().is_empty());
}

#[test]
fn every_record_appears_exactly_once() {
    let records = vec![
        WorkgroupRecord::new(7, "Outreach", None),
        WorkgroupRecord::new(3, "Audit", Some(2)),
        WorkgroupRecord::new(1, "Board", None),
        WorkgroupRecord::new(2, "Finance", Some(1)),
        WorkgroupRecord::new(9, "Orphan", Some(404)),
        WorkgroupRecord::new(4, "Events", Some(1)),
    ];
    let forest = build_tree(&records).unwrap();

    assert_eq!(forest_size(&forest), records.len());
    let mut seen: Vec<i32> = forest
        .iter()
        .flat_map(|root| root.walk())
        .map(|(_, node)| node.id)
        .collect();
    seen.sort();
    assert_eq!(seen, vec![1, 2, 3, 4, 7, 9]);
}

#[test]
fn roots_and_siblings_keep_input_order() {
    let records = vec![
        WorkgroupRecord::new(10, "Zeta", None),
        WorkgroupRecord::new(12, "Second child", Some(11)),
        WorkgroupRecord::new(11, "Alpha", None),
        WorkgroupRecord::new(13, "Third child", Some(11)),
        WorkgroupRecord::new(14, "First child", Some(11)),
    ];
    let forest = build_tree(&records).unwrap();

    let roots: Vec<i32> = forest.iter().map(|n| n.id).collect();
    assert_eq!(roots, vec![10, 11]);
    let children: Vec<i32> = forest[1].children.iter().map(|n| n.id).collect();
    assert_eq!(children, vec![12, 13, 14]);
}

#[test]
fn every_path_step_is_the_parent_of_the_next() {
    let records = vec![
        WorkgroupRecord::new(1, "Board", None),
        WorkgroupRecord::new(2, "Finance", Some(1)),
        WorkgroupRecord::new(3, "Audit", Some(2)),
        WorkgroupRecord::new(4, "Internal audit", Some(3)),
    ];
    let path = ancestor_path(Some(4), &records).unwrap();

    assert_eq!(ids(&path), vec![1, 2, 3, 4]);
    assert_eq!(path[0].parent_id, None);
    for pair in path.windows(2) {
        assert_eq!(pair[1].parent_id, Some(pair[0].id));
    }
}

#[test]
fn path_stops_at_unresolvable_parent() {
    let records = vec![
        WorkgroupRecord::new(5, "Detached", Some(99)),
        WorkgroupRecord::new(6, "Leaf", Some(5)),
    ];
    assert_eq!(ids(&ancestor_path(Some(6), &records).unwrap()), vec![5, 6]);
}

#[test]
fn inputs_are_not_modified() {
    let records = root_and_child();
    let before = records.clone();
    build_tree(&records).unwrap();
    ancestor_path(Some(2), &records).unwrap();
    assert_eq!(records, before);
}

#[test]
fn cycles_and_duplicates_are_reported() {
    let cyclic = vec![
        WorkgroupRecord::new(1, "Root", None),
        WorkgroupRecord::new(2, "A", Some(3)),
        WorkgroupRecord::new(3, "B", Some(2)),
    ];
    assert!(matches!(build_tree(&cyclic), Err(HierarchyError::CyclicAncestry(_))));
    assert!(matches!(ancestor_path(Some(2), &cyclic), Err(HierarchyError::CyclicAncestry(_))));

    let duplicated = vec![
        WorkgroupRecord::new(1, "Root", None),
        WorkgroupRecord::new(1, "Root again", None),
    ];
    assert_eq!(build_tree(&duplicated), Err(HierarchyError::DuplicateId(1)));
}
