//! Plain-text presentation of the workgroup hierarchy.

use crate::hierarchy::{WorkgroupNode, WorkgroupRecord};

const INDENT: &str = "  ";

/// One line per workgroup, indented two spaces per level, pre-order.
/// The selected workgroup, if any, is marked with `*`.
pub fn render_tree(roots: &[WorkgroupNode], selected: Option<i32>) -> String {
    let mut out = String::new();
    for root in roots {
        for (depth, node) in root.walk() {
            let marker = if Some(node.id) == selected { "* " } else { "" };
            out.push_str(&INDENT.repeat(depth));
            out.push_str(&format!("{}{} (#{})\n", marker, node.name, node.id));
        }
    }
    out
}

/// `Root / Child / Selected`, or an empty string for an empty path
pub fn render_breadcrumb(path: &[WorkgroupRecord]) -> String {
    path.iter()
        .map(|record| record.name.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::{ancestor_path, build_tree};

    fn records() -> Vec<WorkgroupRecord> {
        vec![
            WorkgroupRecord::new(1, "Board", None),
            WorkgroupRecord::new(2, "Finance", Some(1)),
            WorkgroupRecord::new(3, "Audit", Some(2)),
            WorkgroupRecord::new(4, "Events", None),
        ]
    }

    #[test]
    fn tree_indents_by_depth() {
        let forest = build_tree(&records()).unwrap();
        assert_eq!(
            render_tree(&forest, None),
            "Board (#1)\n  Finance (#2)\n    Audit (#3)\nEvents (#4)\n"
        );
    }

    #[test]
    fn tree_marks_selection() {
        let forest = build_tree(&records()).unwrap();
        assert!(render_tree(&forest, Some(2)).contains("  * Finance (#2)\n"));
    }

    #[test]
    fn breadcrumb_joins_names() {
        let path = ancestor_path(Some(3), &records()).unwrap();
        assert_eq!(render_breadcrumb(&path), "Board / Finance / Audit");
        assert_eq!(render_breadcrumb(&[]), "");
    }
}
