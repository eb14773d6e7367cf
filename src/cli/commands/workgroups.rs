use clap::Subcommand;

use crate::cli::client::ApiClient;
use crate::cli::render::{render_breadcrumb, render_tree};
use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::database::models::Workgroup;
use crate::hierarchy::{ancestor_path, build_tree, HierarchyError, WorkgroupRecord};
use crate::services::WorkgroupTree;

#[derive(Subcommand)]
pub enum WorkgroupCommands {
    #[command(about = "Show the workgroup hierarchy as an indented tree")]
    Tree {
        #[arg(long, help = "Workgroup to highlight; its breadcrumb is printed above the tree")]
        selected: Option<i32>,
    },

    #[command(about = "Show the breadcrumb from the root down to a workgroup")]
    Path {
        #[arg(help = "Workgroup ID")]
        id: i32,
    },

    #[command(about = "List all workgroups")]
    List,
}

pub async fn handle(cmd: WorkgroupCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        WorkgroupCommands::Tree { selected } => {
            // Nested JSON hits serde_json's depth limit on deep hierarchies,
            // so fetch the flat list and assemble locally
            let workgroups: Vec<Workgroup> = client.get_data("/api/workgroups").await?;
            let records: Vec<WorkgroupRecord> = workgroups.iter().map(WorkgroupRecord::from).collect();
            let tree = assemble(&records, selected)?;

            if tree.roots.is_empty() {
                return output_empty_collection(&output_format, "roots", "No workgroups defined");
            }

            match output_format {
                OutputFormat::Json => output_json(&tree),
                OutputFormat::Text => {
                    if !tree.breadcrumb.is_empty() {
                        println!("{}", render_breadcrumb(&tree.breadcrumb));
                        println!();
                    }
                    print!("{}", render_tree(&tree.roots, selected));
                    Ok(())
                }
            }
        }
        WorkgroupCommands::Path { id } => {
            let path: Vec<WorkgroupRecord> = client.get_data(&format!("/api/workgroups/{}/path", id)).await?;

            match output_format {
                OutputFormat::Json => output_json(&path),
                OutputFormat::Text => {
                    if path.is_empty() {
                        println!("Workgroup {} not found", id);
                    } else {
                        println!("{}", render_breadcrumb(&path));
                    }
                    Ok(())
                }
            }
        }
        WorkgroupCommands::List => {
            let workgroups: Vec<Workgroup> = client.get_data("/api/workgroups").await?;

            if workgroups.is_empty() {
                return output_empty_collection(&output_format, "workgroups", "No workgroups defined");
            }

            match output_format {
                OutputFormat::Json => output_json(&workgroups),
                OutputFormat::Text => {
                    println!("{:<6} {:<8} NAME", "ID", "PARENT");
                    for workgroup in &workgroups {
                        let parent = workgroup
                            .parent_id
                            .map(|id| id.to_string())
                            .unwrap_or_else(|| "-".to_string());
                        println!("{:<6} {:<8} {}", workgroup.id, parent, workgroup.name);
                    }
                    Ok(())
                }
            }
        }
    }
}

/// Same payload the server's `/api/workgroups/tree` answers with
fn assemble(records: &[WorkgroupRecord], selected: Option<i32>) -> Result<WorkgroupTree, HierarchyError> {
    Ok(WorkgroupTree {
        roots: build_tree(records)?,
        breadcrumb: ancestor_path(selected, records)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::render::render_tree;

    #[test]
    fn deep_hierarchy_assembles_from_flat_list() {
        let records: Vec<WorkgroupRecord> = (1..=300)
            .map(|id| WorkgroupRecord::new(id, format!("Level {}", id), (id > 1).then(|| id - 1)))
            .collect();
        let body = serde_json::to_string(&records).unwrap();
        let decoded: Vec<WorkgroupRecord> = serde_json::from_str(&body).unwrap();

        let tree = assemble(&decoded, Some(300)).unwrap();
        assert_eq!(tree.breadcrumb.len(), 300);

        let rendered = render_tree(&tree.roots, None);
        let last = rendered.lines().last().unwrap();
        assert_eq!(last, format!("{}Level 300 (#300)", "  ".repeat(299)));
    }
}
