use clap::Subcommand;

use crate::cli::client::ApiClient;
use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::database::models::Member;

#[derive(Subcommand)]
pub enum MemberCommands {
    #[command(about = "List all members")]
    List,
}

pub async fn handle(cmd: MemberCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        MemberCommands::List => {
            let members: Vec<Member> = client.get_data("/api/members").await?;

            if members.is_empty() {
                return output_empty_collection(&output_format, "members", "No members registered");
            }

            match output_format {
                OutputFormat::Json => output_json(&members),
                OutputFormat::Text => {
                    println!("{:<6} {:<30} EMAIL", "ID", "NAME");
                    for member in &members {
                        println!(
                            "{:<6} {:<30} {}",
                            member.id,
                            member.full_name(),
                            member.email.as_deref().unwrap_or("-")
                        );
                    }
                    Ok(())
                }
            }
        }
    }
}
