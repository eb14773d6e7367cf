use clap::Subcommand;
use serde_json::Value;

use crate::cli::client::ApiClient;
use crate::cli::utils::*;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Check server health status from API /health endpoint")]
    Health,
}

pub async fn handle(cmd: ServerCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Health => {
            // /health answers 503 with an error body when the database is down
            let (status, body) = client.get_json("/health").await?;

            match output_format {
                OutputFormat::Json => output_json(&body),
                OutputFormat::Text => {
                    let state = body
                        .pointer("/data/status")
                        .and_then(Value::as_str)
                        .unwrap_or("unavailable");
                    println!("Server:   {}", client.endpoint("/")?);
                    println!("Status:   {} ({})", state, status);
                    if let Some(message) = body.get("message").and_then(Value::as_str) {
                        println!("Message:  {}", message);
                    }
                    Ok(())
                }
            }?;

            if !status.is_success() {
                anyhow::bail!("server reported {}", status);
            }
            Ok(())
        }
    }
}
