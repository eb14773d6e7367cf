pub mod client;
pub mod commands;
pub mod render;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use client::ApiClient;

#[derive(Parser)]
#[command(name = "membership")]
#[command(about = "Membership CLI - browse workgroups and members of a Membership API server")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        env = "MEMBERSHIP_API_URL",
        default_value = "http://localhost:3000",
        help = "Base URL of the Membership API server"
    )]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Workgroup hierarchy and listings")]
    Workgroups {
        #[command(subcommand)]
        cmd: commands::workgroups::WorkgroupCommands,
    },

    #[command(about = "Member listings")]
    Members {
        #[command(subcommand)]
        cmd: commands::members::MemberCommands,
    },

    #[command(about = "Server status")]
    Server {
        #[command(subcommand)]
        cmd: commands::server::ServerCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(&cli.url)?;

    match cli.command {
        Commands::Workgroups { cmd } => commands::workgroups::handle(cmd, &client, output_format).await,
        Commands::Members { cmd } => commands::members::handle(cmd, &client, output_format).await,
        Commands::Server { cmd } => commands::server::handle(cmd, &client, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "membership",
            "workgroups",
            "path",
            "7",
            "--json",
            "--url",
            "http://api.example:9000",
        ])
        .unwrap();
        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Json));
        assert_eq!(cli.url, "http://api.example:9000");
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
