//! CLI entry point for the social graph console.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use social_cli::error::startup_failure_message;
use social_cli::run_menu;
use social_core::SocialConfig;
use social_graph::{GraphClient, GraphConfig};

#[derive(Parser)]
#[command(name = "social-cli")]
#[command(about = "Interactive console for people and friendships stored in Neo4j")]
struct Cli {
    /// Config file prefix (default: social).
    #[arg(short, long, default_value = "social")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = SocialConfig::load(&cli.config)?;
    let graph_config = GraphConfig::from(&config.neo4j);

    let client = match GraphClient::connect(&graph_config).await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(uri = %graph_config.uri, error = %e, "Startup connection failed");
            println!("{}", startup_failure_message(&e));
            return Ok(());
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = run_menu(&client, &mut stdin.lock(), &mut stdout.lock()).await;

    client.close();
    result?;
    Ok(())
}
