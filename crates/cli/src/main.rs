//! Herald CLI
//!
//! Send, route, and preview webhook messages from the command line.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use herald_core::DetectionMode;
use herald_router::{Router, RouterConfig};
use tracing_subscriber::{EnvFilter, fmt};

/// Herald CLI: deliver Slack-style messages to any supported chat webhook.
#[derive(Parser, Debug)]
#[command(name = "herald", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, env = "HERALD_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Force the destination platform instead of detecting it from the URL.
    #[arg(long, env = "WEBHOOK_DEFAULT_PLATFORM", global = true)]
    platform: Option<String>,

    /// Detect platforms from the host only, ignoring the `/hooks/` path shape.
    #[arg(long, global = true)]
    host_only_detection: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Deliver a message to a webhook.
    Send(commands::send::SendArgs),
    /// Print the platform a webhook URL resolves to.
    Detect(commands::detect::DetectArgs),
    /// Print the payload that would be posted, without sending it.
    Render(commands::render::RenderArgs),
}

impl Cli {
    fn router_config(&self) -> anyhow::Result<RouterConfig> {
        let mut config = match &self.config {
            Some(path) => RouterConfig::load(path)?,
            None => RouterConfig::default(),
        };
        if let Some(platform) = &self.platform {
            config = config.with_default_platform(platform.clone());
        }
        if self.host_only_detection {
            config = config.with_detection(DetectionMode::HostOnly);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let router = Router::new(cli.router_config()?)?;

    match &cli.command {
        Command::Send(args) => commands::send::run(&router, args).await,
        Command::Detect(args) => commands::detect::run(&router, args),
        Command::Render(args) => commands::render::run(&router, cli.platform.as_deref(), args),
    }
}
