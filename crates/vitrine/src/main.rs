//! Vitrine CLI - artifact rendering services.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Render and serve self-contained artifact documents")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to vitrine.toml config file
    #[arg(short, long, default_value = "vitrine.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the artifact store service
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,

        /// Directory rendered documents are written to
        #[arg(short, long)]
        artifacts_dir: Option<PathBuf>,

        /// Open the artifact listing in a browser
        #[arg(long)]
        open: bool,
    },

    /// Run the chat gateway
    Chat {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Base URL of the artifact service
        #[arg(long)]
        artifact_service: Option<String>,
    },

    /// Render a single artifact descriptor to disk
    Render {
        /// Artifact id
        #[arg(long)]
        id: String,

        /// Wire content type (text/html, application/vnd.ant.react,
        /// application/vnd.ant.code)
        #[arg(long = "type")]
        content_type: String,

        /// File containing the payload
        payload: PathBuf,

        /// Language tag for source listings
        #[arg(long)]
        language: Option<String>,

        /// Declared component export for component artifacts
        #[arg(long)]
        component: Option<String>,

        /// Output directory
        #[arg(short, long, default_value = "artifacts")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Serve {
            port,
            artifacts_dir,
            open,
        } => {
            commands::serve::run(&cli.config, port, artifacts_dir, open).await?;
        }
        Commands::Chat {
            port,
            artifact_service,
        } => {
            commands::chat::run(&cli.config, port, artifact_service).await?;
        }
        Commands::Render {
            id,
            content_type,
            payload,
            language,
            component,
            output,
        } => {
            commands::render::run(id, content_type, payload, language, component, output).await?;
        }
    }

    Ok(())
}
