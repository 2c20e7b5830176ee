//! Framelight batch tools
//!
//! One-off maintenance commands for the content databases:
//! - Pushing EXIF from local image files into the gallery rows
//! - Recomputing stored read times from post bodies
//! - Moving expiring CMS-hosted images to stable Cloudinary URLs

mod client;
mod commands;
mod exif;
mod text;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use client::NotionClient;

#[derive(Parser)]
#[command(name = "framelight-tools", about = "Batch maintenance for the Framelight content databases")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read EXIF from local image files and write it into gallery rows
    SyncExif {
        /// Directory to scan for image files
        dir: PathBuf,
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Recompute read times from post bodies
    UpdateReadTimes {
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Re-host CMS-hosted gallery images on Cloudinary
    MigrateImages {
        /// Cloudinary cloud name
        #[arg(long)]
        cloud: String,
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = NotionClient::from_env()?;

    match cli.command {
        Command::SyncExif { dir, dry_run } => commands::sync_exif(&client, &dir, dry_run).await,
        Command::UpdateReadTimes { dry_run } => {
            commands::update_read_times(&client, dry_run).await
        }
        Command::MigrateImages { cloud, dry_run } => {
            commands::migrate_images(&client, &cloud, dry_run).await
        }
    }
}
