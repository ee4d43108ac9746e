//! CLI entry point for advocacy-site

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "advocacy-site")]
#[command(version)]
#[command(about = "Content gateway and JSON API for an advocacy site backed by Contentful", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a template _config.yml
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Start the JSON API server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.ip)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List content from the content source
    List {
        /// Type of content to list (research, categories, blog)
        #[arg(default_value = "blog")]
        r#type: String,
    },

    /// Show a single blog post by slug
    Show {
        /// Slug of the post
        slug: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "advocacy_site=debug,info"
    } else {
        "advocacy_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            advocacy_site::commands::init::init_site(&target_dir)?;
            println!("Initialized site configuration in {:?}", target_dir);
        }

        Commands::Server { port, ip } => {
            let site = advocacy_site::Site::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            advocacy_site::server::start(&site, &ip, port).await?;
        }

        Commands::List { r#type } => {
            let site = advocacy_site::Site::new(&base_dir)?;
            advocacy_site::commands::list::run(&site, &r#type).await?;
        }

        Commands::Show { slug } => {
            let site = advocacy_site::Site::new(&base_dir)?;
            advocacy_site::commands::show::run(&site, &slug).await?;
        }

        Commands::Version => {
            println!("advocacy-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
