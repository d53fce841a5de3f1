//! CLI entry point for notion-press

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "notion-press")]
#[command(version)]
#[command(about = "A static site generator for a Notion-backed blog", long_about = None)]
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
    /// Fetch published posts from Notion into the content cache
    #[command(alias = "f")]
    Fetch {
        /// Refetch even if the cache is still fresh
        #[arg(long)]
        force: bool,
    },

    /// Generate static article pages from the content cache
    #[command(alias = "b")]
    Build {
        /// Fetch before building
        #[arg(long)]
        fetch: bool,
    },

    /// Start a local server over the generated site
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Remove generated pages and the content cache
    Clean,

    /// List posts in the content cache
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "notion_press=debug,info"
    } else {
        "notion_press=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Fetch { force } => {
            let app = notion_press::NotionPress::new(&base_dir)?;
            tracing::info!("Fetching posts from Notion...");
            notion_press::commands::fetch::run(&app, force).await?;
            println!("Fetched successfully!");
        }

        Commands::Build { fetch } => {
            let app = notion_press::NotionPress::new(&base_dir)?;
            if fetch {
                notion_press::commands::fetch::run(&app, false).await?;
            }
            tracing::info!("Generating static pages...");
            notion_press::commands::build::run(&app)?;
            println!("Generated successfully!");
        }

        Commands::Serve { port, ip } => {
            let app = notion_press::NotionPress::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            notion_press::server::start(&app, &ip, port).await?;
        }

        Commands::Clean => {
            let app = notion_press::NotionPress::new(&base_dir)?;
            tracing::info!("Cleaning generated pages...");
            notion_press::commands::clean::run(&app)?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let app = notion_press::NotionPress::new(&base_dir)?;
            notion_press::commands::list::run(&app)?;
        }

        Commands::Version => {
            println!("notion-press version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
