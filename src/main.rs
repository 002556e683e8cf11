//! CLI entry point for site-content

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "site-content")]
#[command(version)]
#[command(about = "Load and validate the site's content collections", long_about = None)]
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
    /// Validate every entry of every collection
    #[command(alias = "c")]
    Check,

    /// List entries, newest first
    #[command(alias = "ls")]
    List {
        /// Collection to list (blog, talks, publications); all when omitted
        collection: Option<String>,
    },

    /// Print one entry as JSON
    Show {
        /// Collection name
        collection: String,

        /// Entry id
        id: String,
    },

    /// Create a new entry with a front-matter scaffold
    New {
        /// Collection name
        collection: String,

        /// Title of the new entry
        title: String,
    },

    /// Write all validated entries to the data store
    Export,

    /// Remove the output directory
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "site_content=debug,info"
    } else {
        "site_content=info"
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
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Check => {
            let site = site_content::Site::new(&base_dir)?;
            tracing::info!("Checking content in {:?}", site.content_dir);
            site_content::commands::check::run(&site)?;
        }

        Commands::List { collection } => {
            let site = site_content::Site::new(&base_dir)?;
            site_content::commands::list::run(&site, collection.as_deref())?;
        }

        Commands::Show { collection, id } => {
            let site = site_content::Site::new(&base_dir)?;
            site_content::commands::show::run(&site, &collection, &id)?;
        }

        Commands::New { collection, title } => {
            let site = site_content::Site::new(&base_dir)?;
            tracing::info!("Creating new {} entry with title: {}", collection, title);
            let path = site.new_entry(&collection, &title)?;
            println!("Created: {}", path.display());
        }

        Commands::Export => {
            let site = site_content::Site::new(&base_dir)?;
            tracing::info!("Exporting collections...");
            site_content::commands::export::run(&site)?;
        }

        Commands::Clean => {
            let site = site_content::Site::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("site-content version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
