//! CLI entry point for blogview
//!
//! Terminal harness around the engine: drives the index and post views
//! against a live site and prints the fragments it would apply to the shell.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogview::config::ViewConfig;
use blogview::fetch::beacon::HttpBeacon;
use blogview::fetch::HttpFetcher;
use blogview::render::{notice, RecordingShell, Shell, Slot};
use blogview::view::MemoryAddressBar;
use blogview::Viewer;

#[derive(Parser)]
#[command(name = "blogview")]
#[command(about = "A client-side browsing engine for markdown-backed static blogs", long_about = None)]
struct Cli {
    /// Base URL of the published site
    #[arg(short, long, global = true, default_value = "http://localhost:8000")]
    site: String,

    /// Path to a view configuration YAML file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the post index
    Index {
        /// Free-text search query
        #[arg(short, long, default_value = "")]
        query: String,

        /// Active tag filter
        #[arg(short, long)]
        tag: Option<String>,

        /// 1-based page number
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// View a single post
    Post {
        /// Slug of the post document
        slug: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "blogview=debug,info"
    } else {
        "blogview=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &cli.config {
        Some(path) => ViewConfig::load(path)?,
        None => ViewConfig::default(),
    };
    let viewer = Viewer::new(config.clone());
    let fetcher = HttpFetcher::new(&cli.site);

    match cli.command {
        Commands::Index { query, tag, page } => {
            let mut bar = MemoryAddressBar::new();
            if let Some(tag) = &tag {
                bar.set("tag", tag);
            }
            if page > 1 {
                bar.set("page", &page.to_string());
            }

            let mut shell = RecordingShell::new();
            match viewer.index_page(&fetcher).await {
                Ok(index) => index.render(&query, &mut bar, &mut shell),
                Err(e) => shell.apply(Slot::Grid, &notice(&e.to_string())),
            }

            print_shell(&shell);
            println!("\n-- url: {}{}", config.root, bar.query_string());
        }

        Commands::Post { slug } => {
            let beacon = HttpBeacon::new(&cli.site, &config);
            let mut bar = MemoryAddressBar::new();
            bar.set("slug", &slug);

            let mut shell = RecordingShell::new();
            viewer
                .post_page()
                .show(&fetcher, &beacon, &bar, &mut shell)
                .await;

            print_shell(&shell);
        }

        Commands::Version => {
            println!("blogview version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn print_shell(shell: &RecordingShell) {
    for (slot, html) in &shell.slots {
        println!("-- {:?} --", slot);
        println!("{}", html);
    }
}
