//! techblog CLI
//!
//! Local execution entry point: loads the catalog, drives the list and
//! detail views headlessly, and prints the rendered HTML fragments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use techblog::{
    controller::Controller,
    error::Result,
    models::{Category, Config},
    render::HtmlSurface,
    services,
};

/// techblog - Article catalog front end
#[derive(Parser, Debug)]
#[command(name = "techblog", version, about = "Tech blog article browser")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the article card list
    List {
        /// Category slug to filter by ("all" shows everything)
        #[arg(long, default_value = "all")]
        filter: String,

        /// Search term matched against title, excerpt, content, and tags
        #[arg(long, default_value = "")]
        search: String,

        /// Number of pages to accumulate, as if pressing "load more"
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },

    /// Render the detail view for one article
    Show {
        /// Article id
        id: u64,
    },

    /// List the known category slugs
    Categories,

    /// Validate the configuration file
    Validate,

    /// Show catalog summary info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    config.validate()?;

    match cli.command {
        Command::List {
            filter,
            search,
            pages,
        } => {
            let mut controller = Controller::new(&config, HtmlSurface::default())?;
            let source = services::source_for(&config.catalog)?;
            if let Err(e) = controller.initialize(source.as_ref()).await {
                println!("{}", controller.surface().article_list());
                return Err(e);
            }

            if filter != "all" {
                controller.set_filter(Some(Category::from(filter)));
            }
            if !search.is_empty() {
                controller.set_search(&search);
            }
            for _ in 1..pages {
                controller.load_more();
            }

            println!("{}", controller.surface().article_list());
            log::info!(
                "{} of {} matching articles shown",
                controller.surface().card_count(),
                controller.filtered_count()
            );
            if controller.surface().load_more_visible() {
                log::info!("More articles available; increase --pages to see them.");
            }
        }

        Command::Show { id } => {
            let mut controller = Controller::new(&config, HtmlSurface::default())?;
            let source = services::source_for(&config.catalog)?;
            if let Err(e) = controller.initialize(source.as_ref()).await {
                println!("{}", controller.surface().article_list());
                return Err(e);
            }
            controller.open_article(id).await?;

            if let Some(detail) = controller.surface().detail() {
                println!("{}", detail);
            }
        }

        Command::Categories => {
            for category in Category::known() {
                println!(
                    "{:<12} {} {}",
                    category.slug(),
                    category.icon(),
                    category.display_name()
                );
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            // `validate` already ran above; reaching here means it passed.
            log::info!("✓ Config OK (catalog: {})", config.catalog.source);
            log::info!("All validations passed!");
        }

        Command::Info => {
            let source = services::source_for(&config.catalog)?;
            let catalog = source.load().await?;
            log::info!("Catalog source: {}", source.location());
            log::info!("Articles: {}", catalog.len());

            let with_videos = catalog
                .articles
                .iter()
                .filter(|a| !a.youtube_videos.is_empty())
                .count();
            log::info!("Articles with videos: {}", with_videos);
            log::info!(
                "Video metadata: {}",
                if config.videos.api_key.is_empty() {
                    "embed-only (no API key)"
                } else {
                    "API lookup enabled"
                }
            );
        }
    }

    Ok(())
}
