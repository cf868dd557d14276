//! Trendy CLI - browse the TrendyCloth storefront demo from a terminal.
//!
//! Commands:
//! - `trendy render <path>` - Render a storefront page to HTML
//! - `trendy search <query>` - Run a catalog query
//! - `trendy carousel` - Simulate the hero carousel timer
//! - `trendy categories` - List the category directory

mod output;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use output::Output;
use trendy_commerce::demo;
use trendy_commerce::prelude::*;
use trendy_pages::{render_route, Route};
use trendy_ui::carousel::Carousel;
use trendy_ui::CarouselHandle;

/// Trendy CLI - the TrendyCloth storefront demo
#[derive(Parser)]
#[command(name = "trendy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a storefront page to HTML
    Render {
        /// Route path, e.g. "/" or "/search?q=shirt&sort=price-low"
        path: String,

        /// Write the HTML to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a catalog query against the demo catalog
    Search {
        /// Free-text query
        query: String,

        /// Sort key: relevance, price-low, price-high, newest, rating
        #[arg(long, default_value = "relevance")]
        sort: String,
    },

    /// Simulate the hero carousel's auto-advance timer
    Carousel {
        /// Number of items
        #[arg(long, default_value_t = 12)]
        items: usize,

        /// Viewport capacity
        #[arg(long, default_value_t = 4)]
        visible: usize,

        /// Automatic ticks to observe
        #[arg(long, default_value_t = 5)]
        ticks: u32,

        /// Tick period in milliseconds (the storefront uses 4000)
        #[arg(long, default_value_t = 400)]
        interval_ms: u64,
    },

    /// List the category directory
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = Output::new(cli.verbose, cli.json);

    let result = match cli.command {
        Commands::Render { path, output: file } => render(&output, &path, file),
        Commands::Search { query, sort } => search(&output, &query, &sort),
        Commands::Carousel {
            items,
            visible,
            ticks,
            interval_ms,
        } => carousel(&output, items, visible, ticks, interval_ms).await,
        Commands::Categories => categories(&output),
    };

    if let Err(e) = &result {
        output.error(&e.to_string());
    }
    result
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn render(output: &Output, path: &str, file: Option<PathBuf>) -> Result<()> {
    let route = Route::parse(path)?;
    output.debug(&format!("parsed route: {:?}", route));

    let html = render_route(&route);

    match file {
        Some(path) => {
            std::fs::write(&path, &html)
                .with_context(|| format!("writing {}", path.display()))?;
            output.success(&format!("wrote {} bytes to {}", html.len(), path.display()));
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn search(output: &Output, query: &str, sort: &str) -> Result<()> {
    let sort = SortKey::parse(sort)?;
    let catalog = demo::demo_catalog();
    let results = trendy_commerce::search::query(&catalog, query, sort);

    if output.is_json() {
        output.json(&results);
        return Ok(());
    }

    output.header(&format!(
        "{} results for {:?} ({})",
        results.len(),
        query,
        sort.display_name()
    ));
    output.table_row(&["NAME", "CATEGORY", "PRICE", "RATING"], &[28, 12, 10, 6]);
    for p in &results {
        let rating = p
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        output.table_row(
            &[&p.name, &p.category, &p.price.display(), &rating],
            &[28, 12, 10, 6],
        );
    }
    Ok(())
}

async fn carousel(
    output: &Output,
    items: usize,
    visible: usize,
    ticks: u32,
    interval_ms: u64,
) -> Result<()> {
    let machine = Carousel::new(items, visible);
    output.header("Carousel simulation");
    output.kv("items", &items.to_string());
    output.kv("visible", &visible.to_string());
    output.kv("max index", &machine.max_index().to_string());

    let mut handle =
        CarouselHandle::spawn_with_interval(machine, Duration::from_millis(interval_ms));

    for _ in 0..ticks {
        let snap = handle.changed().await?;
        output.info(&format!(
            "tick -> slide {}/{} (auto-play on)",
            snap.current_index, snap.max_index
        ));
    }

    // A manual step pauses auto-play; the timer goes quiet afterwards.
    handle.next().await?;
    let snap = handle.changed().await?;
    output.info(&format!(
        "manual next -> slide {}/{} (auto-play {})",
        snap.current_index,
        snap.max_index,
        if snap.auto_advance { "on" } else { "off" }
    ));

    handle.stop().await;
    output.success("carousel stopped, timer released");
    Ok(())
}

fn categories(output: &Output) -> Result<()> {
    let categories = demo::demo_categories();

    if output.is_json() {
        output.json(&categories);
        return Ok(());
    }

    output.header("Categories");
    for c in &categories {
        output.kv(c.id.as_str(), &format!("{} ({} products)", c.name, c.product_count));
    }
    Ok(())
}
