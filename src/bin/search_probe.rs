// Pixabay search probe
//
// Drives the same SearchController the web page uses, but from the terminal,
// against the live API. Useful for checking the API key and connectivity.
//
// Usage: search_probe "yellow flowers" --pages 2

use anyhow::Result;
use clap::Parser;
use pixabay_gallery::web_app::api::{PixabayClient, PixabayConfig};
use pixabay_gallery::web_app::controller::{FetchOutcome, SearchController};

#[derive(Debug, Parser)]
#[command(name = "search_probe", about = "Query Pixabay through the gallery controller")]
struct Args {
    /// Free-text search query
    query: String,

    /// Maximum number of pages to load
    #[arg(long, default_value_t = 1)]
    pages: u32,

    /// Print every card instead of a summary per page
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main(args))
}

async fn async_main(args: Args) -> Result<()> {
    dotenv::dotenv().ok();
    let config = PixabayConfig::from_env()?;
    println!("Querying {} for '{}'...", config.base_url, args.query);

    let client = PixabayClient::new(config);
    let mut controller = SearchController::new();

    let mut request = controller.submit_search(&args.query);
    let mut loaded = 0;

    while let Some(next) = request.take() {
        let page = next.page;
        let shown_before = controller.cards().len();

        match controller.fetch_page(&client, next).await {
            FetchOutcome::Rendered { added, end_reached } => {
                println!("✓ Page {}: {} images (total pages: {})", page, added, controller.session().total_pages);
                if args.verbose {
                    for card in &controller.cards()[shown_before..] {
                        let info: Vec<String> = card.info.iter().map(|i| format!("{} {}", i.label, i.value)).collect();
                        println!("  - {} [{}]", card.alt, info.join(", "));
                        println!("    {}", card.href);
                    }
                }
                if end_reached {
                    break;
                }
            }
            FetchOutcome::Empty | FetchOutcome::Failed(_) | FetchOutcome::Stale => {}
        }

        loaded += 1;
        if loaded < args.pages && controller.load_more_visible() {
            request = controller.load_more();
        }
    }

    for notification in controller.notifications() {
        println!("[{}] {}", notification.kind, notification.message);
    }

    println!(
        "\nSession: query='{}', page={}, total_pages={}, cards={}",
        controller.session().query,
        controller.session().page,
        controller.session().total_pages,
        controller.cards().len()
    );

    Ok(())
}
