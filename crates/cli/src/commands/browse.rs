//! `auric browse` - fetch one listing page through the retrieval pipeline.

use clap::Args;
use rust_decimal::Decimal;

use auric_catalog::client::OrnamentsClient;
use auric_catalog::config::CatalogConfig;
use auric_catalog::pipeline::RetrievalPipeline;
use auric_catalog::pricing::resolve_price;
use auric_catalog::store::{Action, CatalogStore, SharedStore};
use auric_catalog::types::{FilterPatch, PriceRange, SortKey};
use auric_core::CurrencyCode;

/// Arguments for the `browse` command.
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Filter by category (repeatable)
    #[arg(long)]
    pub category: Vec<String>,

    /// Filter by metal type (repeatable)
    #[arg(long)]
    pub metal: Vec<String>,

    /// Filter by stone type (repeatable)
    #[arg(long)]
    pub stone: Vec<String>,

    /// Filter by style (repeatable)
    #[arg(long)]
    pub style: Vec<String>,

    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,

    /// Minimum price (in the selected currency)
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Maximum price (in the selected currency)
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Sort order: featured, price_asc, price_desc, newest, rating
    #[arg(long, default_value = "featured")]
    pub sort: String,

    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Display currency (e.g., INR, USD, GBP)
    #[arg(long)]
    pub currency: Option<CurrencyCode>,
}

/// Run the browse command.
pub async fn run(args: BrowseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfig::from_env()?;
    let currency = args.currency.unwrap_or(config.default_currency);

    let store = SharedStore::new(CatalogStore::new(currency, config.page_limit));
    let pipeline = RetrievalPipeline::new(OrnamentsClient::new(&config)?, store.clone());

    let price_range = (args.min_price.is_some() || args.max_price.is_some()).then_some(
        PriceRange {
            min: args.min_price,
            max: args.max_price,
        },
    );
    store.dispatch(Action::SetFilters(FilterPatch {
        category: Some(args.category),
        metal_type: Some(args.metal),
        stone_type: Some(args.stone),
        style: Some(args.style),
        sort_by: Some(SortKey::parse(&args.sort)),
        price_range,
        ..FilterPatch::default()
    }));
    if let Some(search) = args.search {
        store.dispatch(Action::SetSearchQuery(search));
    }
    // Paging is applied last: filter and search dispatches reset to page 1.
    store.dispatch(Action::SetPage(args.page));

    pipeline.refresh().await?;

    store.read(|s| {
        let products = s.filtered_products();
        if products.is_empty() {
            println!("No products matched.");
            return;
        }
        println!("{} product(s), page {}:", products.len(), s.filters().page);
        for product in products {
            let price = resolve_price(product, currency);
            let mut line = format!("  {}  {}  {}", product.id, price.format(), product.name);
            if let Some(original) = price.original {
                line.push_str(&format!("  (was {}{original})", price.symbol));
            }
            println!("{line}");
        }
    });

    Ok(())
}
