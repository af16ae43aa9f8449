//! `auric show` - fetch a single product and render its detail view.

use clap::Args;

use auric_catalog::client::OrnamentsClient;
use auric_catalog::config::CatalogConfig;
use auric_catalog::pricing::resolve_price;
use auric_catalog::variant::DetailSelection;
use auric_core::{CurrencyCode, ProductId};

/// Arguments for the `show` command.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Product id
    pub id: String,

    /// Display currency (e.g., INR, USD, GBP)
    #[arg(long)]
    pub currency: Option<CurrencyCode>,

    /// Metal variant to apply (e.g., rose-gold)
    #[arg(long)]
    pub metal: Option<String>,

    /// Size to select
    #[arg(long)]
    pub size: Option<String>,
}

/// Run the show command.
pub async fn run(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfig::from_env()?;
    let currency = args.currency.unwrap_or(config.default_currency);

    let client = OrnamentsClient::new(&config)?;
    let product = client
        .get_ornament(&ProductId::new(args.id), currency)
        .await?;

    let mut selection = DetailSelection::new(product);
    if let Some(metal) = &args.metal
        && !selection.select_metal(metal)
    {
        tracing::warn!(metal, "no such metal variant; showing base product");
    }
    if let Some(size) = &args.size
        && !selection.select_size(size)
    {
        tracing::warn!(size, "size not offered for this product");
    }

    let view = selection.view();
    let price = resolve_price(view.product, currency);

    println!("{}  {}", view.product.id, view.product.name);
    println!("  price: {}", price.format());
    if let Some(original) = price.original {
        println!("  was:   {}{original}", price.symbol);
    }
    if let Some(percent) = price.discount_percent {
        println!("  save:  {percent}%");
    }
    if let Some(metal) = view.metal_label {
        println!("  metal: {metal}");
    }
    if !view.product.sizes.is_empty() {
        println!(
            "  sizes: {} (selected: {})",
            view.product.sizes.join(", "),
            selection.selected_size().unwrap_or("none")
        );
    }
    if let Some(cover) = view.cover_image {
        println!("  cover: {cover}");
    }
    for image in view.images {
        println!("  image: {image}");
    }
    println!("  stock: {}", view.product.stock);

    match selection.add_to_cart_action(1) {
        Ok(_) => println!("  ready to add to cart"),
        Err(e) => println!("  cannot add to cart yet: {e}"),
    }

    Ok(())
}
