use dotenvy::dotenv;
use serde::Serialize;
use tracing::info;

use view_model::config::app_config::AppConfig;
use view_model::setup::dependency_injection::DependencyContainer;

/// Catalog demo entry point
///
/// Stands in for the view layer: wires the view-models, drives them through
/// a scripted session and logs every resulting state as JSON.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();
    info!(latency = ?config.latency, "Starting catalog demo");

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;
    let products = &container.product_view_model;
    let user = &container.user_view_model;

    // 5. Follow loading transitions the way a bound view would
    let mut updates = products.subscribe();
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let loading = updates.borrow_and_update().is_loading;
            tracing::debug!(loading, "Product state changed");
        }
    });

    // 6. Scripted session
    user.refresh().await;
    render("user", &user.state())?;

    products.load_list().await;
    render("list", &products.state())?;

    products.search("pro").await;
    render("search 'pro'", &products.state())?;

    products.search("").await;
    render("search ''", &products.state())?;

    products.filter_by_category("electrónicos").await;
    render("category 'electrónicos'", &products.state())?;

    products.load_detail("2").await;
    render("detail '2'", &products.state())?;

    products.load_detail("99").await;
    render("detail '99'", &products.state())?;

    products.clear_selection();
    render("cleared", &products.state())?;

    drop(container);
    watcher.await?;

    Ok(())
}

fn render(label: &str, state: &impl Serialize) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    info!("{}:\n{}", label, json);
    Ok(())
}
