//! Smoke run against a live backend: log in, then print the first page of
//! categories and products.
//!
//! Credentials come from `CONSOLE_ADMIN_EMAIL` / `CONSOLE_ADMIN_PASSWORD`.
//! When they are absent the stored token (if any) is used as-is.

use std::process::ExitCode;
use std::sync::Arc;

use console::config::ConsoleConfig;
use console::core::{ApiService, Result};
use console::query::{Catalog, QueryClient};
use console::services::api::ApiClient;
use console::services::auth::AuthService;
use console::services::token_store::FileTokenStore;
use shared::{format_price, short_id, truncate_text, ListParams, LoginPayload};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ConsoleConfig::from_env().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = console::logging::init(&config);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Console run failed");
            eprintln!("{}", e.message().unwrap_or(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ConsoleConfig) -> Result<()> {
    let tokens = Arc::new(FileTokenStore::new(&config.token_file));
    let api: Arc<dyn ApiService> = Arc::new(ApiClient::from_config(&config, tokens.clone())?);
    let auth = AuthService::new(api.clone(), tokens);

    if let (Ok(email), Ok(password)) = (
        std::env::var("CONSOLE_ADMIN_EMAIL"),
        std::env::var("CONSOLE_ADMIN_PASSWORD"),
    ) {
        auth.login(&LoginPayload { email, password }).await?;
        println!("Logged in.");
    } else if !auth.is_authenticated() {
        tracing::warn!("No credentials and no stored token; requests go out anonymous");
    }

    let catalog = Catalog::new(api, QueryClient::new(config.query));
    let params = Some(ListParams::new(1, 10));

    let mut categories = catalog.categories(params);
    let mut products = catalog.products(params);
    tokio::join!(categories.fetch(), products.fetch());

    if let Some(err) = categories.error().or(products.error()) {
        return Err(err.clone());
    }

    println!("\nCategories");
    for category in categories.items() {
        println!(
            "  {:<12} {:<24} {}",
            short_id(&category.id, 4, 4),
            truncate_text(&category.category_name, 24),
            truncate_text(&category.description, 40)
        );
    }
    if let Some(page) = categories.pagination() {
        println!("  page {}/{} ({} total)", page.page, page.total_pages(), page.total);
    }

    println!("\nProducts");
    for product in products.items() {
        println!(
            "  {:<12} {:<24} {:>10} {:>6} {}",
            short_id(&product.id, 4, 4),
            truncate_text(&product.product_name, 24),
            format_price(product.effective_price),
            product.stock_quantity,
            truncate_text(&product.category.category_name, 16)
        );
    }
    if let Some(page) = products.pagination() {
        println!("  page {}/{} ({} total)", page.page, page.total_pages(), page.total);
    }

    Ok(())
}
