//! # Category Endpoints

use shared::{Category, ListParams, Paginated};

use super::client::{entity_path, ApiClient};
use crate::core::error::Result;

/// Cache key operation name for [`get_categories`].
pub const GET_CATEGORIES: &str = "getCategories";
/// Cache key operation name for [`get_category`].
pub const GET_CATEGORY: &str = "getCategory";

/// Get one page of categories. Omitted params fall back to backend defaults.
#[tracing::instrument(skip(client))]
pub async fn get_categories(
    client: &ApiClient,
    params: Option<&ListParams>,
) -> Result<Paginated<Category>> {
    let page = client.get::<Paginated<Category>, _>("/categories", params).await?;

    tracing::debug!(
        count = page.items.len(),
        total = page.pagination.total,
        "Categories fetched"
    );
    Ok(page)
}

/// Get a single category by id.
#[tracing::instrument(skip(client))]
pub async fn get_category(client: &ApiClient, id: &str) -> Result<Category> {
    let path = entity_path("/categories", id)?;
    client.get::<Category, ()>(&path, None).await
}
