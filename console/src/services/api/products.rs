//! # Product Endpoints

use shared::{ListParams, Paginated, Product};

use super::client::{entity_path, ApiClient};
use crate::core::error::Result;

/// Cache key operation name for [`get_products`].
pub const GET_PRODUCTS: &str = "getProducts";
/// Cache key operation name for [`get_product`].
pub const GET_PRODUCT: &str = "getProduct";

/// Get one page of products.
#[tracing::instrument(skip(client))]
pub async fn get_products(
    client: &ApiClient,
    params: Option<&ListParams>,
) -> Result<Paginated<Product>> {
    let page = client.get::<Paginated<Product>, _>("/products", params).await?;

    tracing::debug!(
        count = page.items.len(),
        total = page.pagination.total,
        "Products fetched"
    );
    Ok(page)
}

/// Get a single product by id.
#[tracing::instrument(skip(client))]
pub async fn get_product(client: &ApiClient, id: &str) -> Result<Product> {
    let path = entity_path("/products", id)?;
    let product = client.get::<Product, ()>(&path, None).await?;

    if !product.category_is_consistent() {
        tracing::warn!(
            product_id = %product.id,
            category_id = %product.category_id,
            embedded_category_id = %product.category.id,
            "Embedded category does not match categoryId"
        );
    }
    Ok(product)
}
