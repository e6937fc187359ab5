//! # Service Traits
//!
//! Traits for dependency injection, so the query layer and tests can swap the
//! HTTP-backed client for a mock.

use async_trait::async_trait;
use shared::{
    Category, ListParams, LoginPayload, LoginResponse, Paginated, Product, RegisterPayload,
};

use super::error::Result;

/// Backend operations used by the console.
///
/// Each method is exactly one round trip. Implementations must not retry;
/// retries belong to the query cache.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Exchange credentials for an access token.
    async fn login_admin(&self, payload: &LoginPayload) -> Result<LoginResponse>;

    /// Create a new staff or admin account.
    async fn register_admin(&self, payload: &RegisterPayload) -> Result<()>;

    /// Fetch one page of categories.
    async fn get_categories(&self, params: Option<&ListParams>) -> Result<Paginated<Category>>;

    /// Fetch a category by id.
    async fn get_category(&self, id: &str) -> Result<Category>;

    /// Fetch one page of products.
    async fn get_products(&self, params: Option<&ListParams>) -> Result<Paginated<Product>>;

    /// Fetch a product by id.
    async fn get_product(&self, id: &str) -> Result<Product>;
}
