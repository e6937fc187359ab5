//! # Catalog Queries
//!
//! Per-resource query builders: each one pairs an [`ApiService`] call with
//! a key derived from the operation name and its parameters.
//!
//! ```rust,no_run
//! # async fn demo(catalog: console::query::Catalog) {
//! use shared::ListParams;
//!
//! let mut categories = catalog.categories(Some(ListParams::new(1, 10)));
//! categories.fetch().await;
//! for category in categories.items() {
//!     println!("{}", category.category_name);
//! }
//!
//! // No id yet: nothing is requested.
//! let mut product = catalog.product(None);
//! assert!(product.fetch().await.is_idle());
//! # }
//! ```

use std::sync::Arc;

use futures::FutureExt;
use serde_json::{json, Value};
use shared::{Category, ListParams, Paginated, Product};

use super::client::{Fetcher, QueryClient};
use super::handle::{EntityQuery, ListQuery, Query};
use super::key::QueryKey;
use crate::core::service::ApiService;
use crate::services::api::{GET_CATEGORIES, GET_CATEGORY, GET_PRODUCT, GET_PRODUCTS};

#[derive(Clone)]
pub struct Catalog {
    api: Arc<dyn ApiService>,
    client: QueryClient,
}

impl Catalog {
    pub fn new(api: Arc<dyn ApiService>, client: QueryClient) -> Self {
        Self { api, client }
    }

    pub fn query_client(&self) -> &QueryClient {
        &self.client
    }

    /// One page of categories.
    pub fn categories(&self, params: Option<ListParams>) -> ListQuery<Category> {
        let key = QueryKey::from_value(GET_CATEGORIES, list_params_value(params.as_ref()));
        let api = self.api.clone();
        let fetcher: Fetcher<Paginated<Category>> = Arc::new(move || {
            let api = api.clone();
            async move { api.get_categories(params.as_ref()).await }.boxed()
        });
        ListQuery::new(Query::new(self.client.clone(), key, fetcher))
    }

    /// A single category. Disabled while `id` is missing or empty.
    pub fn category(&self, id: Option<&str>) -> EntityQuery<Category> {
        let id = id.filter(|id| !id.is_empty()).map(str::to_string);
        let key = QueryKey::from_value(GET_CATEGORY, id_value(id.as_deref()));

        let Some(id) = id else {
            return EntityQuery::new(Query::disabled(self.client.clone(), key));
        };
        let api = self.api.clone();
        let fetcher: Fetcher<Category> = Arc::new(move || {
            let api = api.clone();
            let id = id.clone();
            async move { api.get_category(&id).await }.boxed()
        });
        EntityQuery::new(Query::new(self.client.clone(), key, fetcher))
    }

    /// One page of products.
    pub fn products(&self, params: Option<ListParams>) -> ListQuery<Product> {
        let key = QueryKey::from_value(GET_PRODUCTS, list_params_value(params.as_ref()));
        let api = self.api.clone();
        let fetcher: Fetcher<Paginated<Product>> = Arc::new(move || {
            let api = api.clone();
            async move { api.get_products(params.as_ref()).await }.boxed()
        });
        ListQuery::new(Query::new(self.client.clone(), key, fetcher))
    }

    /// A single product. Disabled while `id` is missing or empty.
    pub fn product(&self, id: Option<&str>) -> EntityQuery<Product> {
        let id = id.filter(|id| !id.is_empty()).map(str::to_string);
        let key = QueryKey::from_value(GET_PRODUCT, id_value(id.as_deref()));

        let Some(id) = id else {
            return EntityQuery::new(Query::disabled(self.client.clone(), key));
        };
        let api = self.api.clone();
        let fetcher: Fetcher<Product> = Arc::new(move || {
            let api = api.clone();
            let id = id.clone();
            async move { api.get_product(&id).await }.boxed()
        });
        EntityQuery::new(Query::new(self.client.clone(), key, fetcher))
    }

    /// Mark every category list and category detail query stale.
    pub fn invalidate_categories(&self) {
        self.client.invalidate(GET_CATEGORIES);
        self.client.invalidate(GET_CATEGORY);
    }

    /// Mark every product list and product detail query stale.
    pub fn invalidate_products(&self) {
        self.client.invalidate(GET_PRODUCTS);
        self.client.invalidate(GET_PRODUCT);
    }
}

// Built field by field so key derivation cannot fail.
fn list_params_value(params: Option<&ListParams>) -> Value {
    match params {
        None => Value::Null,
        Some(params) => {
            let mut value = json!({});
            if let Some(page) = params.page {
                value["page"] = json!(page);
            }
            if let Some(limit) = params.limit {
                value["limit"] = json!(limit);
            }
            value
        }
    }
}

fn id_value(id: Option<&str>) -> Value {
    id.map(Value::from).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_value_matches_wire_shape() {
        assert_eq!(list_params_value(None), Value::Null);
        assert_eq!(list_params_value(Some(&ListParams::default())), json!({}));
        assert_eq!(
            list_params_value(Some(&ListParams::new(2, 20))),
            serde_json::to_value(ListParams::new(2, 20)).unwrap()
        );
    }

    #[test]
    fn test_id_value() {
        assert_eq!(id_value(Some("p-1")), json!("p-1"));
        assert_eq!(id_value(None), Value::Null);
    }
}
