//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use console::core::ApiService;
use console::query::{Catalog, QueryClient, QueryOptions};
use console::services::api::ApiClient;
use console::services::token_store::{MemoryTokenStore, TokenStore};
use serde_json::{json, Value};
use wiremock::MockServer;

pub struct TestBackend {
    pub server: MockServer,
    pub tokens: Arc<MemoryTokenStore>,
    pub api: Arc<dyn ApiService>,
}

impl TestBackend {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let tokens = Arc::new(MemoryTokenStore::new());
        let store: Arc<dyn TokenStore> = tokens.clone();
        let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(server.uri(), store));
        Self {
            server,
            tokens,
            api,
        }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog_with(test_query_options())
    }

    pub fn catalog_with(&self, options: QueryOptions) -> Catalog {
        Catalog::new(self.api.clone(), QueryClient::new(options))
    }
}

pub fn test_query_options() -> QueryOptions {
    QueryOptions {
        retry: 1,
        retry_delay: Duration::from_millis(5),
        ..QueryOptions::default()
    }
}

pub fn category_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "categoryName": name,
        "description": format!("{} description", name),
        "isActive": true,
        "createdAt": "2025-03-01T08:00:00Z",
        "updatedAt": "2025-03-02T08:00:00Z"
    })
}

pub fn product_json(id: &str, name: &str, category_id: &str) -> Value {
    json!({
        "id": id,
        "productName": name,
        "description": "",
        "price": 100.0,
        "discountedPrice": 80.0,
        "effectivePrice": 80.0,
        "discountPercentage": 20.0,
        "weight": 1.5,
        "material": "cotton",
        "stockQuantity": 4,
        "categoryId": category_id,
        "category": category_json(category_id, "Shirts"),
        "isFeatured": false,
        "views": 10,
        "images": [],
        "discounts": [],
        "createdAt": "2025-03-01T08:00:00Z",
        "updatedAt": "2025-03-02T08:00:00Z"
    })
}
