//! # Query Handles
//!
//! What the view layer holds on to: a [`Query`] bound to one key, plus thin
//! wrappers that derive table-friendly fields from it.
//!
//! ```text
//! Query<T>          state / data / error / fetch / refetch (pass-through)
//! ├── ListQuery<T>  + items() (never missing), pagination()
//! └── EntityQuery<T>+ entity()
//! ```
//!
//! Both wrappers deref to their inner [`Query`], so every loading and error
//! accessor is available on them unchanged.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use shared::{Paginated, Pagination};

use super::client::{Fetcher, QueryClient};
use super::key::QueryKey;
use super::state::QueryState;
use crate::core::error::ApiError;

/// A cached read bound to one key.
pub struct Query<T> {
    client: QueryClient,
    key: QueryKey,
    fetcher: Option<Fetcher<T>>,
    state: QueryState<T>,
    /// Last successful data; kept while a refetch is pending or failed.
    data: Option<Arc<T>>,
}

impl<T> Query<T>
where
    T: Send + Sync + 'static,
{
    /// Bind `key` to `fetcher`, starting from whatever the cache already holds.
    pub fn new(client: QueryClient, key: QueryKey, fetcher: Fetcher<T>) -> Self {
        let mut query = Self::disabled(client, key);
        query.fetcher = Some(fetcher);
        query.sync();
        query
    }

    /// A query whose precondition is unmet. It never issues a request and
    /// stays [`QueryState::Idle`].
    pub fn disabled(client: QueryClient, key: QueryKey) -> Self {
        Self {
            client,
            key,
            fetcher: None,
            state: QueryState::Idle,
            data: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.fetcher.is_some()
    }

    /// Load through the cache. No-op for disabled queries.
    pub async fn fetch(&mut self) -> &QueryState<T> {
        self.run(false).await
    }

    /// Load bypassing freshness. No-op for disabled queries.
    pub async fn refetch(&mut self) -> &QueryState<T> {
        self.run(true).await
    }

    async fn run(&mut self, force: bool) -> &QueryState<T> {
        let Some(fetcher) = self.fetcher.clone() else {
            return &self.state;
        };

        let outcome = if force {
            self.client.refetch(&self.key, fetcher).await
        } else {
            self.client.fetch(&self.key, fetcher).await
        };

        if let Ok(data) = &outcome {
            self.data = Some(data.clone());
        }
        self.state = QueryState::Resolved(outcome);
        &self.state
    }

    /// Re-read this key's state from the shared cache, picking up results
    /// fetched through other handles.
    pub fn sync(&mut self) {
        if !self.is_enabled() {
            return;
        }
        self.state = self.client.peek(&self.key);
        if let Some(data) = self.client.cached_data(&self.key) {
            self.data = Some(data);
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    pub fn state(&self) -> &QueryState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_deref()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.state.error()
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_pending()
    }

    pub fn is_success(&self) -> bool {
        self.state.is_success()
    }

    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }
}

/// Query over a paginated list endpoint.
pub struct ListQuery<T> {
    query: Query<Paginated<T>>,
}

impl<T> ListQuery<T>
where
    T: Send + Sync + 'static,
{
    pub fn new(query: Query<Paginated<T>>) -> Self {
        Self { query }
    }

    /// Loaded items, or an empty slice before the first successful load.
    pub fn items(&self) -> &[T] {
        self.query
            .data()
            .map(|page| page.items.as_slice())
            .unwrap_or(&[])
    }

    /// The list envelope minus its items, once loaded.
    pub fn pagination(&self) -> Option<Pagination> {
        self.query.data().map(Paginated::pagination)
    }

    pub fn into_inner(self) -> Query<Paginated<T>> {
        self.query
    }
}

impl<T> Deref for ListQuery<T> {
    type Target = Query<Paginated<T>>;

    fn deref(&self) -> &Self::Target {
        &self.query
    }
}

impl<T> DerefMut for ListQuery<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.query
    }
}

/// Query over a single-entity endpoint.
pub struct EntityQuery<T> {
    query: Query<T>,
}

impl<T> EntityQuery<T>
where
    T: Send + Sync + 'static,
{
    pub fn new(query: Query<T>) -> Self {
        Self { query }
    }

    pub fn entity(&self) -> Option<&T> {
        self.query.data()
    }

    pub fn into_inner(self) -> Query<T> {
        self.query
    }
}

impl<T> Deref for EntityQuery<T> {
    type Target = Query<T>;

    fn deref(&self) -> &Self::Target {
        &self.query
    }
}

impl<T> DerefMut for EntityQuery<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::client::QueryOptions;
    use futures::FutureExt;
    use serde_json::json;
    use std::time::Duration;

    fn client() -> QueryClient {
        QueryClient::new(QueryOptions {
            retry: 0,
            retry_delay: Duration::from_millis(1),
            ..QueryOptions::default()
        })
    }

    fn page(names: &[&str]) -> Paginated<String> {
        Paginated {
            items: names.iter().map(|n| n.to_string()).collect(),
            pagination: Pagination {
                page: 1,
                limit: 10,
                total: names.len() as u64,
                total_pages: None,
            },
        }
    }

    fn list_fetcher(result: Result<Paginated<String>, ApiError>) -> Fetcher<Paginated<String>> {
        Arc::new(move || {
            let result = result.clone();
            async move { result }.boxed()
        })
    }

    #[tokio::test]
    async fn test_items_empty_until_loaded() {
        let key = QueryKey::from_value("getCategories", json!(null));
        let mut list = ListQuery::new(Query::new(client(), key, list_fetcher(Ok(page(&["a", "b"])))));

        assert!(list.items().is_empty());
        assert!(list.pagination().is_none());
        assert!(list.is_idle());

        list.fetch().await;

        assert_eq!(list.items(), ["a".to_string(), "b".to_string()]);
        assert_eq!(list.pagination().map(|p| p.total), Some(2));
        assert!(list.is_success());
    }

    #[tokio::test]
    async fn test_error_passes_through_and_items_stay_empty() {
        let key = QueryKey::from_value("getCategories", json!(null));
        let err = ApiError::Http {
            status: 500,
            message: Some("boom".to_string()),
        };
        let mut list = ListQuery::new(Query::new(client(), key, list_fetcher(Err(err.clone()))));

        list.fetch().await;

        assert!(list.is_error());
        assert_eq!(list.error(), Some(&err));
        assert!(list.items().is_empty());
    }

    #[tokio::test]
    async fn test_disabled_query_never_fetches() {
        let key = QueryKey::from_value("getProduct", json!(null));
        let mut entity: EntityQuery<String> = EntityQuery::new(Query::disabled(client(), key));

        assert!(!entity.is_enabled());
        assert!(entity.fetch().await.is_idle());
        assert!(entity.refetch().await.is_idle());
        assert!(entity.entity().is_none());
    }

    #[tokio::test]
    async fn test_new_handle_sees_shared_cache() {
        let shared_client = client();
        let key = QueryKey::from_value("getCategories", json!({ "page": 1 }));

        let mut first = ListQuery::new(Query::new(
            shared_client.clone(),
            key.clone(),
            list_fetcher(Ok(page(&["x"]))),
        ));
        first.fetch().await;

        let second = ListQuery::new(Query::new(shared_client, key, list_fetcher(Ok(page(&["y"])))));
        assert!(second.is_success());
        assert_eq!(second.items(), ["x".to_string()]);
    }
}
