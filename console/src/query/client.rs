//! # Query Client
//!
//! Process-wide cache of read results, passed around explicitly as a cheap
//! clonable handle.
//!
//! ## Policy
//!
//! - **Freshness**: data younger than `stale_time` is served without a
//!   request. The default `stale_time` of zero means every `fetch` revalidates.
//! - **Coalescing**: while a request for a key is in flight, further fetches
//!   of that key await the same request instead of issuing a new one.
//! - **Retry**: a failed request is retried `retry` more times, `retry_delay`
//!   apart, before the error is reported.
//! - **Failure**: a failed request keeps previously cached data and records
//!   the error alongside it.
//! - **Collection**: entries untouched for `gc_time` with nothing in flight
//!   are dropped on the next fetch or an explicit [`QueryClient::gc`].
//!
//! Each request runs on its own Tokio task and commits its result into the
//! cache itself, so dropping the caller never strands an entry as pending.
//!
//! ## Locking
//!
//! The entry map sits behind a `parking_lot::Mutex` that is never held
//! across an `.await`.

use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;

use super::key::QueryKey;
use super::state::QueryState;
use crate::core::error::{ApiError, Result};

/// Produces one request for a query. Called again on every retry.
pub type Fetcher<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>;

type Erased = Arc<dyn Any + Send + Sync>;
type SharedFetch = Shared<BoxFuture<'static, std::result::Result<Erased, ApiError>>>;

/// Query cache behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Extra attempts after a failed request
    pub retry: u32,
    /// Pause between attempts
    pub retry_delay: Duration,
    /// How long fetched data counts as fresh
    pub stale_time: Duration,
    /// How long an unused entry is kept
    pub gc_time: Duration,
    /// Whether regaining window focus invalidates every query
    pub refetch_on_window_focus: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            retry: 1,
            retry_delay: Duration::from_secs(1),
            stale_time: Duration::ZERO,
            gc_time: Duration::from_secs(5 * 60),
            refetch_on_window_focus: false,
        }
    }
}

struct Entry {
    data: Option<Erased>,
    error: Option<ApiError>,
    /// `None` once invalidated
    updated_at: Option<Instant>,
    in_flight: Option<(u64, SharedFetch)>,
    last_accessed: Instant,
}

impl Entry {
    fn new(now: Instant) -> Self {
        Self {
            data: None,
            error: None,
            updated_at: None,
            in_flight: None,
            last_accessed: now,
        }
    }

    fn is_fresh(&self, now: Instant, stale_time: Duration) -> bool {
        match (&self.data, self.updated_at) {
            (Some(_), Some(at)) => now.duration_since(at) < stale_time,
            _ => false,
        }
    }
}

struct Inner {
    options: QueryOptions,
    entries: Mutex<HashMap<QueryKey, Entry>>,
    generation: AtomicU64,
}

impl Inner {
    /// Store a finished request's outcome, unless a newer request replaced it.
    fn commit(&self, key: &QueryKey, generation: u64, outcome: &std::result::Result<Erased, ApiError>) {
        let mut entries = self.entries.lock();
        let Some(entry) = entries.get_mut(key) else {
            return;
        };
        if !matches!(&entry.in_flight, Some((current, _)) if *current == generation) {
            return;
        }

        entry.in_flight = None;
        match outcome {
            Ok(data) => {
                entry.data = Some(data.clone());
                entry.error = None;
                entry.updated_at = Some(Instant::now());
            }
            Err(err) => {
                entry.error = Some(err.clone());
            }
        }
    }
}

/// Shared cache handle.
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<Inner>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(QueryOptions::default())
    }
}

impl QueryClient {
    pub fn new(options: QueryOptions) -> Self {
        Self {
            inner: Arc::new(Inner {
                options,
                entries: Mutex::new(HashMap::new()),
                generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn options(&self) -> &QueryOptions {
        &self.inner.options
    }

    /// Return fresh cached data for `key`, or fetch it.
    pub async fn fetch<T>(&self, key: &QueryKey, fetcher: Fetcher<T>) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.run(key, fetcher, false).await
    }

    /// Fetch `key` regardless of freshness. Still joins an in-flight request.
    pub async fn refetch<T>(&self, key: &QueryKey, fetcher: Fetcher<T>) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.run(key, fetcher, true).await
    }

    async fn run<T>(&self, key: &QueryKey, fetcher: Fetcher<T>, force: bool) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let request = {
            let now = Instant::now();
            let mut entries = self.inner.entries.lock();
            self.collect_garbage(&mut entries, now, Some(key));

            let entry = entries.entry(key.clone()).or_insert_with(|| Entry::new(now));
            entry.last_accessed = now;

            if !force && entry.is_fresh(now, self.inner.options.stale_time) {
                if let Some(data) = &entry.data {
                    tracing::debug!(key = %key, "Query cache hit");
                    return downcast(key, data.clone());
                }
            }

            match &entry.in_flight {
                Some((_, shared)) => {
                    tracing::debug!(key = %key, "Joining in-flight query");
                    shared.clone()
                }
                None => {
                    let generation = self.inner.generation.fetch_add(1, Ordering::Relaxed);
                    tracing::debug!(key = %key, generation, "Starting query");
                    let shared = self.start_request(key.clone(), generation, fetcher);
                    entry.in_flight = Some((generation, shared.clone()));
                    shared
                }
            }
        };

        let data = request.await?;
        downcast(key, data)
    }

    /// Spawn the request (with retries) and return a handle every caller can await.
    fn start_request<T>(&self, key: QueryKey, generation: u64, fetcher: Fetcher<T>) -> SharedFetch
    where
        T: Send + Sync + 'static,
    {
        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        let retry = self.inner.options.retry;
        let retry_delay = self.inner.options.retry_delay;

        let task = tokio::spawn(async move {
            let mut attempt = 0;
            let outcome = loop {
                match fetcher().await {
                    Ok(data) => break Ok(Arc::new(data) as Erased),
                    Err(err) if attempt < retry => {
                        attempt += 1;
                        tracing::warn!(key = %key, attempt, error = %err, "Query failed, retrying");
                        tokio::time::sleep(retry_delay).await;
                    }
                    Err(err) => {
                        tracing::warn!(key = %key, error = %err, "Query failed");
                        break Err(err);
                    }
                }
            };

            if let Some(inner) = inner.upgrade() {
                inner.commit(&key, generation, &outcome);
            }
            outcome
        });

        async move {
            task.await
                .unwrap_or_else(|e| Err(ApiError::Cache(format!("Query task failed: {}", e))))
        }
        .boxed()
        .shared()
    }

    /// Current state of `key` without triggering a request.
    pub fn peek<T>(&self, key: &QueryKey) -> QueryState<T>
    where
        T: Send + Sync + 'static,
    {
        let entries = self.inner.entries.lock();
        let Some(entry) = entries.get(key) else {
            return QueryState::Idle;
        };

        if entry.in_flight.is_some() {
            return QueryState::Pending;
        }
        if let Some(err) = &entry.error {
            return QueryState::Resolved(Err(err.clone()));
        }
        match &entry.data {
            Some(data) => QueryState::Resolved(downcast(key, data.clone())),
            None => QueryState::Idle,
        }
    }

    /// Last successfully fetched data for `key`, fresh or not.
    pub fn cached_data<T>(&self, key: &QueryKey) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let entries = self.inner.entries.lock();
        let data = entries.get(key)?.data.clone()?;
        data.downcast::<T>().ok()
    }

    /// Seed or overwrite cached data for `key`, e.g. after a successful edit.
    pub fn set_query_data<T>(&self, key: &QueryKey, data: T)
    where
        T: Send + Sync + 'static,
    {
        let now = Instant::now();
        let mut entries = self.inner.entries.lock();
        let entry = entries.entry(key.clone()).or_insert_with(|| Entry::new(now));
        entry.data = Some(Arc::new(data));
        entry.error = None;
        entry.updated_at = Some(now);
        entry.last_accessed = now;
    }

    /// Mark every entry of `operation` stale. Returns how many were marked.
    pub fn invalidate(&self, operation: &str) -> usize {
        let mut entries = self.inner.entries.lock();
        let mut marked = 0;
        for (key, entry) in entries.iter_mut() {
            if key.operation() == operation {
                entry.updated_at = None;
                marked += 1;
            }
        }
        tracing::debug!(operation, marked, "Invalidated queries");
        marked
    }

    pub fn invalidate_all(&self) {
        let mut entries = self.inner.entries.lock();
        for entry in entries.values_mut() {
            entry.updated_at = None;
        }
    }

    /// Signal that the window regained focus.
    ///
    /// Invalidates everything when `refetch_on_window_focus` is set and
    /// reports whether it did.
    pub fn window_focused(&self) -> bool {
        if !self.inner.options.refetch_on_window_focus {
            return false;
        }
        self.invalidate_all();
        true
    }

    /// Drop expired entries now. Returns how many were removed.
    pub fn gc(&self) -> usize {
        let mut entries = self.inner.entries.lock();
        self.collect_garbage(&mut entries, Instant::now(), None)
    }

    pub fn len(&self) -> usize {
        self.inner.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn collect_garbage(
        &self,
        entries: &mut HashMap<QueryKey, Entry>,
        now: Instant,
        keep: Option<&QueryKey>,
    ) -> usize {
        let gc_time = self.inner.options.gc_time;
        let before = entries.len();
        entries.retain(|key, entry| {
            Some(key) == keep
                || entry.in_flight.is_some()
                || now.duration_since(entry.last_accessed) < gc_time
        });
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(removed, "Collected idle queries");
        }
        removed
    }
}

fn downcast<T>(key: &QueryKey, data: Erased) -> Result<Arc<T>>
where
    T: Send + Sync + 'static,
{
    data.downcast::<T>()
        .map_err(|_| ApiError::Cache(format!("Cached value for {} has an unexpected type", key)))
}
