//! # Query Layer
//!
//! Cached, keyed asynchronous reads over the resource API.
//!
//! ## Data Flow
//!
//! ```text
//! view ──▶ Catalog::products(params) ──▶ ListQuery<Product>
//!                                           │ fetch()
//!                                           ▼
//!                       QueryClient ── fresh entry? ──▶ cached data
//!                           │ no
//!                           ├── in flight? ──▶ join it
//!                           │ no
//!                           ▼
//!                       ApiService::get_products ──▶ backend
//! ```
//!
//! ## Modules
//!
//! - [`key`]: [`QueryKey`] derivation (operation + canonical params)
//! - [`state`]: [`QueryState`] (idle / pending / resolved)
//! - [`client`]: [`QueryClient`] cache with coalescing, retry and staleness
//! - [`handle`]: [`Query`], [`ListQuery`], [`EntityQuery`]
//! - [`catalog`]: [`Catalog`], the per-resource query builders

pub mod catalog;
pub mod client;
pub mod handle;
pub mod key;
pub mod state;

pub use catalog::Catalog;
pub use client::{Fetcher, QueryClient, QueryOptions};
pub use handle::{EntityQuery, ListQuery, Query};
pub use key::QueryKey;
pub use state::QueryState;
