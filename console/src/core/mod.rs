//! # Core Abstractions
//!
//! Core traits and error types shared by every other module.
//!
//! - **[`error`]**: [`ApiError`] and the [`Result`] alias
//! - **[`service`]**: [`ApiService`], the injectable backend seam
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use console::core::ApiService;
//! use console::services::api::ApiClient;
//! use console::services::token_store::MemoryTokenStore;
//!
//! // In production: the HTTP-backed client
//! let store = Arc::new(MemoryTokenStore::new());
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new("http://127.0.0.1:8080/api", store));
//!
//! // In tests: any mock implementing ApiService
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, Result};
pub use service::ApiService;
