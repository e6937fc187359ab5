//! # Admin Console Client Core
//!
//! Authentication, resource API calls and cached reads for the product and
//! category admin console. The presentation layer is a separate concern; it
//! consumes the query handles exposed here.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              console (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  query     - QueryClient cache, Catalog query handles  │
//! │  services  - ApiClient transport, resource endpoints,  │
//! │              AuthService, TokenStore                   │
//! │  core      - ApiError, ApiService trait                │
//! │  config    - Environment configuration                 │
//! │  logging   - tracing subscriber setup                  │
//! └────────────────────────────────────────────────────────┘
//!                          │ HTTP/JSON
//!                          ▼
//!                 ┌─────────────────┐
//!                 │ Catalog backend │
//!                 └─────────────────┘
//! ```
//!
//! ## Wiring
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use console::config::ConsoleConfig;
//! use console::core::ApiService;
//! use console::query::{Catalog, QueryClient};
//! use console::services::api::ApiClient;
//! use console::services::auth::AuthService;
//! use console::services::token_store::FileTokenStore;
//!
//! # fn main() -> console::core::Result<()> {
//! let config = ConsoleConfig::from_env()?;
//! let tokens = Arc::new(FileTokenStore::new(&config.token_file));
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::from_config(&config, tokens.clone())?);
//!
//! let auth = AuthService::new(api.clone(), tokens);
//! let catalog = Catalog::new(api, QueryClient::new(config.query));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod query;
pub mod services;
