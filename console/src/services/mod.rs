//! # Services Module
//!
//! Backend integrations for the admin console.
//!
//! ```text
//! services/
//! ├── api/            - Transport client and resource endpoints
//! │                     (admin auth, categories, products)
//! ├── auth.rs         - AuthService: login/register with token persistence
//! └── token_store.rs  - TokenStore trait, file and in-memory stores
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 View layer (external)                │
//! └───────────┬──────────────────────────┬───────────────┘
//!             │                          │
//!             ▼                          ▼
//! ┌──────────────────────┐   ┌──────────────────────────┐
//! │  AuthService         │   │  query::Catalog          │
//! │  (auth.rs)           │   │  (cached reads)          │
//! └───────────┬──────────┘   └────────────┬─────────────┘
//!             │      Arc<dyn ApiService>  │
//!             └────────────┬──────────────┘
//!                          ▼
//!              ┌──────────────────────┐      ┌──────────────┐
//!              │  ApiClient (api/)    │ ───▶ │  TokenStore  │
//!              └───────────┬──────────┘      └──────────────┘
//!                          │ HTTP/JSON
//!                          ▼
//!              ┌──────────────────────┐
//!              │  Catalog backend     │
//!              │  /admins/*           │
//!              │  /categories[/:id]   │
//!              │  /products[/:id]     │
//!              └──────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every function returns [`crate::core::ApiError`]; none of them catch.
//!
//! ## Thread Safety
//!
//! - **ApiClient**: `Clone + Send + Sync`; wrap in `Arc<dyn ApiService>` to share
//! - **TokenStore**: implementations lock internally

pub mod api;
pub mod auth;
pub mod token_store;
