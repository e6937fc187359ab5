//! # Backend API Client Module
//!
//! HTTP client for the catalog backend. Each resource function performs
//! exactly one request and returns the parsed body; there is no retry and no
//! local validation here.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs         - Module exports and documentation
//! ├── client.rs      - ApiClient transport (base URL, headers, token, errors)
//! ├── admin.rs       - POST /admins/login, POST /admins/register
//! ├── categories.rs  - GET /categories, GET /categories/:id
//! └── products.rs    - GET /products, GET /products/:id
//! ```

pub mod admin;
pub mod categories;
pub mod client;
pub mod products;

pub use admin::{login_admin, register_admin};
pub use categories::{get_categories, get_category, GET_CATEGORIES, GET_CATEGORY};
pub use client::ApiClient;
pub use products::{get_product, get_products, GET_PRODUCT, GET_PRODUCTS};
