//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the catalog
//! backend via its REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Admin login, registration and backend error bodies
//! - [`catalog`] - Category and product entities
//! - [`pagination`] - Paginated lists and the optional `data` wrapper
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /admins/login
//! Content-Type: application/json
//!
//! {
//!   "usernameOrEmail": "admin@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//! }
//! ```

pub mod auth;
pub mod catalog;
pub mod pagination;

pub use auth::*;
pub use catalog::*;
pub use pagination::*;
