//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the admin console client and the
//! catalog backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Admin login and registration payloads
//!   - **[`dto::catalog`]**: Categories and products
//!   - **[`dto::pagination`]**: Paginated lists and the response wrapper
//! - **[`utils`]**: Display helpers for table rendering
//!   - **[`utils::format_price`]**: Two-decimal price rendering
//!   - **[`utils::truncate_text`]**: Truncate long cells with an ellipsis
//!
//! ## Wire Format
//!
//! The backend speaks **camelCase** JSON, so every DTO carries
//! `#[serde(rename_all = "camelCase")]`. Optional fields are omitted from
//! JSON when `None`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::dto::catalog::Category;
//! use shared::dto::pagination::{ApiResponse, Paginated};
//!
//! let body = br#"{"data":{"items":[],"page":1,"limit":10,"total":0}}"#;
//! let response = ApiResponse::<Paginated<Category>>::from_slice(body).unwrap();
//! let page = response.into_data();
//! assert!(page.items.is_empty());
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
