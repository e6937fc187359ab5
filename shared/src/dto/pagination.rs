//! # Paginated Lists
//!
//! List endpoints answer with an item page plus summary fields:
//!
//! ```text
//! {
//!   "data": {
//!     "items": [ ... ],
//!     "page": 1,
//!     "limit": 10,
//!     "total": 3
//!   }
//! }
//! ```
//!
//! The outer `data` wrapper is optional; [`ApiResponse`] accepts both shapes.
//! Pages are numbered from 1, as the backend reports them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters for list endpoints. Omitted fields use backend defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            limit: None,
        }
    }
}

/// Pagination summary: the list envelope minus its items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

impl Pagination {
    /// Page count as reported, or derived from `total` and `limit`.
    pub fn total_pages(&self) -> u32 {
        if let Some(pages) = self.total_pages {
            return pages;
        }
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit)) as u32
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }
}

/// One page of items together with its pagination summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}

/// Response body, either wrapped as `{ "data": T }` or bare.
///
/// Decode with [`ApiResponse::from_slice`]: it picks the shape by the
/// presence of a `data` key, so a malformed body reports the offending field.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Wrapped {
        data: T,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Bare(T),
}

impl<T: DeserializeOwned> ApiResponse<T> {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let mut body: Value = serde_json::from_slice(bytes)?;
        let data = body.as_object_mut().and_then(|fields| fields.remove("data"));

        match data {
            Some(data) => Ok(ApiResponse::Wrapped {
                data: serde_json::from_value(data)?,
                message: body.get("message").and_then(Value::as_str).map(str::to_string),
            }),
            None => serde_json::from_value(body).map(ApiResponse::Bare),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        match self {
            ApiResponse::Wrapped { data, .. } => data,
            ApiResponse::Bare(data) => data,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ApiResponse::Wrapped { message, .. } => message.as_deref(),
            ApiResponse::Bare(_) => None,
        }
    }
}
