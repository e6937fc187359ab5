//! # API Client
//!
//! Transport client shared by every resource module: base URL, default
//! headers, timeout, bearer token and error mapping live here and nowhere
//! else.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    ApiResponse, Category, ErrorBody, ListParams, LoginPayload, LoginResponse, Paginated,
    Product, RegisterPayload,
};
use uuid::Uuid;

use crate::config::{ConsoleConfig, ADMIN_PATHS};
use crate::core::error::{ApiError, Result};
use crate::core::service::ApiService;
use crate::services::token_store::{TokenStore, ACCESS_TOKEN_KEY};

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for the catalog backend.
///
/// Cloning is cheap: `reqwest::Client` pools connections behind an `Arc`,
/// and the token store is shared. Configuration is fixed at construction.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    admin_path: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client with default settings for `base_url`.
    ///
    /// The client is configured with a 10 second timeout to prevent hanging reads.
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        let client = build_http_client(Duration::from_secs(10)).unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            admin_path: ADMIN_PATHS[0].to_string(),
            tokens,
        }
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &ConsoleConfig, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let client = build_http_client(config.http_timeout)
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            admin_path: config.admin_path.clone(),
            tokens,
        })
    }

    /// Use the older `/admin/...` auth routes instead of `/admins/...`.
    pub fn with_admin_path(mut self, admin_path: impl Into<String>) -> Self {
        self.admin_path = admin_path.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn admin_path(&self) -> &str {
        &self.admin_path
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and parse the (optionally wrapped) JSON body.
    pub(crate) async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut request = self.client.get(self.url(path));
        if let Some(query) = query {
            request = request.query(query);
        }
        let response = self.send(request, "GET", path).await?;
        parse_body(response).await
    }

    /// POST a JSON body to `path` and parse the JSON response.
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.send(request, "POST", path).await?;
        parse_body(response).await
    }

    /// POST a JSON body to `path`, ignoring whatever the backend answers on success.
    pub(crate) async fn post_no_content<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let request = self.client.post(self.url(path)).json(body);
        self.send(request, "POST", path).await?;
        Ok(())
    }

    /// Attach auth and correlation headers, send, and map non-2xx statuses.
    async fn send(&self, request: RequestBuilder, method: &str, path: &str) -> Result<Response> {
        let request_id = Uuid::new_v4().to_string();
        let mut request = request.header(REQUEST_ID_HEADER, request_id.as_str());
        if let Some(token) = self.tokens.get(ACCESS_TOKEN_KEY)? {
            request = request.bearer_auth(token);
        }

        let start = Instant::now();
        tracing::debug!(request_id = %request_id, method, path, "Sending request");

        let response = request.send().await.map_err(|e| {
            tracing::error!(
                request_id = %request_id,
                method,
                path,
                error = %e,
                duration_ms = start.elapsed().as_millis(),
                "Network error"
            );
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let duration = start.elapsed();

        if status.is_success() {
            tracing::debug!(
                request_id = %request_id,
                method,
                path,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request succeeded"
            );
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .and_then(ErrorBody::into_message);

        tracing::warn!(
            request_id = %request_id,
            method,
            path,
            status = status.as_u16(),
            error = message.as_deref().unwrap_or(""),
            duration_ms = duration.as_millis(),
            "Request failed"
        );

        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

/// `collection/id` with `id` escaped as exactly one path segment.
///
/// Ids are opaque strings; `/`, `?` and `#` are percent-encoded. Empty, `.`
/// and `..` would be collapsed by URL normalization and are rejected.
pub(crate) fn entity_path(collection: &str, id: &str) -> Result<String> {
    if matches!(id, "" | "." | "..") {
        return Err(ApiError::InvalidRequest(format!(
            "Invalid {} id: {:?}",
            collection.trim_start_matches('/'),
            id
        )));
    }
    Ok(format!("{}/{}", collection, urlencoding::encode(id)))
}

fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()
}

async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = ApiResponse::<T>::from_slice(&bytes).map_err(|e| {
        tracing::error!(error = %e, "Response parse error");
        ApiError::Decode(e.to_string())
    })?;
    Ok(body.into_data())
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login_admin(&self, payload: &LoginPayload) -> Result<LoginResponse> {
        crate::services::api::admin::login_admin(self, payload).await
    }

    async fn register_admin(&self, payload: &RegisterPayload) -> Result<()> {
        crate::services::api::admin::register_admin(self, payload).await
    }

    async fn get_categories(&self, params: Option<&ListParams>) -> Result<Paginated<Category>> {
        crate::services::api::categories::get_categories(self, params).await
    }

    async fn get_category(&self, id: &str) -> Result<Category> {
        crate::services::api::categories::get_category(self, id).await
    }

    async fn get_products(&self, params: Option<&ListParams>) -> Result<Paginated<Product>> {
        crate::services::api::products::get_products(self, params).await
    }

    async fn get_product(&self, id: &str) -> Result<Product> {
        crate::services::api::products::get_product(self, id).await
    }
}
