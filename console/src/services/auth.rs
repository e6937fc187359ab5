//! # Admin Session
//!
//! Wraps the auth endpoints with token persistence: a successful login
//! stores the access token under [`ACCESS_TOKEN_KEY`], which the transport
//! client then sends as a bearer token. A failed login leaves the store
//! untouched.

use std::sync::Arc;

use shared::{LoginPayload, LoginResponse, RegisterPayload};

use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::services::token_store::{TokenStore, ACCESS_TOKEN_KEY};

pub struct AuthService {
    api: Arc<dyn ApiService>,
    tokens: Arc<dyn TokenStore>,
}

impl AuthService {
    pub fn new(api: Arc<dyn ApiService>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { api, tokens }
    }

    /// Log in and persist the returned access token.
    pub async fn login(&self, payload: &LoginPayload) -> Result<LoginResponse> {
        let response = self.api.login_admin(payload).await?;
        self.tokens.set(ACCESS_TOKEN_KEY, &response.access_token)?;
        tracing::debug!("Access token stored");
        Ok(response)
    }

    /// Register a new account. Success is the absence of an error.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<()> {
        self.api.register_admin(payload).await
    }

    pub fn logout(&self) -> Result<()> {
        self.tokens.remove(ACCESS_TOKEN_KEY)
    }

    pub fn access_token(&self) -> Result<Option<String>> {
        self.tokens.get(ACCESS_TOKEN_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.access_token(), Ok(Some(_)))
    }
}
