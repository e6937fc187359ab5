//! # Admin Authentication Endpoints
//!
//! Login and registration for staff/admin accounts. Errors are returned
//! unchanged; callers read [`ApiError::message`] for display.
//!
//! [`ApiError::message`]: crate::core::error::ApiError::message

use shared::{LoginPayload, LoginResponse, RegisterPayload};

use super::client::ApiClient;
use crate::core::error::Result;

/// Login with email (or username) and password.
#[tracing::instrument(skip(client, payload), fields(email = %payload.email))]
pub async fn login_admin(client: &ApiClient, payload: &LoginPayload) -> Result<LoginResponse> {
    tracing::info!("Attempting admin login");
    let start = std::time::Instant::now();

    let path = format!("/{}/login", client.admin_path());
    let result = client.post::<_, LoginResponse>(&path, payload).await;

    match &result {
        Ok(_) => tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful"),
        Err(e) => tracing::warn!(error = %e, "Login failed"),
    }
    result
}

/// Register a new staff or admin account.
#[tracing::instrument(skip(client, payload), fields(username = %payload.username, role = %payload.role))]
pub async fn register_admin(client: &ApiClient, payload: &RegisterPayload) -> Result<()> {
    let path = format!("/{}/register", client.admin_path());
    client.post_no_content(&path, payload).await?;

    tracing::info!("Account registered");
    Ok(())
}
