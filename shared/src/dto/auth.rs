use serde::{Deserialize, Serialize};
use std::fmt;

/// Login form input.
///
/// The backend accepts either a username or an email in the same field, so
/// `email` goes out on the wire as `usernameOrEmail`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginPayload {
    #[serde(rename = "usernameOrEmail", alias = "email")]
    pub email: String,
    pub password: String,
}

/// Account role for a newly registered console user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum AdminRole {
    #[default]
    Staff,
    Admin,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Staff => "Staff",
            AdminRole::Admin => "Admin",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: AdminRole,
}

/// Login success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// Error body returned by the backend on non-2xx responses.
///
/// Most endpoints send `message`; some older ones send `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Human-readable message, preferring `message` over `error`.
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}
