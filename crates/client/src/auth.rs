//! Authentication strategies for the inventory REST API.
//!
//! Responsibilities:
//! - Hold the credentials a client was built with.
//! - Attach them to outgoing requests.
//!
//! Does NOT handle:
//! - Loading credentials (see `inventory_config`).
//! - Session cookies or CSRF tokens; every request carries its credentials.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with the inventory API.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// HTTP basic credentials.
    Basic {
        username: String,
        password: SecretString,
    },
    /// `Authorization: Token <token>`.
    ApiToken { token: SecretString },
}

impl AuthStrategy {
    /// Attach credentials to a request.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Self::ApiToken { token } => {
                builder.header("Authorization", format!("Token {}", token.expose_secret()))
            }
        }
    }

    /// Whether this is token auth.
    pub fn is_token(&self) -> bool {
        matches!(self, Self::ApiToken { .. })
    }
}

impl From<&inventory_config::AuthStrategy> for AuthStrategy {
    fn from(strategy: &inventory_config::AuthStrategy) -> Self {
        match strategy {
            inventory_config::AuthStrategy::Basic { username, password } => Self::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            inventory_config::AuthStrategy::ApiToken { token } => Self::ApiToken {
                token: token.clone(),
            },
        }
    }
}
