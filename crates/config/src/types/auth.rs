//! Credentials for the inventory API.
//!
//! Secrets are held as `secrecy::SecretString` at runtime so they stay out of
//! `Debug` output and logs. They are still written in full when a profile is
//! saved in plain form; `SecureValue::Keyring` keeps them out of the file.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Serde adapter writing a `SecretString` as a bare JSON string.
pub(crate) mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|s| SecretString::new(s.into()))
    }
}

/// Strategy for authenticating with the inventory API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// Username and password sent as HTTP basic credentials on every request.
    #[serde(rename = "basic")]
    Basic {
        username: String,
        #[serde(with = "secret_string")]
        password: SecretString,
    },
    /// API token sent as `Authorization: Token <token>`.
    #[serde(rename = "token")]
    ApiToken {
        #[serde(with = "secret_string")]
        token: SecretString,
    },
}

impl AuthStrategy {
    /// Short, secret-free description for status bars and logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Basic { username, .. } => format!("basic ({username})"),
            Self::ApiToken { .. } => "token".to_string(),
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}

/// Service name used for keyring storage.
pub const KEYRING_SERVICE: &str = "inventory-client";

/// A profile secret: written inline, or a pointer to a keyring entry under
/// [`KEYRING_SERVICE`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecureValue {
    Keyring {
        keyring_account: String,
    },
    #[serde(with = "secret_string")]
    Plain(SecretString),
}

impl SecureValue {
    /// The secret itself, read from the keyring when needed.
    pub fn resolve(&self) -> Result<SecretString, keyring::Error> {
        match self {
            Self::Plain(secret) => Ok(secret.clone()),
            Self::Keyring { keyring_account } => {
                let secret = keyring::Entry::new(KEYRING_SERVICE, keyring_account)?.get_password()?;
                Ok(SecretString::new(secret.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_auth_strategy_serde_round_trip() {
        let token = SecretString::new("test-token".to_string().into());
        let original = AuthStrategy::ApiToken { token };

        let json = serde_json::to_string(&original).unwrap();
        let deserialized: AuthStrategy = serde_json::from_str(&json).unwrap();

        assert!(matches!(deserialized, AuthStrategy::ApiToken { .. }));
    }

    #[test]
    fn test_basic_strategy_tagged_as_basic() {
        let strategy = AuthStrategy::Basic {
            username: "clerk".to_string(),
            password: SecretString::new("pw".to_string().into()),
        };

        let json = serde_json::to_value(&strategy).unwrap();
        assert_eq!(json["type"], "basic");
        assert_eq!(json["username"], "clerk");
    }

    #[test]
    fn test_secure_value_resolve_plain() {
        let secret = SecretString::new("test-secret".to_string().into());
        let val = SecureValue::Plain(secret.clone());
        let resolved = val.resolve().unwrap();
        assert_eq!(resolved.expose_secret(), secret.expose_secret());
    }

    #[test]
    fn test_secure_value_untagged_forms() {
        let plain: SecureValue = serde_json::from_str(r#""hunter2""#).unwrap();
        assert!(matches!(plain, SecureValue::Plain(_)));

        let keyring: SecureValue =
            serde_json::from_str(r#"{ "keyring_account": "inventory-admin" }"#).unwrap();
        match keyring {
            SecureValue::Keyring { keyring_account } => {
                assert_eq!(keyring_account, "inventory-admin");
            }
            _ => panic!("Expected SecureValue::Keyring"),
        }
    }

    #[test]
    fn test_auth_config_debug_does_not_expose_api_token() {
        let token = SecretString::new("api-token-secret-123".to_string().into());
        let auth_config = AuthConfig {
            strategy: AuthStrategy::ApiToken { token },
        };

        let debug_output = format!("{:?}", auth_config);

        assert!(
            !debug_output.contains("api-token-secret-123"),
            "Debug output should not contain the API token"
        );
    }

    #[test]
    fn test_auth_config_debug_does_not_expose_password() {
        let password = SecretString::new("basic-password-456".to_string().into());
        let auth_config = AuthConfig {
            strategy: AuthStrategy::Basic {
                username: "admin".to_string(),
                password,
            },
        };

        let debug_output = format!("{:?}", auth_config);

        assert!(!debug_output.contains("basic-password-456"));
        assert!(debug_output.contains("admin"));
    }

    #[test]
    fn test_describe_never_includes_secret() {
        let strategy = AuthStrategy::Basic {
            username: "admin".to_string(),
            password: SecretString::new("do-not-print".to_string().into()),
        };
        assert_eq!(strategy.describe(), "basic (admin)");
    }

    /// Serialization includes the secret on purpose: it is what gets persisted.
    #[test]
    fn test_auth_strategy_serialization_includes_secret() {
        let token = SecretString::new("serializable-token".to_string().into());
        let strategy = AuthStrategy::ApiToken { token };

        let json = serde_json::to_string(&strategy).unwrap();
        assert!(json.contains("serializable-token"));

        let deserialized: AuthStrategy = serde_json::from_str(&json).unwrap();
        match deserialized {
            AuthStrategy::ApiToken { token } => {
                assert_eq!(token.expose_secret(), "serializable-token");
            }
            _ => panic!("Expected ApiToken variant"),
        }
    }
}
