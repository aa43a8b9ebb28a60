//! One source's worth of connection settings.
//!
//! Profiles, the environment and command-line flags each produce an
//! [`Overrides`]. Layering a later source over an earlier one replaces only the
//! settings the later source actually provides.

use std::time::Duration;

use secrecy::SecretString;

#[derive(Debug, Clone, Default)]
pub(crate) struct Overrides {
    pub base_url: Option<String>,
    pub api_root: Option<String>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub api_token: Option<SecretString>,
    pub skip_verify: Option<bool>,
    pub timeout: Option<Duration>,
    pub max_retries: Option<usize>,
    pub fetch_root: Option<bool>,
}

impl Overrides {
    /// Apply `later` on top of `self`.
    pub fn layer(&mut self, later: Overrides) {
        fn take<T>(slot: &mut Option<T>, later: Option<T>) {
            if later.is_some() {
                *slot = later;
            }
        }
        take(&mut self.base_url, later.base_url);
        take(&mut self.api_root, later.api_root);
        take(&mut self.username, later.username);
        take(&mut self.password, later.password);
        take(&mut self.api_token, later.api_token);
        take(&mut self.skip_verify, later.skip_verify);
        take(&mut self.timeout, later.timeout);
        take(&mut self.max_retries, later.max_retries);
        take(&mut self.fetch_root, later.fetch_root);
    }

    /// A base URL plus a token or a full username/password pair.
    pub fn is_complete(&self) -> bool {
        let auth =
            self.api_token.is_some() || (self.username.is_some() && self.password.is_some());
        self.base_url.is_some() && auth
    }
}
