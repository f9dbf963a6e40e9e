//! Client configuration.
//!
//! The API base URL comes from the environment the embedding application
//! runs in. It is concatenated with endpoint paths as-is and not otherwise
//! validated.

use std::fmt;

use catalog_core::storage::USER_ROCKETS_KEY;

use crate::error::{CatalogError, Result};

pub const API_URL_ENV: &str = "ROCKETS_API_URL";
pub const API_TOKEN_ENV: &str = "ROCKETS_API_TOKEN";
pub const STORAGE_KEY_ENV: &str = "ROCKETS_STORAGE_KEY";

#[derive(Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Sent as a bearer token when present.
    pub api_token: Option<String>,
    /// Session storage key holding user-created rockets.
    pub storage_key: String,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
            storage_key: USER_ROCKETS_KEY.to_string(),
        }
    }

    /// Load configuration from `ROCKETS_API_URL`, `ROCKETS_API_TOKEN` and
    /// `ROCKETS_STORAGE_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if `ROCKETS_API_URL` is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(API_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| CatalogError::Config(format!("{} is not set", API_URL_ENV)))?;

        let mut config = Self::new(base_url);
        config.api_token = lookup(API_TOKEN_ENV).filter(|token| !token.is_empty());
        if let Some(key) = lookup(STORAGE_KEY_ENV).filter(|key| !key.is_empty()) {
            config.storage_key = key;
        }
        Ok(config)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("storage_key", &self.storage_key)
            .finish()
    }
}
