//! Remote catalog reconciled with the user's session rockets.
//!
//! The API is the source of truth. Rockets created locally are appended
//! when their id is unknown to the API, and take over entirely when the API
//! cannot be reached.

use std::collections::HashSet;
use std::sync::Arc;

use catalog_core::models::{RemoteRocket, Rocket, RocketDetail};
use catalog_core::storage::{read_local_rockets, SessionStorage, USER_ROCKETS_KEY};

use crate::client::ApiClient;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};

const ROCKETS_ENDPOINT: &str = "/v4/rockets";

#[derive(Clone)]
pub struct RocketCatalog {
    client: ApiClient,
    storage: Arc<dyn SessionStorage>,
    storage_key: String,
}

impl RocketCatalog {
    pub fn new(client: ApiClient, storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            client,
            storage,
            storage_key: USER_ROCKETS_KEY.to_string(),
        }
    }

    /// Build the client and catalog from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &CatalogConfig, storage: Arc<dyn SessionStorage>) -> Result<Self> {
        let client = ApiClient::new(config)?;
        Ok(Self::new(client, storage).with_storage_key(config.storage_key.clone()))
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Rockets currently held in session storage.
    pub fn local_rockets(&self) -> Vec<RocketDetail> {
        read_local_rockets(self.storage.as_ref(), &self.storage_key)
    }

    /// List every rocket: API rockets first, then unknown local ones.
    ///
    /// If the API request fails, the local rockets are returned on their own.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged when the API request fails and
    /// session storage holds no rockets.
    pub async fn get_all(&self) -> Result<Vec<Rocket>> {
        match self.client.get_json::<Vec<RemoteRocket>>(ROCKETS_ENDPOINT).await {
            Ok(remote) => {
                let remote = remote.into_iter().map(RemoteRocket::into_rocket).collect();
                Ok(merge_rockets(remote, self.local_rockets()))
            }
            Err(e) => {
                tracing::warn!("Failed to fetch rockets from API: {}", e);

                let local = self.local_rockets();
                if local.is_empty() {
                    return Err(e);
                }

                tracing::info!("Serving {} rockets from session storage", local.len());
                Ok(local.into_iter().map(Rocket::from).collect())
            }
        }
    }

    /// Fetch one rocket with its launch facts.
    ///
    /// Falls back to the session copy, returned as stored, when the API
    /// request fails for any reason.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when neither source has the rocket.
    /// The API failure is kept as its source.
    pub async fn get_detail(&self, id: &str) -> Result<RocketDetail> {
        let endpoint = format!("{}/{}", ROCKETS_ENDPOINT, id);

        match self.client.get_json::<RemoteRocket>(&endpoint).await {
            Ok(remote) => Ok(remote.into_detail()),
            Err(e) => {
                tracing::warn!("Failed to fetch rocket {} from API: {}", id, e);

                self.local_rockets()
                    .into_iter()
                    .find(|rocket| rocket.id() == id)
                    .ok_or_else(|| CatalogError::NotFound {
                        id: id.to_string(),
                        cause: Some(Box::new(e)),
                    })
            }
        }
    }
}

/// Remote rockets in remote order, then each local rocket whose id is not
/// already in the result. Remote entries are kept as the API sent them.
fn merge_rockets(remote: Vec<Rocket>, local: Vec<RocketDetail>) -> Vec<Rocket> {
    let mut seen: HashSet<String> = remote.iter().map(|r| r.id.clone()).collect();
    let mut merged = remote;

    for rocket in local {
        if seen.insert(rocket.rocket.id.clone()) {
            merged.push(rocket.into_rocket());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(id: &str, name: &str) -> RocketDetail {
        RocketDetail::from(Rocket::new(id, name))
    }

    #[test]
    fn merge_keeps_remote_order_and_appends_unknown_local() {
        let remote = vec![Rocket::new("b", "Remote B"), Rocket::new("a", "Remote A")];
        let merged = merge_rockets(remote, vec![local("c", "Local C"), local("d", "Local D")]);

        let ids: Vec<&str> = merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn merge_prefers_remote_on_collision() {
        let remote = vec![Rocket::new("1", "From API")];
        let merged = merge_rockets(remote, vec![local("1", "From session")]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "From API");
    }

    #[test]
    fn merge_drops_repeated_local_ids() {
        let merged = merge_rockets(
            Vec::new(),
            vec![local("x", "first"), local("x", "second")],
        );

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "first");
    }

    #[test]
    fn merge_drops_local_detail_fields() {
        let mut entry = local("x", "Mine");
        entry.country = Some("Chile".into());

        let merged = merge_rockets(Vec::new(), vec![entry]);
        assert_eq!(merged[0], Rocket::new("x", "Mine"));
    }
}
