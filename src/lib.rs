//! Rocket catalog client.
//!
//! Reads the remote rocket catalog and reconciles it with rockets the user
//! created during the current session. When the API cannot be reached the
//! session copy is served instead. Also home to the [`NotificationCenter`]
//! that UI code uses for short-lived status messages.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use rocket_catalog::{CatalogConfig, MemoryStorage, RocketCatalog};
//!
//! # async fn run() -> rocket_catalog::Result<()> {
//! let config = CatalogConfig::from_env()?;
//! let catalog = RocketCatalog::from_config(&config, Arc::new(MemoryStorage::new()))?;
//!
//! let rockets = catalog.get_all().await?;
//! let detail = catalog.get_detail(&rockets[0].id).await?;
//! # let _ = detail;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod notifications;

pub use catalog_core::{models, storage};

// Re-export commonly used types at crate root
pub use catalog::RocketCatalog;
pub use catalog_core::{MemoryStorage, RemoteRocket, Rocket, RocketDetail, SessionStorage};
pub use client::{ApiClient, RequestOptions};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use notifications::{
    NewNotification, Notification, NotificationCenter, NotificationKind, NotificationMode,
};
