//! Core library for the rocket catalog.
//!
//! This crate provides the domain models and the session-storage reader,
//! independent of any transport layer (HTTP, UI bindings, etc.).
//!
//! # Usage
//!
//! ```no_run
//! use catalog_core::storage::{read_local_rockets, MemoryStorage, USER_ROCKETS_KEY};
//!
//! let storage = MemoryStorage::new();
//! storage.set_item(USER_ROCKETS_KEY, r#"[{"id": "mine"}]"#);
//!
//! let local = read_local_rockets(&storage, USER_ROCKETS_KEY);
//! assert_eq!(local[0].rocket.id, "mine");
//! ```

pub mod models;
pub mod storage;

// Re-export commonly used types at crate root
pub use models::{RemoteRocket, Rocket, RocketDetail};
pub use storage::{MemoryStorage, SessionStorage};
