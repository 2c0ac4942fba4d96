//! Mostrador Client - data/state layer for the Mostrador point of sale.
//!
//! # Architecture
//!
//! - The backend is the source of truth: collections are fetched
//!   wholesale, never merged or cached with eviction
//! - Reads are single-shot; bulk saves carry a bounded linear-backoff
//!   retry so seeding and migration batches survive transient blips
//! - [`AppState`] is an owned snapshot passed explicitly through callers;
//!   there is no process-wide singleton
//!
//! # Modules
//!
//! - [`api`] - REST collections client
//! - [`bootstrap`] - Initial load plus idempotent seeding and migration
//! - [`state`] - Snapshot of the backend collections
//! - [`storage`] - Opportunistic local key/value cache
//! - [`config`] - Environment-driven configuration with defaults
//!
//! # Example
//!
//! ```rust,ignore
//! use mostrador_client::{ApiClient, ClientConfig, bootstrap};
//!
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config);
//!
//! let mut state = bootstrap::load_initial_data(&client).await?;
//! bootstrap::initialize_default_data(&client, &mut state).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod retry;
pub mod state;
pub mod storage;

pub use api::{ApiClient, Table};
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, HttpError};
pub use retry::RetryPolicy;
pub use state::AppState;
pub use storage::{Storage, StorageError};
