//! Infrastructure layer with external service adapters.

/// Backend REST API client and resource adapters.
pub mod api;
/// Application configuration.
pub mod config;
/// Session storage adapters.
pub mod storage;

pub use api::ApiClient;
pub use config::{AppConfig, CliArgs, LogLevel, SessionBackend, StorageManager};
pub use storage::{FileSessionStorage, KeyringSessionStorage};
