//! cleangrid - client for a cleaning-services franchise platform.
//!
//! Customers browse services, request quotes, book and pay for cleanings.
//! Franchisees apply for territories and manage their jobs, and admins run
//! the network. Everything goes through the platform's REST API; the
//! signed-in session is kept in the system keyring or a local file.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, session state and the wizard.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing the HTTP client, config and storage.
pub mod infrastructure;
/// Presentation layer containing the command tree and terminal output.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "cleangrid";
