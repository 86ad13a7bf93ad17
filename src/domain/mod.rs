//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// User-facing notices.
pub mod notice;
/// Port definitions.
pub mod ports;
/// Canadian postal code and FSA value objects.
pub mod postal;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{AuthToken, Session, User, UserRole};
pub use errors::{ApiError, AuthError, StorageError, ValidationError};
pub use notice::{Notice, NoticeLevel};
pub use ports::{AuthPort, BearerTokenProvider, SessionStoragePort};
pub use postal::{Fsa, PostalCode};
