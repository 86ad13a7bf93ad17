//! Application layer with use cases, session state and form logic.

/// Data transfer objects.
pub mod dto;
/// Stateful application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{HydrateOutcome, LoginResponse, SessionSource};
pub use services::{ApplicationWizard, NoticeQueue, SessionStore};
pub use use_cases::{HydrateSessionUseCase, LoginUseCase};
