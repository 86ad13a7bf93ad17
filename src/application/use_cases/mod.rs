//! Use case implementations.

mod hydrate_session_use_case;
mod login_use_case;

pub use hydrate_session_use_case::HydrateSessionUseCase;
pub use login_use_case::LoginUseCase;
