pub mod application_wizard;
pub mod notice_queue;
pub mod route_gate;
pub mod session_store;

pub use application_wizard::{ApplicationDraft, ApplicationWizard, WizardStep};
pub use notice_queue::NoticeQueue;
pub use route_gate::{Access, Area, Audience};
pub use session_store::SessionStore;
