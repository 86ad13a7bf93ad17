//! Domain entity definitions.

mod application;
mod booking;
mod credentials;
mod franchisee;
mod job;
mod payment;
mod property;
mod service;
mod session;
mod settlement;
mod stats;
mod territory;
mod token;
mod user;
mod worker;

pub use application::{
    ApplicationReceipt, ApplicationStatus, ApplicationSummary, ApprovalDecision,
    FranchiseeApplication, FranchiseeStatus, LegalType, RejectionDecision,
};
pub use booking::{
    Booking, BookingStatus, BookingStatusUpdate, NewBooking, NewReview, Review,
};
pub use credentials::{Credentials, Registration};
pub use franchisee::{
    ComplianceDocument, ComplianceOverview, ComplianceState, Dashboard, Earnings,
    FranchiseeSummary, HrBankConfig, JobStats, Kpis, RequiredDocument, TerritorySummary,
};
pub use job::{Job, JobDecision, JobFilter, JobReassignment, JobStatus};
pub use payment::{
    NewPaymentIntent, PaymentCancellation, PaymentCapture, PaymentConfig, PaymentIntent,
    PaymentIntentStatus,
};
pub use property::{Property, PropertyInput};
pub use service::{Frequency, NewService, Quote, QuoteRequest, Service, ServiceType};
pub use session::Session;
pub use settlement::{PayoutStatus, Settlement};
pub use stats::{
    CustomerCounts, FranchiseeCounts, JobCounts, LegacyStats, PlatformStats, RevenueTotals,
    StatsReport, TerritoryCounts,
};
pub use territory::{FsaAssignment, ProtectionStatus, Territory, TerritoryAssignment};
pub use token::AuthToken;
pub use user::{User, UserRole};
pub use worker::{
    AcceptInvite, CourseProgress, CourseState, HrBankLink, InviteReceipt, PendingInvite,
    TeamMember, TrainingCompletion, TrainingOverview, TrainingStatus, TrainingSummary,
    WorkerInvite, WorkerProfile, WorkerStatus, WorkerStatusUpdate,
};
