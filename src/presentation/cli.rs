//! Command tree.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand, ValueEnum};

use crate::domain::entities::{
    BookingStatus, FranchiseeStatus, Frequency, JobStatus, PayoutStatus, ServiceType, UserRole,
    WorkerStatus,
};
use crate::domain::serde_utils::parse_timestamp;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in, create an account, or sign out.
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Browse the service catalog.
    #[command(subcommand)]
    Services(ServiceCommand),

    /// Price a service. Totals come from the server.
    Quote(QuoteArgs),

    /// Create, list and cancel bookings.
    #[command(subcommand)]
    Bookings(BookingCommand),

    /// Rate completed bookings.
    #[command(subcommand)]
    Reviews(ReviewCommand),

    /// Saved service addresses.
    #[command(subcommand)]
    Properties(PropertyCommand),

    /// Hold, capture or cancel a booking payment.
    #[command(subcommand)]
    Pay(PaymentCommand),

    /// Apply to become a franchisee (interactive).
    Apply,

    /// Check a franchise application.
    Application {
        /// Application id from the submission receipt.
        id: String,
    },

    /// Franchisee portal.
    #[command(subcommand)]
    Franchisee(FranchiseeCommand),

    /// Franchise team management and the worker's own portal.
    #[command(subcommand)]
    Workers(WorkerCommand),

    /// Admin console.
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    Login {
        #[arg(long)]
        email: Option<String>,
        /// Read from the prompt when omitted.
        #[arg(long, env = "CLEANGRID_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    Signup(SignupArgs),
    Logout,
    /// Show the signed-in account.
    Whoami,
}

/// Account type offered at sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SignupRole {
    Customer,
    Franchisee,
}

impl From<SignupRole> for UserRole {
    fn from(role: SignupRole) -> Self {
        match role {
            SignupRole::Customer => Self::Customer,
            SignupRole::Franchisee => Self::Franchisee,
        }
    }
}

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long, value_enum, default_value_t = SignupRole::Customer)]
    pub role: SignupRole,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub postal_code: Option<String>,
    #[arg(long, env = "CLEANGRID_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ServiceCommand {
    List,
    Show {
        id: String,
    },
    /// Add a service to the catalog (admin).
    Create(NewServiceArgs),
}

#[derive(Debug, Args)]
pub struct NewServiceArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub category: String,
    #[arg(long = "type", value_enum, default_value_t = ServiceType::Residential)]
    pub service_type: ServiceType,
    #[arg(long)]
    pub residential_price: f64,
    #[arg(long)]
    pub commercial_price: f64,
    #[arg(long)]
    pub price_per_sqft: f64,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Minutes.
    #[arg(long)]
    pub duration: u32,
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    pub service_id: String,
    #[arg(long = "type", value_enum, default_value_t = ServiceType::Residential)]
    pub service_type: ServiceType,
    #[arg(long)]
    pub sqft: u32,
    /// Makes the quote recurring.
    #[arg(long, value_enum)]
    pub frequency: Option<Frequency>,
}

#[derive(Debug, Subcommand)]
pub enum BookingCommand {
    List,
    Show {
        id: String,
    },
    /// Quote and book a cleaning.
    Create(NewBookingArgs),
    Cancel {
        id: String,
    },
    /// Move a booking to another status (staff).
    Status {
        id: String,
        #[arg(value_enum)]
        status: BookingStatus,
    },
}

#[derive(Debug, Args)]
pub struct NewBookingArgs {
    #[command(flatten)]
    pub quote: QuoteArgs,
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub postal_code: String,
    /// RFC 3339, or a bare date for midnight UTC.
    #[arg(long, value_parser = parse_when)]
    pub date: DateTime<Utc>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ReviewCommand {
    List,
    Add {
        booking_id: String,
        /// 1 to 5.
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
        #[arg(long, default_value = "")]
        comment: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum PropertyCommand {
    List,
    Add(PropertyArgs),
    Update {
        id: String,
        #[command(flatten)]
        property: PropertyArgs,
    },
    Remove {
        id: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct PropertyArgs {
    #[arg(long)]
    pub label: String,
    #[arg(long)]
    pub street: String,
    #[arg(long)]
    pub unit: Option<String>,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub province: String,
    #[arg(long)]
    pub postal_code: String,
    #[arg(long)]
    pub sqft: Option<u32>,
    #[arg(long)]
    pub bedrooms: Option<u8>,
    #[arg(long)]
    pub bathrooms: Option<u8>,
    #[arg(long)]
    pub buzz_code: Option<String>,
    #[arg(long)]
    pub access_notes: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum PaymentCommand {
    /// Show the publishable key for the hosted card form.
    Config,
    /// Hold a payment for a booking.
    Create {
        booking_id: String,
    },
    Status {
        payment_intent_id: String,
    },
    /// Charge a held payment after the job is done.
    Capture {
        payment_intent_id: String,
    },
    /// Void a held payment, or refund one already charged.
    Cancel {
        payment_intent_id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum FranchiseeCommand {
    Dashboard,
    Jobs {
        #[arg(long, value_enum)]
        status: Option<JobStatus>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Accept {
        job_id: String,
    },
    Decline {
        job_id: String,
        #[arg(long)]
        reason: Option<String>,
    },
    Settlements {
        #[arg(long)]
        limit: Option<u32>,
    },
    Compliance,
    Earnings,
    /// Connect the franchise to HR Bank payroll.
    Hrbank {
        #[arg(long)]
        employer_id: Option<String>,
        #[arg(long, env = "CLEANGRID_HRBANK_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum WorkerCommand {
    /// Invite someone to join the team.
    Invite {
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// List team members and their training.
    Team,
    /// List invitations not yet accepted.
    Invites,
    CancelInvite {
        invite_id: String,
    },
    /// Activate, deactivate or suspend a worker.
    Status {
        worker_id: String,
        #[arg(value_enum)]
        status: WorkerStatus,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Link a worker to their HR Bank account.
    LinkHrbank {
        worker_id: String,
        hrbank_worker_id: String,
    },
    /// Create a worker account from an invitation code and sign in.
    AcceptInvite {
        invite_code: String,
        #[arg(long, env = "CLEANGRID_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Your worker profile.
    Profile,
    /// Your training courses.
    Training,
    /// Report finished training to start taking jobs.
    CompleteTraining,
    /// Bookings assigned to you.
    Jobs {
        #[arg(long, value_enum)]
        status: Option<BookingStatus>,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    Applications {
        #[arg(long, value_enum)]
        status: Option<FranchiseeStatus>,
    },
    Approve {
        application_id: String,
        /// FSAs to assign on approval.
        #[arg(long = "fsa")]
        fsas: Vec<String>,
        #[arg(long)]
        fee_tier: Option<String>,
    },
    Reject {
        application_id: String,
        #[arg(long)]
        reason: String,
    },
    /// Franchisee accounts.
    Franchisees,
    Activate {
        franchisee_id: String,
    },
    Territories,
    /// Assign one FSA, or release it when no franchisee is given.
    Assign {
        fsa: String,
        #[arg(long)]
        franchisee: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        province: Option<String>,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Assign several FSAs at once.
    AssignFsas {
        franchisee_id: String,
        #[arg(required = true)]
        fsas: Vec<String>,
    },
    Jobs {
        #[arg(long, value_enum)]
        status: Option<JobStatus>,
        #[arg(long)]
        fsa: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Reassign {
        job_id: String,
        #[arg(long)]
        franchisee: String,
        #[arg(long)]
        reason: Option<String>,
    },
    Settlements {
        #[arg(long, value_enum)]
        status: Option<PayoutStatus>,
    },
    ApproveSettlement {
        settlement_id: String,
    },
    Stats,
}

fn parse_when(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(raw).map_err(|e| format!("expected a date like 2024-07-01T09:00:00: {e}"))
}
