//! Command dispatcher.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{HydrateOutcome, LoginResponse};
use crate::application::services::route_gate::{self, Access, Area};
use crate::application::services::{ApplicationWizard, NoticeQueue, SessionStore};
use crate::application::use_cases::{HydrateSessionUseCase, LoginUseCase};
use crate::domain::entities::{
    AcceptInvite, ApprovalDecision, Credentials, FsaAssignment, HrBankConfig, HrBankLink,
    JobFilter, JobReassignment, NewBooking, NewPaymentIntent, NewReview, NewService,
    PropertyInput, QuoteRequest, Registration, RejectionDecision, TerritoryAssignment,
    WorkerInvite, WorkerStatusUpdate,
};
use crate::domain::errors::{ApiError, AuthError};
use crate::domain::notice::{Notice, NoticeLevel};
use crate::domain::ports::{
    AdminPort, AuthPort, BookingPort, CatalogPort, FranchiseePort, PaymentPort, PropertyPort,
    SessionStoragePort, WorkerPort,
};
use crate::domain::postal::{Fsa, PostalCode};
use crate::infrastructure::api::ApiClient;

use super::apply::run_wizard;
use super::cli::{
    AdminCommand, AuthCommand, BookingCommand, Command, FranchiseeCommand, PaymentCommand,
    PropertyArgs, PropertyCommand, QuoteArgs, ReviewCommand, ServiceCommand, SignupArgs,
    WorkerCommand,
};
use super::prompt::Prompter;
use super::render::Renderer;

/// Backend resource ports.
#[derive(Clone)]
pub struct Backend {
    pub auth: Arc<dyn AuthPort>,
    pub catalog: Arc<dyn CatalogPort>,
    pub bookings: Arc<dyn BookingPort>,
    pub properties: Arc<dyn PropertyPort>,
    pub payments: Arc<dyn PaymentPort>,
    pub franchisee: Arc<dyn FranchiseePort>,
    pub workers: Arc<dyn WorkerPort>,
    pub admin: Arc<dyn AdminPort>,
}

impl Backend {
    /// Every port served by one HTTP client.
    #[must_use]
    pub fn from_client(client: &ApiClient) -> Self {
        Self {
            auth: Arc::new(client.clone()),
            catalog: Arc::new(client.clone()),
            bookings: Arc::new(client.clone()),
            properties: Arc::new(client.clone()),
            payments: Arc::new(client.clone()),
            franchisee: Arc::new(client.clone()),
            workers: Arc::new(client.clone()),
            admin: Arc::new(client.clone()),
        }
    }
}

/// Runs one command against the backend and reports the outcome.
pub struct App {
    backend: Backend,
    store: Arc<SessionStore>,
    storage_port: Arc<dyn SessionStoragePort>,
    login_use_case: LoginUseCase,
    hydrate_use_case: HydrateSessionUseCase,
    renderer: Renderer,
    notices: NoticeQueue,
    failed: bool,
    session_rejected: bool,
}

impl App {
    #[must_use]
    pub fn new(
        backend: Backend,
        storage_port: Arc<dyn SessionStoragePort>,
        store: Arc<SessionStore>,
        renderer: Renderer,
    ) -> Self {
        let login_use_case =
            LoginUseCase::new(backend.auth.clone(), storage_port.clone(), store.clone());
        let hydrate_use_case =
            HydrateSessionUseCase::new(backend.auth.clone(), storage_port.clone(), store.clone());

        Self {
            backend,
            store,
            storage_port,
            login_use_case,
            hydrate_use_case,
            renderer,
            notices: NoticeQueue::new(),
            failed: false,
            session_rejected: false,
        }
    }

    /// Restores the stored session before the command runs.
    pub async fn hydrate(&mut self, revalidate: bool) -> HydrateOutcome {
        let outcome = self.hydrate_use_case.execute(revalidate).await;
        if outcome == HydrateOutcome::Expired {
            self.notices
                .warn("Session expired", "Your session has ended. Please sign in again.");
        }
        outcome
    }

    /// Notices raised so far, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Whether any step of the command failed.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.failed
    }

    /// Runs `command`. Failures become notices; only terminal I/O errors
    /// are returned.
    ///
    /// # Errors
    /// Returns error if the terminal cannot be read or written.
    pub async fn run<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        io: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        if let Some(area) = area_of(&command)
            && !self.gate(area)
        {
            return Ok(());
        }

        let result = match command {
            Command::Auth(command) => self.auth(command, io).await,
            Command::Services(command) => self.services(command, io).await,
            Command::Quote(args) => {
                let result = self.backend.catalog.quote(&quote_request(&args)).await;
                self.report(result, "Failed to get a quote", io, |r, q| r.quote(q))
            }
            Command::Bookings(command) => self.bookings(command, io).await,
            Command::Reviews(command) => self.reviews(command, io).await,
            Command::Properties(command) => self.properties(command, io).await,
            Command::Pay(command) => self.payments(command, io).await,
            Command::Apply => self.apply(io).await,
            Command::Application { id } => {
                let result = self.backend.franchisee.application_status(&id).await;
                self.report(result, "Failed to load the application", io, |r, s| {
                    r.application_status(s)
                })
            }
            Command::Franchisee(command) => self.franchisee(command, io).await,
            Command::Workers(WorkerCommand::AcceptInvite {
                invite_code,
                password,
                phone,
            }) => self.accept_invite(invite_code, password, phone, io).await,
            Command::Workers(command) => self.workers(command, io).await,
            Command::Admin(command) => self.admin(command, io).await,
        };

        if std::mem::take(&mut self.session_rejected) {
            self.forget_stored_session().await;
        }
        result
    }

    async fn forget_stored_session(&mut self) {
        match self.storage_port.delete().await {
            Ok(()) => info!("Deleted the rejected session"),
            Err(e) => {
                warn!(error = %e, "Failed to delete the rejected session");
                self.notices.warn(
                    "Session not removed",
                    "The saved session could not be deleted. Sign in again to replace it.",
                );
            }
        }
    }

    fn gate(&mut self, area: Area) -> bool {
        let user = self.store.current_user();
        match route_gate::check(area, user.as_ref()) {
            Access::Allowed => true,
            Access::RequiresLogin => {
                debug!(area = area.label(), "Sign-in required");
                self.notices.warn(
                    "Sign in required",
                    format!(
                        "Sign in with `cleangrid auth login` to use {}.",
                        area.label()
                    ),
                );
                self.failed = true;
                false
            }
            Access::Forbidden => {
                warn!(area = area.label(), "Area not available to this account");
                self.notices.push(Notice::new(
                    NoticeLevel::Error,
                    "Access denied",
                    format!("Your account cannot open the {}.", area.label()),
                ));
                self.failed = true;
                false
            }
        }
    }

    /// Prints a successful result, or turns the error into a notice.
    fn report<T, R: BufRead, W: Write>(
        &mut self,
        result: Result<T, ApiError>,
        fallback: &str,
        io: &mut Prompter<R, W>,
        render: impl FnOnce(&Renderer, &T) -> String,
    ) -> io::Result<()> {
        match result {
            Ok(value) => io.say(&render(&self.renderer, &value)),
            Err(err) => {
                self.api_failure(&err, fallback);
                Ok(())
            }
        }
    }

    fn acknowledge<R: BufRead, W: Write>(
        &mut self,
        result: Result<Option<String>, ApiError>,
        fallback: &str,
        done: &str,
        io: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        self.report(result, fallback, io, |_, message| {
            format!("{}\n", message.as_deref().unwrap_or(done))
        })
    }

    fn api_failure(&mut self, err: &ApiError, fallback: &str) {
        self.failed = true;
        self.notices.api_failure(err, fallback);
        if err.is_unauthorized() && self.store.is_authenticated() {
            info!("Server no longer accepts the session, clearing it");
            self.store.clear();
            self.session_rejected = true;
        }
    }

    fn invalid(&mut self, message: impl Into<String>) {
        self.failed = true;
        self.notices
            .push(Notice::new(NoticeLevel::Error, "Invalid input", message));
    }

    fn parse_fsas(&mut self, raw: &[String]) -> Option<Vec<String>> {
        let mut fsas = Vec::with_capacity(raw.len());
        for value in raw {
            let Some(fsa) = Fsa::parse(value) else {
                self.invalid(format!("'{value}' is not a valid FSA"));
                return None;
            };
            if !fsas.contains(&fsa.to_string()) {
                fsas.push(fsa.to_string());
            }
        }
        Some(fsas)
    }

    fn current_user_id(&self) -> Option<String> {
        self.store.current_user().map(|u| u.id().to_string())
    }

    /// Id of the signed-in user, or a notice when there is none.
    fn acting_id(&mut self) -> Option<String> {
        let id = self.current_user_id();
        if id.is_none() {
            self.notices.auth_failure(&AuthError::NotSignedIn, "Not signed in");
            self.failed = true;
        }
        id
    }

    async fn auth<R: BufRead, W: Write>(
        &mut self,
        command: AuthCommand,
        io: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        match command {
            AuthCommand::Login { email, password } => {
                let email = match email {
                    Some(email) => email,
                    None => io.ask("Email")?,
                };
                let password = match password {
                    Some(password) => password,
                    None => io.ask("Password")?,
                };
                let result = self
                    .login_use_case
                    .execute(&Credentials::new(email, password))
                    .await;
                self.signed_in(result, "Login failed", io)
            }
            AuthCommand::Signup(args) => {
                let registration = self.registration(args, io)?;
                let result = self.login_use_case.signup(&registration).await;
                self.signed_in(result, "Sign-up failed", io)
            }
            AuthCommand::Logout => match self.login_use_case.logout().await {
                Ok(()) => io.say("Signed out.\n"),
                Err(err) => {
                    self.failed = true;
                    self.notices
                        .auth_failure(&err, "Signed out, but the saved session could not be removed");
                    Ok(())
                }
            },
            AuthCommand::Whoami => match self.store.current_user() {
                Some(user) => io.say(&self.renderer.user(&user)),
                None => {
                    self.notices.auth_failure(&AuthError::NotSignedIn, "Not signed in");
                    self.failed = true;
                    Ok(())
                }
            },
        }
    }

    fn registration<R: BufRead, W: Write>(
        &self,
        args: SignupArgs,
        io: &mut Prompter<R, W>,
    ) -> io::Result<Registration> {
        let password = match args.password {
            Some(password) => password,
            None => io.ask("Choose a password")?,
        };
        let mut registration = Registration::customer(args.email, password, args.name, args.phone);
        registration.role = args.role.into();
        registration.address = args.address;
        registration.postal_code = args
            .postal_code
            .map(|raw| PostalCode::parse(&raw).map_or(raw, |p| p.to_string()));
        Ok(registration)
    }

    fn signed_in<R: BufRead, W: Write>(
        &mut self,
        result: Result<LoginResponse, AuthError>,
        fallback: &str,
        io: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        match result {
            Ok(response) => {
                if !response.session_persisted {
                    self.notices.warn(
                        "Session not saved",
                        "You are signed in for this command only.",
                    );
                }
                io.say(&format!(
                    "Signed in as {} ({}).\n",
                    response.user.email(),
                    response.user.role()
                ))
            }
            Err(err) => {
                self.failed = true;
                self.notices.auth_failure(&err, fallback);
                Ok(())
            }
        }
    }

    async fn services<R: BufRead, W: Write>(
        &mut self,
        command: ServiceCommand,
        io: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        match command {
            ServiceCommand::List => {
                let result = self.backend.catalog.list_services().await;
                self.report(result, "Failed to load services", io, |r, s| r.services(s))
            }
            ServiceCommand::Show { id } => {
                let result = self.backend.catalog.get_service(&id).await;
                self.report(result, "Failed to load the service", io, |r, s| r.service(s))
            }
            ServiceCommand::Create(args) => {
                let service = NewService {
                    name: args.name,
                    category: args.category,
                    service_type: args.service_type,
                    base_price_residential: args.residential_price,
                    base_price_commercial: args.commercial_price,
                    price_per_sq_ft: args.price_per_sqft,
                    description: args.description,
                    estimated_duration: args.duration,
                };
                let result = self.backend.catalog.create_service(&service).await;
                self.report(result, "Failed to create the service", io, |r, s| r.service(s))
            }
        }
    }

    async fn bookings<R: BufRead, W: Write>(
        &mut self,
        command: BookingCommand,
        io: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        match command {
            BookingCommand::List => {
                let result = self.backend.bookings.list_bookings().await;
                self.report(result, "Failed to load bookings", io, |r, b| r.bookings(b))
            }
            BookingCommand::Show { id } => {
                let result = self.backend.bookings.get_booking(&id).await;
                self.report(result, "Failed to load the booking", io, |r, b| r.booking(b))
            }
            BookingCommand::Create(args) => {
                let Some(postal_code) = PostalCode::parse(&args.postal_code) else {
                    self.invalid("Postal code must look like A1A 1A1.");
                    return Ok(());
                };
                io.say(&format!("service area: {}\n", postal_code.fsa()))?;

                let request = quote_request(&args.quote);
                let quote = match self.backend.catalog.quote(&request).await {
                    Ok(quote) => quote,
                    Err(err) => {
                        self.api_failure(&err, "Failed to get a quote");
                        return Ok(());
                    }
                };
                io.say(&self.renderer.quote(&quote))?;

                let booking = NewBooking {
                    service_id: request.service_id,
                    service_type: request.service_type,
                    address: args.address,
                    postal_code: postal_code.to_string(),
                    square_feet: request.square_feet,
                    scheduled_date: args.date,
                    is_recurring: request.is_recurring,
                    recurring_frequency: request.frequency,
                    total_price: quote.final_price,
                    notes: args.notes,
                };
                let result = self.backend.bookings.create_booking(&booking).await;
                self.report(result, "Failed to create the booking", io, |r, b| r.booking(b))
            }
            BookingCommand::Cancel { id } => {
                let booking = match self.backend.bookings.get_booking(&id).await {
                    Ok(booking) => booking,
                    Err(err) => {
                        self.api_failure(&err, "Failed to load the booking");
                        return Ok(());
                    }
                };
                if !booking.status.is_cancellable() {
                    self.invalid(format!(
                        "Booking {} is {} and can no longer be cancelled.",
                        booking.id, booking.status
                    ));
                    return Ok(());
                }
                let result = self.backend.bookings.cancel_booking(&id).await;
                self.acknowledge(result, "Failed to cancel the booking", "Booking cancelled.", io)
            }
            BookingCommand::Status { id, status } => {
                let result = self.backend.bookings.update_status(&id, status).await;
                self.report(result, "Failed to update the booking", io, |r, b| r.booking(b))
            }
        }
    }

    async fn reviews<R: BufRead, W: Write>(
        &mut self,
        command: ReviewCommand,
        io: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        match command {
            ReviewCommand::List => {
                let result = self.backend.bookings.list_reviews().await;
                self.report(result, "Failed to load reviews", io, |r, v| r.reviews(v))
            }
            ReviewCommand::Add {
                booking_id,
                rating,
                comment,
            } => {
                let Some(review) = NewReview::new(booking_id, rating, comment) else {
                    self.invalid("Rating must be between 1 and 5.");
                    return Ok(());
                };
                let result = self.backend.bookings.create_review(&review).await;
                self.report(result, "Failed to submit the review", io, |_, _| {
                    "Thanks for your review.\n".to_string()
                })
            }
        }
    }

    async fn properties<R: BufRead, W: Write>(
        &mut self,
        command: PropertyCommand,
        io: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        match command {
            PropertyCommand::List => {
                let result = self.backend.properties.list_properties().await;
                self.report(result, "Failed to load properties", io, |r, p| r.properties(p))
            }
            PropertyCommand::Add(args) => {
                let Some(input) = self.property_input(args) else {
                    return Ok(());
                };
                let result = self.backend.properties.create_property(&input).await;
                self.report(result, "Failed to save the property", io, |r, p| {
                    r.properties(std::slice::from_ref(p))
                })
            }
            PropertyCommand::Update { id, property } => {
                let Some(input) = self.property_input(property) else {
                    return Ok(());
                };
                let result = self.backend.properties.update_property(&id, &input).await;
                self.report(result, "Failed to update the property", io, |r, p| {
                    r.properties(std::slice::from_ref(p))
                })
            }
            PropertyCommand::Remove { id } => {
                let result = self.backend.properties.delete_property(&id).await;
                self.report(result, "Failed to remove the property", io, |_, ()| {
                    "Property removed.\n".to_string()
                })
            }
        }
    }

    fn property_input(&mut self, args: PropertyArgs) -> Option<PropertyInput> {
        let Some(postal_code) = PostalCode::parse(&args.postal_code) else {
            self.invalid("Postal code must look like A1A 1A1.");
            return None;
        };
        Some(PropertyInput {
            label: args.label,
            street: args.street,
            unit: args.unit,
            city: args.city,
            province: args.province.trim().to_uppercase(),
            postal_code: postal_code.to_string(),
            square_feet: args.sqft,
            bedrooms: args.bedrooms,
            bathrooms: args.bathrooms,
            buzz_code: args.buzz_code,
            access_notes: args.access_notes,
        })
    }

    async fn payments<R: BufRead, W: Write>(
        &mut self,
        command: PaymentCommand,
        io: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        match command {
            PaymentCommand::Config => {
                let result = self.backend.payments.config().await;
                self.report(result, "Failed to load payment settings", io, |r, c| {
                    r.payment_config(c)
                })
            }
            PaymentCommand::Create { booking_id } => {
                let Some(user) = self.store.current_user() else {
                    self.notices.auth_failure(&AuthError::NotSignedIn, "Not signed in");
                    self.failed = true;
                    return Ok(());
                };
                let booking = match self.backend.bookings.get_booking(&booking_id).await {
                    Ok(booking) => booking,
                    Err(err) => {
                        self.api_failure(&err, "Failed to load the booking");
                        return Ok(());
                    }
                };

                let intent = NewPaymentIntent {
                    amount: NewPaymentIntent::cents_from_dollars(booking.total_price),
                    service_name: booking.service_name.unwrap_or(booking.service_id),
                    booking_id: booking.id,
                    customer_email: user.email().to_string(),
                    customer_name: user.name().to_string(),
                };
                let result = self.backend.payments.create_intent(&intent).await;
                self.report(result, "Failed to start the payment", io, |r, p| {
                    r.payment_intent(p)
                })
            }
            PaymentCommand::Status { payment_intent_id } => {
                let result = self.backend.payments.intent_status(&payment_intent_id).await;
                self.report(result, "Failed to load the payment", io, |r, s| {
                    r.payment_status(s)
                })
            }
            PaymentCommand::Capture { payment_intent_id } => {
                let result = self.backend.payments.capture(&payment_intent_id).await;
                self.report(result, "Failed to capture the payment", io, |r, c| {
                    r.payment_capture(c)
                })
            }
            PaymentCommand::Cancel { payment_intent_id } => {
                let result = self.backend.payments.cancel(&payment_intent_id).await;
                self.report(result, "Failed to cancel the payment", io, |r, c| {
                    r.payment_cancellation(c)
                })
            }
        }
    }

    async fn apply<R: BufRead, W: Write>(&mut self, io: &mut Prompter<R, W>) -> io::Result<()> {
        let mut wizard = ApplicationWizard::new();
        if let Some(user) = self.store.current_user() {
            let draft = wizard.draft_mut();
            draft.contact_name = user.name().to_string();
            draft.email = user.email().to_string();
            draft.phone = user.phone().to_string();
        }

        let Some(application) = run_wizard(&mut wizard, io)? else {
            io.say("Application not submitted.\n")?;
            return Ok(());
        };

        let result = self.backend.franchisee.apply(&application).await;
        self.report(result, "Failed to submit the application", io, |r, receipt| {
            r.application_receipt(receipt)
        })
    }

    async fn franchisee<R: BufRead, W: Write>(
        &mut self,
        command: FranchiseeCommand,
        io: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        let port = self.backend.franchisee.clone();
        match command {
            FranchiseeCommand::Dashboard => {
                let result = port.dashboard().await;
                self.report(result, "Failed to load the dashboard", io, |r, d| r.dashboard(d))
            }
            FranchiseeCommand::Jobs { status, limit } => {
                let filter = JobFilter {
                    status,
                    fsa: None,
                    limit,
                };
                let result = port.jobs(&filter).await;
                self.report(result, "Failed to load jobs", io, |r, j| r.jobs(j))
            }
            FranchiseeCommand::Accept { job_id } => {
                let result = port.accept_job(&job_id).await;
                self.report(result, "Failed to accept the job", io, |r, d| r.job_decision(d))
            }
            FranchiseeCommand::Decline { job_id, reason } => {
                let result = port.decline_job(&job_id, reason).await;
                self.report(result, "Failed to decline the job", io, |r, d| r.job_decision(d))
            }
            FranchiseeCommand::Settlements { limit } => {
                let result = port.settlements(limit).await;
                self.report(result, "Failed to load settlements", io, |r, s| r.settlements(s))
            }
            FranchiseeCommand::Compliance => {
                let result = port.compliance().await;
                self.report(result, "Failed to load compliance documents", io, |r, c| {
                    r.compliance(c)
                })
            }
            FranchiseeCommand::Earnings => {
                let result = port.earnings().await;
                self.report(result, "Failed to load earnings", io, |r, e| r.earnings(e))
            }
            FranchiseeCommand::Hrbank {
                employer_id,
                api_key,
            } => {
                let config = HrBankConfig {
                    hrbank_employer_id: employer_id,
                    hrbank_api_key: api_key,
                };
                if config.is_empty() {
                    self.invalid("Give --employer-id, --api-key, or both.");
                    return Ok(());
                }
                let result = port.configure_hrbank(&config).await;
                let done = "HR Bank configuration updated.";
                self.acknowledge(result, "Failed to configure HR Bank", done, io)
            }
        }
    }

    async fn accept_invite<R: BufRead, W: Write>(
        &mut self,
        invite_code: String,
        password: Option<String>,
        phone: Option<String>,
        io: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        let password = match password {
            Some(password) => password,
            None => io.ask("Choose a password")?,
        };
        let accept = AcceptInvite {
            invite_code,
            password,
            phone,
        };
        let result = self.login_use_case.accept_invite(&accept).await;
        let accepted = result.is_ok();
        self.signed_in(result, "Failed to accept the invitation", io)?;
        if accepted {
            self.notices.info(
                "Training required",
                "Finish your courses, then run `cleangrid workers complete-training` to start taking jobs.",
            );
        }
        Ok(())
    }

    /// Team management for franchisees and self-service for workers. The
    /// signed-in user's id names the franchise or the worker.
    async fn workers<R: BufRead, W: Write>(
        &mut self,
        command: WorkerCommand,
        io: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        let port = self.backend.workers.clone();
        let Some(me) = self.acting_id() else {
            return Ok(());
        };
        match command {
            WorkerCommand::Invite { email, name, phone } => {
                let invite = WorkerInvite {
                    email: email.trim().to_string(),
                    name,
                    phone,
                };
                let result = port.invite(&me, &invite).await;
                self.report(result, "Failed to send the invitation", io, |r, i| {
                    r.invite_receipt(i)
                })
            }
            WorkerCommand::Team => {
                let result = port.team(&me).await;
                self.report(result, "Failed to load the team", io, |r, t| r.team(t))
            }
            WorkerCommand::Invites => {
                let result = port.pending_invites(&me).await;
                self.report(result, "Failed to load invitations", io, |r, i| {
                    r.pending_invites(i)
                })
            }
            WorkerCommand::CancelInvite { invite_id } => {
                let result = port.cancel_invite(&me, &invite_id).await;
                let done = "Invitation cancelled.";
                self.acknowledge(result, "Failed to cancel the invitation", done, io)
            }
            WorkerCommand::Status {
                worker_id,
                status,
                reason,
            } => {
                let update = WorkerStatusUpdate { status, reason };
                let result = port.set_status(&me, &worker_id, &update).await;
                let done = format!("Worker is now {status}.");
                self.acknowledge(result, "Failed to update the worker", &done, io)
            }
            WorkerCommand::LinkHrbank {
                worker_id,
                hrbank_worker_id,
            } => {
                let link = HrBankLink { hrbank_worker_id };
                let result = port.link_hrbank(&me, &worker_id, &link).await;
                let done = "HR Bank account linked.";
                self.acknowledge(result, "Failed to link the HR Bank account", done, io)
            }
            WorkerCommand::Profile => {
                let result = port.profile(&me).await;
                self.report(result, "Failed to load your profile", io, |r, p| {
                    r.worker_profile(p)
                })
            }
            WorkerCommand::Training => {
                let result = port.training(&me).await;
                self.report(result, "Failed to load training", io, |r, t| r.training(t))
            }
            WorkerCommand::CompleteTraining => {
                let result = port.complete_training(&me).await;
                self.report(result, "Failed to complete training", io, |r, c| {
                    r.training_completion(c)
                })
            }
            WorkerCommand::Jobs { status } => {
                let result = WorkerPort::jobs(port.as_ref(), &me, status).await;
                self.report(result, "Failed to load your jobs", io, |r, b| r.bookings(b))
            }
            WorkerCommand::AcceptInvite {
                invite_code,
                password,
                phone,
            } => self.accept_invite(invite_code, password, phone, io).await,
        }
    }

    async fn admin<R: BufRead, W: Write>(
        &mut self,
        command: AdminCommand,
        io: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        let port = self.backend.admin.clone();
        match command {
            AdminCommand::Applications { status } => {
                let result = port.applications(status).await;
                self.report(result, "Failed to load applications", io, |r, a| {
                    r.applications(a)
                })
            }
            AdminCommand::Approve {
                application_id,
                fsas,
                fee_tier,
            } => {
                let Some(assigned_fsas) = self.parse_fsas(&fsas) else {
                    return Ok(());
                };
                let decision = ApprovalDecision {
                    assigned_fsas,
                    per_job_fee_tier: fee_tier,
                    approved_by: self.current_user_id(),
                };
                let result = port.approve_application(&application_id, &decision).await;
                self.acknowledge(result, "Failed to approve the application", "Application approved.", io)
            }
            AdminCommand::Reject {
                application_id,
                reason,
            } => {
                let result = port
                    .reject_application(&application_id, &RejectionDecision { reason })
                    .await;
                self.acknowledge(result, "Failed to reject the application", "Application rejected.", io)
            }
            AdminCommand::Franchisees => {
                let result = port.franchisee_accounts().await;
                self.report(result, "Failed to load franchisees", io, |r, u| r.accounts(u))
            }
            AdminCommand::Activate { franchisee_id } => {
                let result = port.activate_franchisee(&franchisee_id).await;
                self.acknowledge(result, "Failed to activate the franchisee", "Franchisee activated.", io)
            }
            AdminCommand::Territories => {
                let result = port.territories().await;
                self.report(result, "Failed to load territories", io, |r, t| r.territories(t))
            }
            AdminCommand::Assign {
                fsa,
                franchisee,
                city,
                province,
                reason,
            } => {
                let Some(fsa) = Fsa::extract(&fsa) else {
                    self.invalid(format!("'{fsa}' is not a valid FSA"));
                    return Ok(());
                };
                let done = if franchisee.is_some() {
                    "Territory assigned."
                } else {
                    "Territory released."
                };
                let assignment = TerritoryAssignment {
                    franchisee_id: franchisee,
                    city,
                    province,
                    reason,
                };
                let result = port.assign_territory(fsa.as_str(), &assignment).await;
                self.acknowledge(result, "Failed to update the territory", done, io)
            }
            AdminCommand::AssignFsas {
                franchisee_id,
                fsas,
            } => {
                let Some(fsa_codes) = self.parse_fsas(&fsas) else {
                    return Ok(());
                };
                let assignment = FsaAssignment {
                    franchisee_id,
                    fsa_codes,
                };
                let result = port.assign_fsas(&assignment).await;
                self.acknowledge(result, "Failed to assign FSAs", "FSAs assigned.", io)
            }
            AdminCommand::Jobs { status, fsa, limit } => {
                let fsa = match fsa.as_deref().map(Fsa::extract) {
                    Some(None) => {
                        self.invalid("FSA filter must look like M5V or a postal code.");
                        return Ok(());
                    }
                    Some(Some(fsa)) => Some(fsa.to_string()),
                    None => None,
                };
                let filter = JobFilter { status, fsa, limit };
                let result = AdminPort::jobs(port.as_ref(), &filter).await;
                self.report(result, "Failed to load jobs", io, |r, j| r.jobs(j))
            }
            AdminCommand::Reassign {
                job_id,
                franchisee,
                reason,
            } => {
                let reassignment = JobReassignment {
                    franchisee_id: franchisee,
                    reason,
                    admin_id: self.current_user_id(),
                };
                let result = port.reassign_job(&job_id, &reassignment).await;
                self.acknowledge(result, "Failed to reassign the job", "Job reassigned.", io)
            }
            AdminCommand::Settlements { status } => {
                let result = AdminPort::settlements(port.as_ref(), status).await;
                self.report(result, "Failed to load settlements", io, |r, s| r.settlements(s))
            }
            AdminCommand::ApproveSettlement { settlement_id } => {
                let result = port.approve_settlement(&settlement_id).await;
                self.acknowledge(result, "Failed to approve the settlement", "Settlement approved.", io)
            }
            AdminCommand::Stats => {
                let result = port.stats().await;
                self.report(result, "Failed to load platform stats", io, |r, s| r.stats(s))
            }
        }
    }
}

fn quote_request(args: &QuoteArgs) -> QuoteRequest {
    let request = QuoteRequest::one_time(args.service_id.clone(), args.service_type, args.sqft);
    match args.frequency {
        Some(frequency) => request.recurring(frequency),
        None => request,
    }
}

/// Area a command belongs to; `None` for commands anyone may run.
fn area_of(command: &Command) -> Option<Area> {
    let area = match command {
        Command::Auth(AuthCommand::Whoami) => Area::Account,
        Command::Auth(_) => return None,
        Command::Services(ServiceCommand::Create(_)) | Command::Admin(_) => Area::AdminConsole,
        Command::Services(_) => Area::Catalog,
        Command::Quote(_) => Area::Quote,
        Command::Bookings(_) => Area::Bookings,
        Command::Reviews(_) => Area::Reviews,
        Command::Properties(_) => Area::Properties,
        Command::Pay(_) => Area::Payments,
        Command::Apply | Command::Application { .. } => Area::FranchiseApplication,
        Command::Franchisee(_) => Area::FranchiseePortal,
        Command::Workers(WorkerCommand::AcceptInvite { .. }) => return None,
        Command::Workers(
            WorkerCommand::Profile
            | WorkerCommand::Training
            | WorkerCommand::CompleteTraining
            | WorkerCommand::Jobs { .. },
        ) => Area::WorkerPortal,
        Command::Workers(_) => Area::Team,
    };
    Some(area)
}
