//! Plain-text output for every command.
//!
//! Everything shown here is what the server returned; nothing is recomputed.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthStr;

use crate::domain::entities::{
    ApplicationReceipt, ApplicationStatus, ApplicationSummary, Booking, ComplianceOverview,
    Dashboard, Earnings, InviteReceipt, Job, JobDecision, PaymentCancellation, PaymentCapture,
    PaymentConfig, PaymentIntent, PaymentIntentStatus, PendingInvite, Property, Quote, Review,
    Service, Settlement, StatsReport, TeamMember, Territory, TrainingCompletion,
    TrainingOverview, TrainingStatus, User, WorkerProfile,
};
use crate::domain::notice::Notice;
use crate::infrastructure::config::DisplayConfig;

const EMPTY_CELL: &str = "-";

/// Column-aligned table. Widths are measured in terminal cells.
struct Table {
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: &'static [&'static str]) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.width());
                }
            }
        }

        let mut out = String::new();
        let header: Vec<String> = self.headers.iter().map(|h| (*h).to_string()).collect();
        for cells in std::iter::once(&header).chain(&self.rows) {
            let mut line = String::new();
            for (cell, width) in cells.iter().zip(&widths) {
                line.push_str(cell);
                line.push_str(&" ".repeat(width.saturating_sub(cell.width()) + 2));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(EMPTY_CELL)
        .to_string()
}

fn empty(what: &str) -> String {
    format!("No {what}.\n")
}

fn training_cell(status: &TrainingStatus) -> String {
    format!(
        "{}/{} ({}%)",
        status.completed, status.total_required, status.percent_complete
    )
}

/// Formats command output using the display settings.
#[derive(Debug, Clone)]
pub struct Renderer {
    date_format: String,
    currency: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}

impl Renderer {
    #[must_use]
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            date_format: display.date_format.clone(),
            currency: display.currency_symbol.clone(),
        }
    }

    #[must_use]
    pub fn money(&self, amount: f64) -> String {
        if amount < 0.0 {
            format!("-{}{:.2}", self.currency, -amount)
        } else {
            format!("{}{amount:.2}", self.currency)
        }
    }

    fn opt_money(&self, amount: Option<f64>) -> String {
        amount.map_or_else(|| EMPTY_CELL.to_string(), |a| self.money(a))
    }

    /// Formats with the configured pattern. An invalid pattern falls back
    /// to RFC 3339 instead of failing the command.
    #[must_use]
    pub fn date(&self, value: &DateTime<Utc>) -> String {
        let mut out = String::new();
        if write!(out, "{}", value.format(&self.date_format)).is_err() {
            return value.to_rfc3339();
        }
        out
    }

    fn opt_date(&self, value: Option<&DateTime<Utc>>) -> String {
        value.map_or_else(|| EMPTY_CELL.to_string(), |v| self.date(v))
    }

    #[must_use]
    pub fn user(&self, user: &User) -> String {
        let mut out = format!(
            "{} <{}>\nrole: {}\nid: {}\n",
            user.name(),
            user.email(),
            user.role(),
            user.id()
        );
        if !user.phone().is_empty() {
            let _ = writeln!(out, "phone: {}", user.phone());
        }
        if !user.assigned_fsas().is_empty() {
            let _ = writeln!(out, "territories: {}", user.assigned_fsas().join(", "));
        }
        out
    }

    #[must_use]
    pub fn services(&self, services: &[Service]) -> String {
        if services.is_empty() {
            return empty("services");
        }
        let mut table = Table::new(&[
            "ID",
            "NAME",
            "CATEGORY",
            "RESIDENTIAL",
            "COMMERCIAL",
            "PER SQFT",
            "MINUTES",
        ]);
        for service in services {
            table.row(vec![
                service.id.clone(),
                service.name.clone(),
                or_dash(Some(&service.category)),
                self.money(service.base_price_residential),
                self.money(service.base_price_commercial),
                self.money(service.price_per_sq_ft),
                service.estimated_duration.to_string(),
            ]);
        }
        table.render()
    }

    #[must_use]
    pub fn service(&self, service: &Service) -> String {
        let mut out = format!("{} ({})\n", service.name, service.id);
        if !service.description.is_empty() {
            let _ = writeln!(out, "{}", service.description);
        }
        let _ = writeln!(
            out,
            "residential: {}  commercial: {}  per sqft: {}",
            self.money(service.base_price_residential),
            self.money(service.base_price_commercial),
            self.money(service.price_per_sq_ft)
        );
        let _ = writeln!(out, "duration: {} min", service.estimated_duration);
        out
    }

    #[must_use]
    pub fn quote(&self, quote: &Quote) -> String {
        let mut out = format!("{}\n", quote.service_name);
        let _ = writeln!(out, "base:      {}", self.money(quote.base_price));
        let _ = writeln!(out, "area:      {}", self.money(quote.sqft_price));
        let _ = writeln!(out, "subtotal:  {}", self.money(quote.total_price));
        if quote.discount > 0.0 {
            let _ = writeln!(out, "discount: -{}", self.money(quote.discount));
        }
        let _ = writeln!(out, "total:     {}", self.money(quote.final_price));
        if let Some(frequency) = quote.frequency.filter(|_| quote.is_recurring) {
            let _ = writeln!(out, "recurring: {frequency}");
        }
        out
    }

    #[must_use]
    pub fn bookings(&self, bookings: &[Booking]) -> String {
        if bookings.is_empty() {
            return empty("bookings");
        }
        let mut table = Table::new(&["ID", "DATE", "SERVICE", "ADDRESS", "STATUS", "TOTAL"]);
        for booking in bookings {
            table.row(vec![
                booking.id.clone(),
                self.date(&booking.scheduled_date),
                or_dash(booking.service_name.as_deref().or(Some(&booking.service_id))),
                booking.address.clone(),
                booking.status.to_string(),
                self.money(booking.total_price),
            ]);
        }
        table.render()
    }

    #[must_use]
    pub fn booking(&self, booking: &Booking) -> String {
        let mut out = format!("booking {}\n", booking.id);
        let _ = writeln!(out, "status:    {}", booking.status);
        let _ = writeln!(out, "date:      {}", self.date(&booking.scheduled_date));
        let _ = writeln!(
            out,
            "address:   {}, {} ({})",
            booking.address,
            booking.postal_code,
            or_dash(Some(&booking.fsa_code))
        );
        let _ = writeln!(out, "type:      {}", booking.service_type);
        if let Some(frequency) = booking.recurring_frequency.filter(|_| booking.is_recurring) {
            let _ = writeln!(out, "recurring: {frequency}");
        }
        let _ = writeln!(out, "total:     {}", self.money(booking.total_price));
        if let Some(escrow) = &booking.escrow_status {
            let _ = writeln!(out, "payment:   {escrow}");
        }
        if let Some(notes) = booking.notes.as_deref().filter(|n| !n.is_empty()) {
            let _ = writeln!(out, "notes:     {notes}");
        }
        out
    }

    #[must_use]
    pub fn reviews(&self, reviews: &[Review]) -> String {
        if reviews.is_empty() {
            return empty("reviews");
        }
        let mut table = Table::new(&["BOOKING", "RATING", "DATE", "COMMENT"]);
        for review in reviews {
            table.row(vec![
                review.booking_id.clone(),
                format!("{}/5", review.rating),
                self.opt_date(review.created_at.as_ref()),
                or_dash(Some(&review.comment)),
            ]);
        }
        table.render()
    }

    #[must_use]
    pub fn properties(&self, properties: &[Property]) -> String {
        if properties.is_empty() {
            return empty("saved properties");
        }
        let mut table = Table::new(&["ID", "LABEL", "ADDRESS", "SQFT"]);
        for property in properties {
            table.row(vec![
                property.id.clone(),
                or_dash(Some(&property.label)),
                property.one_line_address(),
                property
                    .square_feet
                    .map_or_else(|| EMPTY_CELL.to_string(), |s| s.to_string()),
            ]);
        }
        table.render()
    }

    #[must_use]
    pub fn payment_config(&self, config: &PaymentConfig) -> String {
        match &config.publishable_key {
            Some(key) => format!("publishable key: {key}\n"),
            None => "Payments are not configured on the server.\n".to_string(),
        }
    }

    /// The client secret is left out; only the hosted card form needs it.
    #[must_use]
    pub fn payment_intent(&self, intent: &PaymentIntent) -> String {
        format!(
            "payment {}\namount: {}\nstatus: {}\n",
            intent.payment_intent_id,
            self.cents(intent.amount),
            intent.status
        )
    }

    #[must_use]
    pub fn payment_status(&self, status: &PaymentIntentStatus) -> String {
        let currency = status
            .currency
            .as_deref()
            .map(|c| format!(" {}", c.to_ascii_uppercase()))
            .unwrap_or_default();
        format!(
            "payment {}\namount: {}{currency}\nstatus: {}\n",
            status.id,
            self.cents(status.amount),
            status.status
        )
    }

    #[must_use]
    pub fn payment_capture(&self, capture: &PaymentCapture) -> String {
        format!(
            "payment {}\ncaptured: {}\nstatus: {}\n",
            capture.payment_intent_id,
            self.cents(capture.amount_captured),
            capture.status
        )
    }

    #[must_use]
    pub fn payment_cancellation(&self, cancellation: &PaymentCancellation) -> String {
        match cancellation {
            PaymentCancellation::Cancelled {
                payment_intent_id,
                status,
            } => format!("Payment hold released.\npayment {payment_intent_id}\nstatus: {status}\n"),
            PaymentCancellation::Refunded { refund_id, amount } => format!(
                "Payment was already charged and has been refunded.\nrefund {refund_id}\namount: {}\n",
                self.cents(*amount)
            ),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn cents(&self, cents: u64) -> String {
        self.money(cents as f64 / 100.0)
    }

    #[must_use]
    pub fn application_receipt(&self, receipt: &ApplicationReceipt) -> String {
        format!(
            "Application submitted.\napplication id: {}\nstatus: {}\n",
            receipt.application_id, receipt.status
        )
    }

    #[must_use]
    pub fn application_status(&self, status: &ApplicationStatus) -> String {
        let mut out = format!(
            "application {}\nbusiness:  {}\nstatus:    {}\nsubmitted: {}\n",
            status.application_id,
            or_dash(status.operating_name.as_deref()),
            status.status,
            self.opt_date(status.submitted_at.as_ref())
        );
        if !status.assigned_fsas.is_empty() {
            let _ = writeln!(out, "territories: {}", status.assigned_fsas.join(", "));
        }
        out
    }

    #[must_use]
    pub fn applications(&self, applications: &[ApplicationSummary]) -> String {
        if applications.is_empty() {
            return empty("applications");
        }
        let mut table = Table::new(&["ID", "BUSINESS", "CONTACT", "CITY", "FSAS", "STATUS", "SUBMITTED"]);
        for app in applications {
            table.row(vec![
                app.id.clone(),
                or_dash(app.operating_name.as_deref().or(app.legal_name.as_deref())),
                or_dash(app.contact_name.as_deref()),
                or_dash(app.city.as_deref()),
                or_dash(Some(&app.preferred_fsas.join(","))),
                app.status.to_string(),
                self.opt_date(app.submitted_at.as_ref()),
            ]);
        }
        table.render()
    }

    #[must_use]
    pub fn dashboard(&self, dashboard: &Dashboard) -> String {
        let franchisee = &dashboard.franchisee;
        let kpis = &dashboard.kpis;
        let stats = &dashboard.stats;

        let mut out = format!(
            "{} ({})\n",
            or_dash(franchisee.operating_name.as_deref()),
            franchisee.status
        );
        let _ = writeln!(
            out,
            "score {:.1}  acceptance {:.0}%  completion {:.0}%  rating {:.1}",
            kpis.score, kpis.acceptance_rate, kpis.completion_rate, kpis.avg_rating
        );
        let _ = writeln!(
            out,
            "jobs this week {}  pending {}  completed {}",
            stats.jobs_this_week, stats.pending_jobs, stats.completed_jobs
        );

        let territories: Vec<String> = dashboard
            .territories
            .iter()
            .filter_map(|t| {
                t.fsa_code
                    .as_deref()
                    .map(|fsa| format!("{fsa} ({})", t.protection_status))
            })
            .collect();
        if !territories.is_empty() {
            let _ = writeln!(out, "territories: {}", territories.join(", "));
        }

        let outstanding = dashboard.outstanding_compliance();
        if outstanding.is_empty() {
            out.push_str("compliance: all documents verified\n");
        } else {
            let _ = writeln!(out, "compliance needs attention: {}", outstanding.join(", "));
        }
        if !dashboard.hrbank_configured {
            out.push_str("HR Bank scheduling is not set up yet.\n");
        }
        out
    }

    #[must_use]
    pub fn jobs(&self, jobs: &[Job]) -> String {
        if jobs.is_empty() {
            return empty("jobs");
        }
        let mut table = Table::new(&["ID", "DATE", "WINDOW", "SERVICE", "CUSTOMER", "FSA", "STATUS", "NET"]);
        for job in jobs {
            table.row(vec![
                job.id.clone(),
                self.opt_date(job.scheduled_date.as_ref()),
                or_dash(job.time_window.as_deref()),
                or_dash(job.service_name.as_deref()),
                or_dash(job.customer_name.as_deref()),
                or_dash(job.fsa_code.as_deref()),
                job.status.to_string(),
                self.opt_money(job.net_to_franchisee.or(job.gross_amount)),
            ]);
        }
        table.render()
    }

    #[must_use]
    pub fn job_decision(&self, decision: &JobDecision) -> String {
        let mut out = format!("job {} is now {}\n", decision.job_id, decision.status);
        if decision.work_order_sent == Some(true) {
            out.push_str("Work order sent.\n");
        }
        out
    }

    #[must_use]
    pub fn settlements(&self, settlements: &[Settlement]) -> String {
        if settlements.is_empty() {
            return empty("settlements");
        }
        let show_franchisee = settlements.iter().any(|s| s.franchisee_name.is_some());
        let mut table = if show_franchisee {
            Table::new(&["ID", "FRANCHISEE", "PERIOD", "JOBS", "GROSS", "FEES", "NET", "STATUS"])
        } else {
            Table::new(&["ID", "PERIOD", "JOBS", "GROSS", "FEES", "NET", "STATUS"])
        };
        for settlement in settlements {
            let mut cells = vec![settlement.id.clone()];
            if show_franchisee {
                cells.push(or_dash(settlement.franchisee_name.as_deref()));
            }
            cells.extend([
                format!(
                    "{} to {}",
                    self.opt_date(settlement.period_start.as_ref()),
                    self.opt_date(settlement.period_end.as_ref())
                ),
                settlement.job_count.to_string(),
                self.money(settlement.gross_revenue),
                self.opt_money(settlement.platform_fees),
                self.money(settlement.net_payout),
                settlement.payout_status.to_string(),
            ]);
            table.row(cells);
        }
        table.render()
    }

    #[must_use]
    pub fn compliance(&self, overview: &ComplianceOverview) -> String {
        let mut out = String::new();
        if overview.documents.is_empty() {
            out.push_str(&empty("documents on file"));
        } else {
            let mut table = Table::new(&["DOCUMENT", "FILE", "STATUS", "EXPIRES"]);
            for doc in &overview.documents {
                table.row(vec![
                    doc.doc_type.clone(),
                    or_dash(doc.file_name.as_deref()),
                    doc.status.to_string(),
                    self.opt_date(doc.expires_at.as_ref()),
                ]);
            }
            out.push_str(&table.render());
        }

        if !overview.required_documents.is_empty() {
            out.push_str("\nRequired:\n");
            for required in &overview.required_documents {
                let _ = write!(out, "  {}", required.name);
                if let Some(coverage) = &required.min_coverage {
                    let _ = write!(out, " (minimum {coverage})");
                }
                if let Some(condition) = &required.required_if {
                    let _ = write!(out, " if {condition}");
                }
                out.push('\n');
            }
        }
        out
    }

    #[must_use]
    pub fn earnings(&self, earnings: &Earnings) -> String {
        format!(
            "total earnings: {}\ncompleted jobs: {}\naverage job:    {}\n",
            self.money(earnings.total_earnings),
            earnings.completed_jobs,
            self.money(earnings.average_job_value)
        )
    }

    #[must_use]
    pub fn territories(&self, territories: &[Territory]) -> String {
        if territories.is_empty() {
            return empty("territories");
        }
        let mut table = Table::new(&["FSA", "CITY", "PROVINCE", "FRANCHISEE", "STATUS", "SINCE"]);
        for territory in territories {
            let holder = if territory.is_assigned() {
                or_dash(
                    territory
                        .franchisee_name
                        .as_deref()
                        .or(territory.franchisee_id.as_deref()),
                )
            } else {
                "unassigned".to_string()
            };
            table.row(vec![
                territory.fsa_code.clone(),
                or_dash(territory.city.as_deref()),
                or_dash(territory.province.as_deref()),
                holder,
                territory.protection_status.to_string(),
                self.opt_date(territory.assigned_at.as_ref()),
            ]);
        }
        table.render()
    }

    #[must_use]
    pub fn accounts(&self, users: &[User]) -> String {
        if users.is_empty() {
            return empty("franchisee accounts");
        }
        let mut table = Table::new(&["ID", "NAME", "EMAIL", "ROLE", "FSAS"]);
        for user in users {
            table.row(vec![
                user.id().to_string(),
                user.name().to_string(),
                user.email().to_string(),
                user.role().to_string(),
                or_dash(Some(&user.assigned_fsas().join(","))),
            ]);
        }
        table.render()
    }

    #[must_use]
    pub fn stats(&self, report: &StatsReport) -> String {
        match report {
            StatsReport::Platform(stats) => format!(
                "franchisees: {} active, {} applications pending\n\
                 customers:   {}\n\
                 jobs:        {} total, {} this month, {} pending, {} in progress\n\
                 revenue:     {} this month\n\
                 territories: {} of {} assigned\n",
                stats.franchisees.active,
                stats.franchisees.pending_applications,
                stats.customers.total,
                stats.jobs.total,
                stats.jobs.this_month,
                stats.jobs.pending,
                stats.jobs.in_progress,
                self.money(stats.revenue.this_month),
                stats.territories.assigned,
                stats.territories.total,
            ),
            StatsReport::Legacy(stats) => format!(
                "bookings:    {} total, {} completed\n\
                 customers:   {}\n\
                 franchisees: {}\n\
                 revenue:     {}\n",
                stats.total_bookings,
                stats.completed_bookings,
                stats.total_customers,
                stats.total_franchisees,
                self.money(stats.total_revenue),
            ),
        }
    }

    #[must_use]
    pub fn invite_receipt(&self, receipt: &InviteReceipt) -> String {
        let mut out = format!(
            "{}\ninvite id: {}\ncode:      {}\n",
            receipt
                .message
                .as_deref()
                .unwrap_or("Invitation sent."),
            receipt.invite_id,
            receipt.invite_code
        );
        if let Some(expires) = &receipt.expires_at {
            let _ = writeln!(out, "expires:   {}", self.date(expires));
        }
        out
    }

    #[must_use]
    pub fn pending_invites(&self, invites: &[PendingInvite]) -> String {
        if invites.is_empty() {
            return empty("pending invitations");
        }
        let mut table = Table::new(&["ID", "NAME", "EMAIL", "SENT", "EXPIRES"]);
        for invite in invites {
            table.row(vec![
                invite.id.clone(),
                or_dash(Some(&invite.name)),
                invite.email.clone(),
                self.opt_date(invite.created_at.as_ref()),
                self.opt_date(invite.expires_at.as_ref()),
            ]);
        }
        table.render()
    }

    #[must_use]
    pub fn team(&self, members: &[TeamMember]) -> String {
        if members.is_empty() {
            return empty("team members");
        }
        let mut table = Table::new(&["ID", "NAME", "EMAIL", "STATUS", "TRAINING", "JOBS"]);
        for member in members {
            table.row(vec![
                member.id.clone(),
                member.name.clone(),
                member.email.clone(),
                member.status.to_string(),
                training_cell(&member.training_status),
                if member.is_eligible_for_jobs { "eligible" } else { "not yet" }.to_string(),
            ]);
        }
        table.render()
    }

    #[must_use]
    pub fn worker_profile(&self, profile: &WorkerProfile) -> String {
        let mut out = format!("{} <{}>\nstatus: {}\n", profile.name, profile.email, profile.status);
        if let Some(franchise) = profile
            .franchisee_name
            .as_deref()
            .or(profile.franchisee_id.as_deref())
        {
            let _ = writeln!(out, "franchise: {franchise}");
        }
        let _ = writeln!(out, "training: {}", training_cell(&profile.training_status));
        if !profile.training_status.missing_courses.is_empty() {
            let _ = writeln!(
                out,
                "missing: {}",
                profile.training_status.missing_courses.join(", ")
            );
        }
        if let Some(hrbank) = &profile.hrbank_worker_id {
            let _ = writeln!(out, "hr bank: {hrbank}");
        }
        let eligible = if profile.is_eligible_for_jobs {
            "eligible for jobs"
        } else {
            "not yet eligible for jobs"
        };
        let _ = writeln!(out, "{eligible}");
        out
    }

    #[must_use]
    pub fn training(&self, overview: &TrainingOverview) -> String {
        let summary = &overview.summary;
        let mut out = format!(
            "{}/{} courses complete ({}%)\n",
            summary.completed_courses, summary.total_courses, summary.percent_complete
        );
        if !overview.courses.is_empty() {
            let mut table = Table::new(&["COURSE", "PROGRESS", "STATUS", "EXPIRES"]);
            for course in &overview.courses {
                table.row(vec![
                    course.course_name.clone(),
                    format!("{}/{}", course.completed_content, course.total_content),
                    course.status.to_string(),
                    self.opt_date(course.expires_at.as_ref()),
                ]);
            }
            out.push_str(&table.render());
        }
        if summary.can_start_working {
            out.push_str("You can take jobs.\n");
        } else if summary.is_fully_trained {
            out.push_str("Training done. Run `cleangrid workers complete-training` to start taking jobs.\n");
        }
        out
    }

    #[must_use]
    pub fn training_completion(&self, completion: &TrainingCompletion) -> String {
        format!(
            "{}\nstatus: {}\n",
            completion.message.as_deref().unwrap_or("Training verified."),
            completion.status
        )
    }

    #[must_use]
    pub fn notice(&self, notice: &Notice) -> String {
        format!("{notice}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        LegacyStats, PayoutStatus, PlatformStats, ProtectionStatus, UserRole,
    };
    use chrono::TimeZone;
    use test_case::test_case;

    fn settlement(name: Option<&str>) -> Settlement {
        Settlement {
            id: "s1".into(),
            franchisee_id: Some("f1".into()),
            franchisee_name: name.map(str::to_string),
            period_start: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
            period_end: Some(Utc.with_ymd_and_hms(2024, 6, 7, 0, 0, 0).unwrap()),
            job_count: 4,
            gross_revenue: 800.0,
            platform_fees: Some(120.0),
            adjustments_total: None,
            net_payout: 680.0,
            payout_status: PayoutStatus::Paid,
            paid_at: None,
        }
    }

    #[test_case(1234.5 => "$1234.50"; "positive")]
    #[test_case(0.0 => "$0.00"; "zero")]
    #[test_case(-12.0 => "-$12.00"; "negative adjustment")]
    fn test_money(amount: f64) -> String {
        Renderer::default().money(amount)
    }

    #[test]
    fn test_custom_display_settings() {
        let renderer = Renderer::new(&DisplayConfig {
            date_format: "%d/%m/%Y".into(),
            currency_symbol: "CA$".into(),
        });
        let when = Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();

        assert_eq!(renderer.date(&when), "01/07/2024");
        assert_eq!(renderer.money(5.0), "CA$5.00");
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let renderer = Renderer::new(&DisplayConfig {
            date_format: "%Q".into(),
            currency_symbol: "$".into(),
        });
        let when = Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();

        assert_eq!(renderer.date(&when), "2024-07-01T09:00:00+00:00");
    }

    #[test]
    fn test_table_alignment_uses_display_width() {
        let mut table = Table::new(&["CITY", "FSA"]);
        table.row(vec!["Montréal".into(), "H2X".into()]);
        table.row(vec!["Ottawa".into(), "K1A".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "CITY      FSA");
        assert_eq!(lines[1], "Montréal  H2X");
        assert_eq!(lines[2], "Ottawa    K1A");
    }

    #[test]
    fn test_team_table() {
        let member: TeamMember = serde_json::from_str(
            r#"{"id": "w1", "email": "sam@example.com", "name": "Sam", "status": "active",
                "trainingStatus": {"totalRequired": 4, "completed": 4, "percentComplete": 100,
                                   "isFullyTrained": true},
                "isEligibleForJobs": true}"#,
        )
        .unwrap();

        let out = Renderer::default().team(&[member]);

        assert!(out.starts_with("ID"));
        assert!(out.contains("4/4 (100%)"));
        assert!(out.contains("eligible"));
    }

    #[test]
    fn test_refund_wording() {
        let out = Renderer::default().payment_cancellation(&PaymentCancellation::Refunded {
            refund_id: "re_1".into(),
            amount: 18_050,
        });

        assert!(out.contains("refunded"));
        assert!(out.contains("amount: $180.50"));
    }

    #[test]
    fn test_empty_lists() {
        let renderer = Renderer::default();
        assert_eq!(renderer.jobs(&[]), "No jobs.\n");
        assert_eq!(renderer.bookings(&[]), "No bookings.\n");
    }

    #[test]
    fn test_settlements_franchisee_column_only_for_admin_view() {
        let renderer = Renderer::default();

        let own = renderer.settlements(&[settlement(None)]);
        assert!(!own.contains("FRANCHISEE"));
        assert!(own.contains("2024-06-01 to 2024-06-07"));
        assert!(own.contains("$680.00"));

        let admin = renderer.settlements(&[settlement(Some("Clean Stars"))]);
        assert!(admin.contains("FRANCHISEE"));
        assert!(admin.contains("Clean Stars"));
    }

    #[test]
    fn test_unassigned_territory() {
        let territory = Territory {
            fsa_code: "M5V".into(),
            city: Some("Toronto".into()),
            province: Some("ON".into()),
            franchisee_id: None,
            franchisee_name: None,
            protection_status: ProtectionStatus::Unassigned,
            assigned_at: None,
        };

        let rendered = Renderer::default().territories(&[territory]);

        assert!(rendered.contains("unassigned"));
    }

    #[test]
    fn test_stats_both_generations() {
        let renderer = Renderer::default();

        let platform = renderer.stats(&StatsReport::Platform(PlatformStats::default()));
        assert!(platform.contains("territories: 0 of 0 assigned"));

        let legacy = renderer.stats(&StatsReport::Legacy(LegacyStats {
            total_bookings: 10,
            completed_bookings: 7,
            total_revenue: 1500.0,
            ..LegacyStats::default()
        }));
        assert!(legacy.contains("10 total, 7 completed"));
        assert!(legacy.contains("$1500.00"));
    }

    #[test]
    fn test_user_summary() {
        let user = User::new("u1", "jane@example.com", "Jane", UserRole::FranchiseeOwner);
        let rendered = Renderer::default().user(&user);
        assert!(rendered.starts_with("Jane <jane@example.com>\nrole: franchisee_owner\n"));
    }
}
