//! Access rules for each area of the app.

use crate::domain::entities::{User, UserRole};

/// Who an area is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    Public,
    SignedIn,
    Customer,
    Franchisee,
    Worker,
    Admin,
}

/// Screen areas of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    Catalog,
    Quote,
    FranchiseApplication,
    Account,
    Bookings,
    Reviews,
    Payments,
    Properties,
    FranchiseePortal,
    Team,
    WorkerPortal,
    AdminConsole,
}

impl Area {
    #[must_use]
    pub const fn audience(self) -> Audience {
        match self {
            Self::Catalog | Self::Quote | Self::FranchiseApplication => Audience::Public,
            Self::Account | Self::Bookings | Self::Payments => Audience::SignedIn,
            Self::Reviews | Self::Properties => Audience::Customer,
            Self::FranchiseePortal | Self::Team => Audience::Franchisee,
            Self::WorkerPortal => Audience::Worker,
            Self::AdminConsole => Audience::Admin,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Catalog => "services",
            Self::Quote => "quotes",
            Self::FranchiseApplication => "franchise application",
            Self::Account => "account",
            Self::Bookings => "bookings",
            Self::Reviews => "reviews",
            Self::Payments => "payments",
            Self::Properties => "properties",
            Self::FranchiseePortal => "franchisee portal",
            Self::Team => "team",
            Self::WorkerPortal => "worker portal",
            Self::AdminConsole => "admin console",
        }
    }
}

/// Gate decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    RequiresLogin,
    Forbidden,
}

/// Decides whether `user` may open `area`.
///
/// Admins may open every area. Every franchisee role counts as franchisee.
#[must_use]
pub fn check(area: Area, user: Option<&User>) -> Access {
    let audience = area.audience();
    if audience == Audience::Public {
        return Access::Allowed;
    }

    let Some(user) = user else {
        return Access::RequiresLogin;
    };

    let role = user.role();
    if role.is_admin() {
        return Access::Allowed;
    }

    let allowed = match audience {
        Audience::Public | Audience::SignedIn => true,
        Audience::Customer => role == UserRole::Customer,
        Audience::Franchisee => role.is_franchisee(),
        Audience::Worker => role.is_worker(),
        Audience::Admin => false,
    };

    if allowed {
        Access::Allowed
    } else {
        Access::Forbidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn user(role: UserRole) -> User {
        User::new("u1", "u@example.com", "U", role)
    }

    #[test_case(Area::Catalog, None => Access::Allowed; "public area signed out")]
    #[test_case(Area::FranchiseApplication, None => Access::Allowed; "application is public")]
    #[test_case(Area::Bookings, None => Access::RequiresLogin; "bookings need login")]
    #[test_case(Area::AdminConsole, None => Access::RequiresLogin; "admin needs login first")]
    #[test_case(Area::Bookings, Some(UserRole::Franchisee) => Access::Allowed; "any signed in user")]
    #[test_case(Area::Properties, Some(UserRole::Customer) => Access::Allowed; "customer area")]
    #[test_case(Area::Properties, Some(UserRole::FranchiseeStaff) => Access::Forbidden; "customer area refuses staff")]
    #[test_case(Area::FranchiseePortal, Some(UserRole::Franchisee) => Access::Allowed; "franchisee")]
    #[test_case(Area::FranchiseePortal, Some(UserRole::FranchiseeOwner) => Access::Allowed; "franchisee owner")]
    #[test_case(Area::FranchiseePortal, Some(UserRole::FranchiseeStaff) => Access::Allowed; "franchisee staff")]
    #[test_case(Area::FranchiseePortal, Some(UserRole::Customer) => Access::Forbidden; "customer not franchisee")]
    #[test_case(Area::Team, Some(UserRole::FranchiseeOwner) => Access::Allowed; "franchisee manages team")]
    #[test_case(Area::Team, Some(UserRole::Worker) => Access::Forbidden; "worker cannot manage team")]
    #[test_case(Area::WorkerPortal, Some(UserRole::Worker) => Access::Allowed; "worker portal")]
    #[test_case(Area::WorkerPortal, Some(UserRole::Franchisee) => Access::Forbidden; "franchisee is not a worker")]
    #[test_case(Area::WorkerPortal, None => Access::RequiresLogin; "worker portal needs login")]
    #[test_case(Area::AdminConsole, Some(UserRole::Support) => Access::Forbidden; "support is not admin")]
    #[test_case(Area::AdminConsole, Some(UserRole::Admin) => Access::Allowed; "admin console")]
    #[test_case(Area::FranchiseePortal, Some(UserRole::Admin) => Access::Allowed; "admin opens franchisee")]
    #[test_case(Area::Reviews, Some(UserRole::Admin) => Access::Allowed; "admin opens customer")]
    fn test_check(area: Area, role: Option<UserRole>) -> Access {
        let user = role.map(user);
        check(area, user.as_ref())
    }
}
