//! Platform user entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::{null_as_default, timestamp};

/// Account role as issued by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Customer,
    Franchisee,
    FranchiseeOwner,
    FranchiseeStaff,
    Admin,
    Support,
    Workforce,
    Worker,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Returns whether the role acts on behalf of a franchise.
    #[must_use]
    pub const fn is_franchisee(self) -> bool {
        matches!(
            self,
            Self::Franchisee | Self::FranchiseeOwner | Self::FranchiseeStaff
        )
    }

    /// Returns whether the role has platform administration rights.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Returns whether the role is a franchise worker doing the cleaning.
    #[must_use]
    pub const fn is_worker(self) -> bool {
        matches!(self, Self::Worker)
    }

    /// Returns wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Franchisee => "franchisee",
            Self::FranchiseeOwner => "franchisee_owner",
            Self::FranchiseeStaff => "franchisee_staff",
            Self::Admin => "admin",
            Self::Support => "support",
            Self::Workforce => "workforce",
            Self::Worker => "worker",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed-in user as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    email: String,
    name: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    role: UserRole,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    postal_code: Option<String>,
    #[serde(default, rename = "assignedFSAs", deserialize_with = "null_as_default")]
    assigned_fsas: Vec<String>,
    #[serde(default, with = "timestamp::option")]
    created_at: Option<DateTime<Utc>>,
}

impl User {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            phone: String::new(),
            role,
            address: None,
            postal_code: None,
            assigned_fsas: Vec::new(),
            created_at: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    #[must_use]
    pub fn assigned_fsas(&self) -> &[String] {
        &self.assigned_fsas
    }

    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }
}
