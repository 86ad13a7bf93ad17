//! Canadian postal codes and Forward Sortation Areas.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static POSTAL_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z]) ?([0-9][ABCEGHJ-NPRSTV-Z][0-9])$")
        .expect("Invalid postal code regex")
});

static FSA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z]$").expect("Invalid FSA regex")
});

/// Normalized Canadian postal code (`A1A 1A1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

impl PostalCode {
    /// Parses a postal code, accepting any case and an optional space.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let upper = raw.trim().to_uppercase();
        let caps = POSTAL_CODE_RE.captures(&upper)?;
        Some(Self(format!("{} {}", &caps[1], &caps[2])))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the territory key of this postal code.
    #[must_use]
    pub fn fsa(&self) -> Fsa {
        Fsa(self.0[..3].to_string())
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid postal code: {value}"))
    }
}

impl From<PostalCode> for String {
    fn from(value: PostalCode) -> Self {
        value.0
    }
}

/// Forward Sortation Area, the first three characters of a postal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fsa(String);

impl Fsa {
    /// Parses a standalone FSA such as `m5v`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let upper = raw.trim().to_uppercase();
        FSA_RE.is_match(&upper).then_some(Self(upper))
    }

    /// Extracts the FSA prefix from free-form postal code input.
    ///
    /// Mirrors the server: strip spaces, upper-case, keep three characters.
    /// Returns `None` when the prefix is not a valid FSA.
    #[must_use]
    pub fn extract(postal_code: &str) -> Option<Self> {
        let compact: String = postal_code
            .chars()
            .filter(|c| !c.is_whitespace())
            .take(3)
            .collect();
        Self::parse(&compact)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Fsa {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid FSA: {value}"))
    }
}

impl From<Fsa> for String {
    fn from(value: Fsa) -> Self {
        value.0
    }
}
