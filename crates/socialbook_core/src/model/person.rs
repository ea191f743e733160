//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical contact record shared by active/archived stores.
//! - Provide the stable identity key used to deduplicate across stores.
//! - Provide lifecycle helpers for archive semantics.
//!
//! # Invariants
//! - Identity is `PersonKey` (normalized name + phone), never object identity.
//! - `archived` is the source of truth for which physical store owns a record.
//! - Mutable detail fields (email, address, tags) do not affect identity.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*$").expect("valid email regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

/// Field constraint violations for a `Person`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    /// Name must start alphanumeric and contain only alphanumerics/spaces.
    InvalidName(String),
    /// Phone must be numeric and at least 3 digits long.
    InvalidPhone(String),
    /// Email must have a `local@domain` shape.
    InvalidEmail(String),
    /// Address must contain at least one non-whitespace character.
    EmptyAddress,
    /// Tags are single alphanumeric words.
    InvalidTag(String),
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(
                f,
                "invalid person name `{value}`: expected alphanumerics and spaces, starting alphanumeric"
            ),
            Self::InvalidPhone(value) => {
                write!(f, "invalid phone `{value}`: expected at least 3 digits")
            }
            Self::InvalidEmail(value) => {
                write!(f, "invalid email `{value}`: expected local@domain")
            }
            Self::EmptyAddress => write!(f, "address cannot be blank"),
            Self::InvalidTag(value) => {
                write!(f, "invalid tag `{value}`: expected one alphanumeric word")
            }
        }
    }
}

impl Error for PersonValidationError {}

/// Stable identity key for a person, independent of mutable detail fields.
///
/// Built from the trimmed, case-folded name plus the trimmed phone number.
/// Records with equal keys represent the same person even when email, address
/// tags or archive state differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonKey {
    name: String,
    phone: String,
}

impl Display for PersonKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.phone)
    }
}

/// Canonical contact record.
///
/// The `archived` flag is a plain boolean partition tag: it decides which
/// physical store the record is written to, nothing else. Archived and active
/// contacts share one shape and one identity scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name, also half of the identity key.
    pub name: String,
    /// Contact phone, the other half of the identity key.
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Sorted, deduplicated tag words.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Partition tag: archived records persist to the archive store.
    #[serde(default)]
    pub archived: bool,
}

impl Person {
    /// Creates an active (non-archived) person with no tags.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            tags: BTreeSet::new(),
            archived: false,
        }
    }

    /// Checks all field constraints.
    ///
    /// # Errors
    /// - Returns the first violated constraint in field order.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if !NAME_RE.is_match(self.name.trim()) {
            return Err(PersonValidationError::InvalidName(self.name.clone()));
        }
        if !PHONE_RE.is_match(self.phone.trim()) {
            return Err(PersonValidationError::InvalidPhone(self.phone.clone()));
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(PersonValidationError::InvalidEmail(self.email.clone()));
        }
        if self.address.trim().is_empty() {
            return Err(PersonValidationError::EmptyAddress);
        }
        if let Some(tag) = self.tags.iter().find(|tag| !TAG_RE.is_match(tag)) {
            return Err(PersonValidationError::InvalidTag(tag.clone()));
        }
        Ok(())
    }

    /// Returns the stable identity key for this record.
    pub fn key(&self) -> PersonKey {
        PersonKey {
            name: self.name.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
        }
    }

    /// Returns whether `other` represents the same person.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.key() == other.key()
    }

    /// Moves this record to the archive partition.
    pub fn archive(&mut self) {
        self.archived = true;
    }

    /// Moves this record back to the active partition.
    pub fn restore(&mut self) {
        self.archived = false;
    }

    /// Returns whether this record belongs to the archive partition.
    pub fn is_archived(&self) -> bool {
        self.archived
    }
}
