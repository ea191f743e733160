//! Appointment domain model.
//!
//! # Responsibility
//! - Define the scheduled-appointment record persisted alongside contacts.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another appointment.
//! - `end_epoch_ms` must not be earlier than `start_epoch_ms` when set.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an appointment.
pub type AppointmentId = Uuid;

/// Constraint violations for an `Appointment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentValidationError {
    /// Description must contain at least one non-whitespace character.
    EmptyDescription,
    /// End time precedes start time.
    EndBeforeStart { start: i64, end: i64 },
}

impl Display for AppointmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "appointment description cannot be blank"),
            Self::EndBeforeStart { start, end } => write!(
                f,
                "appointment end {end} is earlier than start {start}"
            ),
        }
    }
}

impl Error for AppointmentValidationError {}

/// A scheduled appointment with one contact.
///
/// Appointments live in a single store; they carry no partition tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Stable global ID used for linking and auditing.
    pub uuid: AppointmentId,
    /// Display name of the contact this appointment is with.
    pub person_name: String,
    pub description: String,
    /// Unix epoch milliseconds.
    pub start_epoch_ms: i64,
    /// Unix epoch milliseconds. Should be >= `start_epoch_ms` when set.
    pub end_epoch_ms: Option<i64>,
}

impl Appointment {
    /// Creates a point-in-time appointment with a generated stable ID.
    pub fn new(
        person_name: impl Into<String>,
        description: impl Into<String>,
        start_epoch_ms: i64,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), person_name, description, start_epoch_ms)
    }

    /// Creates an appointment with a caller-provided stable ID.
    ///
    /// Used by load paths where identity already exists on disk.
    pub fn with_id(
        uuid: AppointmentId,
        person_name: impl Into<String>,
        description: impl Into<String>,
        start_epoch_ms: i64,
    ) -> Self {
        Self {
            uuid,
            person_name: person_name.into(),
            description: description.into(),
            start_epoch_ms,
            end_epoch_ms: None,
        }
    }

    /// Checks appointment constraints.
    pub fn validate(&self) -> Result<(), AppointmentValidationError> {
        if self.description.trim().is_empty() {
            return Err(AppointmentValidationError::EmptyDescription);
        }
        if let Some(end) = self.end_epoch_ms {
            if end < self.start_epoch_ms {
                return Err(AppointmentValidationError::EndBeforeStart {
                    start: self.start_epoch_ms,
                    end,
                });
            }
        }
        Ok(())
    }
}
