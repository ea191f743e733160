//! Appointment store contract and JSON file implementation.
//!
//! # Responsibility
//! - Persist the appointment list to one durable location.
//!
//! # Invariants
//! - Appointments live in a single store; there is no partitioning.
//! - Duplicate appointment IDs inside the file fail the whole read.

use crate::model::appointment::Appointment;
use crate::storage::json::{read_json_file, write_json_file};
use crate::storage::{DataLoadCause, StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Durable store for the appointment list.
pub trait AppointmentStore {
    fn path(&self) -> &Path;

    /// Loads all stored appointments; `Ok(None)` when no data exists yet.
    fn read(&self) -> StorageResult<Option<Vec<Appointment>>>;

    /// Persists the full list, replacing prior content atomically.
    fn write(&self, appointments: &[Appointment]) -> StorageResult<()>;
}

#[derive(Serialize, Deserialize)]
struct StoredAppointments {
    appointments: Vec<Appointment>,
}

/// File-backed JSON appointment store.
pub struct JsonAppointmentStore {
    path: PathBuf,
}

impl JsonAppointmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn decode(&self, stored: StoredAppointments) -> StorageResult<Vec<Appointment>> {
        let mut seen = HashSet::new();
        for appointment in &stored.appointments {
            appointment.validate().map_err(|err| {
                StorageError::data_load(&self.path, DataLoadCause::Invalid(err.to_string()))
            })?;
            if !seen.insert(appointment.uuid) {
                return Err(StorageError::data_load(
                    &self.path,
                    DataLoadCause::Invalid(format!(
                        "duplicate appointment id {}",
                        appointment.uuid
                    )),
                ));
            }
        }
        Ok(stored.appointments)
    }
}

impl AppointmentStore for JsonAppointmentStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> StorageResult<Option<Vec<Appointment>>> {
        match read_json_file::<StoredAppointments>(&self.path)? {
            Some(stored) => Ok(Some(self.decode(stored)?)),
            None => Ok(None),
        }
    }

    fn write(&self, appointments: &[Appointment]) -> StorageResult<()> {
        let stored = StoredAppointments {
            appointments: appointments.to_vec(),
        };
        write_json_file(&self.path, &stored)
    }
}
