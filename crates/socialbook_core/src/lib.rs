//! Core domain and storage logic for SocialBook.
//! This crate is the single source of truth for contact data invariants,
//! including the split between active and archived contact stores.

pub mod logging;
pub mod model;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::address_book::{AddressBook, DuplicatePersonError};
pub use model::appointment::{Appointment, AppointmentId, AppointmentValidationError};
pub use model::person::{Person, PersonKey, PersonValidationError};
pub use model::user_prefs::{GuiSettings, UserPrefs};
pub use storage::address_book_store::{AddressBookStore, JsonAddressBookStore};
pub use storage::appointment_store::{AppointmentStore, JsonAppointmentStore};
pub use storage::manager::StorageManager;
pub use storage::prefs_store::{JsonUserPrefsStore, UserPrefsStore};
pub use storage::{DataLoadCause, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
