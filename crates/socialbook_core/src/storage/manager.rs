//! Split-store reconciliation engine.
//!
//! # Responsibility
//! - Make the active and archived contact stores behave as one logical
//!   collection: merge on read, re-partition by archive state on write.
//! - Route appointment and preference persistence to their stores.
//!
//! # Invariants
//! - Store read order is fixed: active first, then archived. On a duplicate
//!   identity key the later (archived) record wins, in place.
//! - A partition that fails to load fails the whole read; it is never
//!   treated as empty.
//! - Every record is written to exactly one partition; an emptied partition
//!   is truncated, never left stale.
//!
//! # Concurrency
//! - Calls are synchronous and perform no internal locking. A concurrent
//!   host must serialize all calls against one set of store locations.

use crate::model::address_book::AddressBook;
use crate::model::appointment::Appointment;
use crate::model::person::Person;
use crate::model::user_prefs::UserPrefs;
use crate::storage::address_book_store::AddressBookStore;
use crate::storage::appointment_store::AppointmentStore;
use crate::storage::prefs_store::UserPrefsStore;
use crate::storage::StorageResult;
use log::{debug, error, info};
use std::path::Path;
use std::time::Instant;

/// Storage facade over the two contact stores plus appointment and
/// preference stores.
///
/// Owns no records; every call produces a transient merged or split
/// collection and returns it to the caller.
pub struct StorageManager<B, A, P>
where
    B: AddressBookStore,
    A: AppointmentStore,
    P: UserPrefsStore,
{
    active_store: B,
    archived_store: B,
    appointment_store: A,
    prefs_store: P,
}

impl<B, A, P> StorageManager<B, A, P>
where
    B: AddressBookStore,
    A: AppointmentStore,
    P: UserPrefsStore,
{
    pub fn new(active_store: B, archived_store: B, appointment_store: A, prefs_store: P) -> Self {
        Self {
            active_store,
            archived_store,
            appointment_store,
            prefs_store,
        }
    }

    pub fn address_book_path(&self) -> &Path {
        self.active_store.path()
    }

    pub fn archived_address_book_path(&self) -> &Path {
        self.archived_store.path()
    }

    pub fn appointment_path(&self) -> &Path {
        self.appointment_store.path()
    }

    pub fn user_prefs_path(&self) -> &Path {
        self.prefs_store.path()
    }

    /// Reads both contact stores and merges them into one logical book.
    ///
    /// # Contract
    /// - An absent store contributes nothing; both absent (or merged result
    ///   empty) yields `Ok(None)`, distinct from a loaded non-empty book.
    /// - Merge inserts active records first, then archived. A duplicate
    ///   identity key keeps its first-seen position but takes the archived
    ///   value (last-store-wins).
    ///
    /// # Errors
    /// - Propagates `DataLoad` from either store unchanged; a malformed
    ///   partition must never be merged around.
    pub fn read_address_book(&self) -> StorageResult<Option<AddressBook>> {
        let started_at = Instant::now();
        let mut combined = AddressBook::new();

        for store in [&self.active_store, &self.archived_store] {
            debug!(
                "event=store_read module=storage status=start path={}",
                store.path().display()
            );
            let book = match store.read() {
                Ok(book) => book,
                Err(err) => {
                    error!(
                        "event=address_book_read module=storage status=error path={} error={}",
                        err.path().display(),
                        err
                    );
                    return Err(err);
                }
            };
            for person in book.unwrap_or_default() {
                combined.upsert_person(person);
            }
        }

        info!(
            "event=address_book_read module=storage status=ok persons={} duration_ms={}",
            combined.len(),
            started_at.elapsed().as_millis()
        );

        if combined.is_empty() {
            return Ok(None);
        }
        Ok(Some(combined))
    }

    /// Splits the book by archive state and writes each half to its store.
    ///
    /// # Contract
    /// - Partitioning is disjoint and exhaustive: every record is written to
    ///   exactly one store, each half preserving the book's relative order.
    /// - Both stores are always written, so a partition that became empty is
    ///   truncated rather than left with stale records.
    /// - Store writes are independent; on failure the already-written store
    ///   is not rolled back.
    pub fn save_address_book(&self, book: &AddressBook) -> StorageResult<()> {
        let started_at = Instant::now();
        let (archived, active) = book.partition(Person::is_archived);

        for (store, part) in [(&self.active_store, &active), (&self.archived_store, &archived)] {
            debug!(
                "event=store_write module=storage status=start path={} persons={}",
                store.path().display(),
                part.len()
            );
            if let Err(err) = store.write(part) {
                error!(
                    "event=address_book_save module=storage status=error path={} error={}",
                    err.path().display(),
                    err
                );
                return Err(err);
            }
        }

        info!(
            "event=address_book_save module=storage status=ok active={} archived={} duration_ms={}",
            active.len(),
            archived.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    /// Reads the appointment list; `Ok(None)` when no data exists yet.
    pub fn read_appointments(&self) -> StorageResult<Option<Vec<Appointment>>> {
        debug!(
            "event=store_read module=storage status=start path={}",
            self.appointment_store.path().display()
        );
        self.appointment_store.read()
    }

    /// Persists the full appointment list.
    pub fn save_appointments(&self, appointments: &[Appointment]) -> StorageResult<()> {
        debug!(
            "event=store_write module=storage status=start path={} appointments={}",
            self.appointment_store.path().display(),
            appointments.len()
        );
        self.appointment_store.write(appointments)
    }

    /// Reads user preferences; `Ok(None)` on first run.
    pub fn read_user_prefs(&self) -> StorageResult<Option<UserPrefs>> {
        debug!(
            "event=store_read module=storage status=start path={}",
            self.prefs_store.path().display()
        );
        self.prefs_store.read()
    }

    /// Persists user preferences.
    pub fn save_user_prefs(&self, prefs: &UserPrefs) -> StorageResult<()> {
        debug!(
            "event=store_write module=storage status=start path={}",
            self.prefs_store.path().display()
        );
        self.prefs_store.write(prefs)
    }
}
