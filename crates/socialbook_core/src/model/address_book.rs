//! Logical contact collection.
//!
//! # Responsibility
//! - Hold the merged, deduplicated view of all contacts regardless of which
//!   physical store each record came from.
//! - Enforce identity-key uniqueness and expose controlled mutation.
//!
//! # Invariants
//! - No two persons with the same `PersonKey` coexist.
//! - Insertion order is preserved for display; it carries no storage meaning.
//! - `partition` output is disjoint and exhaustive over the collection.

use crate::model::person::{Person, PersonKey};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection raised when an explicit add would clobber an existing person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePersonError(pub PersonKey);

impl Display for DuplicatePersonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "person already exists: {}", self.0)
    }
}

impl Error for DuplicatePersonError {}

/// Ordered set of persons, unique by identity key.
///
/// Two mutation policies coexist and are deliberately distinct:
/// - [`AddressBook::add_person`] rejects duplicates, for interactive edits
///   where clobbering a contact would lose data silently.
/// - [`AddressBook::upsert_person`] replaces in place, for reconciliation
///   where the later insertion is the authoritative value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from a record list, rejecting duplicate identity keys.
    ///
    /// Used by storage decode paths, where a duplicate inside one file means
    /// the file is structurally invalid rather than a merge situation.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self, DuplicatePersonError> {
        let mut book = Self::new();
        for person in persons {
            book.add_person(person)?;
        }
        Ok(book)
    }

    /// Immutable read view in insertion order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.persons.iter()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn contains(&self, key: &PersonKey) -> bool {
        self.persons.iter().any(|person| person.key() == *key)
    }

    /// Appends a person, rejecting an already-present identity key.
    pub fn add_person(&mut self, person: Person) -> Result<(), DuplicatePersonError> {
        let key = person.key();
        if self.contains(&key) {
            return Err(DuplicatePersonError(key));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Inserts a person, replacing any same-key entry in place.
    ///
    /// # Contract
    /// - The replaced entry keeps its position; the value of the later
    ///   insertion wins. This is the merge tie-break used when one identity
    ///   key shows up in more than one physical store.
    pub fn upsert_person(&mut self, person: Person) {
        let key = person.key();
        match self.persons.iter_mut().find(|existing| existing.key() == key) {
            Some(existing) => *existing = person,
            None => self.persons.push(person),
        }
    }

    /// Removes and returns the person with the given identity key.
    pub fn remove_person(&mut self, key: &PersonKey) -> Option<Person> {
        let index = self.persons.iter().position(|person| person.key() == *key)?;
        Some(self.persons.remove(index))
    }

    /// Splits the collection by a predicate into `(matching, rest)`.
    ///
    /// # Contract
    /// - Every record lands in exactly one half.
    /// - Both halves preserve this book's relative order.
    pub fn partition<F>(&self, predicate: F) -> (AddressBook, AddressBook)
    where
        F: Fn(&Person) -> bool,
    {
        let mut matching = AddressBook::new();
        let mut rest = AddressBook::new();
        for person in &self.persons {
            if predicate(person) {
                matching.persons.push(person.clone());
            } else {
                rest.persons.push(person.clone());
            }
        }
        (matching, rest)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}

impl IntoIterator for AddressBook {
    type Item = Person;
    type IntoIter = std::vec::IntoIter<Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.into_iter()
    }
}
