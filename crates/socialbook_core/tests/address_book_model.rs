use socialbook_core::{Person, PersonValidationError};

fn alice() -> Person {
    Person::new("Alice Pauline", "94351253", "alice@example.com", "123 Jurong West Ave 6")
}

fn benson() -> Person {
    Person::new("Benson Meier", "98765432", "benson@example.com", "311 Clementi Ave 2")
}

fn carl() -> Person {
    Person::new("Carl Kurz", "95352563", "heinz@example.com", "Wall Street")
}

mod person {
    use super::*;

    #[test]
    fn valid_person_passes_validation() {
        alice().validate().unwrap();
    }

    #[test]
    fn name_must_start_alphanumeric() {
        let mut person = alice();
        person.name = " -invalid".to_string();
        assert!(matches!(
            person.validate().unwrap_err(),
            PersonValidationError::InvalidName(_)
        ));
    }

    #[test]
    fn phone_must_be_at_least_three_digits() {
        let mut person = alice();
        person.phone = "91".to_string();
        assert!(matches!(
            person.validate().unwrap_err(),
            PersonValidationError::InvalidPhone(_)
        ));
    }

    #[test]
    fn email_requires_local_and_domain() {
        let mut person = alice();
        person.email = "no-at-sign".to_string();
        assert!(matches!(
            person.validate().unwrap_err(),
            PersonValidationError::InvalidEmail(_)
        ));
    }

    #[test]
    fn address_cannot_be_blank() {
        let mut person = alice();
        person.address = "   ".to_string();
        assert_eq!(
            person.validate().unwrap_err(),
            PersonValidationError::EmptyAddress
        );
    }

    #[test]
    fn tags_must_be_single_alphanumeric_words() {
        let mut person = alice();
        person.tags.insert("close friend".to_string());
        assert!(matches!(
            person.validate().unwrap_err(),
            PersonValidationError::InvalidTag(_)
        ));
    }

    #[test]
    fn identity_ignores_name_case_and_mutable_fields() {
        let mut other = alice();
        other.name = "ALICE PAULINE".to_string();
        other.email = "different@example.com".to_string();
        other.address = "elsewhere".to_string();
        other.archive();
        assert!(alice().is_same_person(&other));
    }

    #[test]
    fn different_phone_means_different_person() {
        let mut other = alice();
        other.phone = "99999999".to_string();
        assert!(!alice().is_same_person(&other));
    }

    #[test]
    fn archive_and_restore_flip_the_partition_tag() {
        let mut person = alice();
        assert!(!person.is_archived());
        person.archive();
        assert!(person.is_archived());
        person.restore();
        assert!(!person.is_archived());
    }
}

mod address_book {
    use super::*;
    use socialbook_core::AddressBook;

    #[test]
    fn add_person_rejects_duplicate_key() {
        let mut book = AddressBook::new();
        book.add_person(alice()).unwrap();

        let mut same_key = alice();
        same_key.email = "new@example.com".to_string();
        let err = book.add_person(same_key).unwrap_err();
        assert_eq!(err.0, alice().key());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn upsert_replaces_value_in_place() {
        let mut book = AddressBook::new();
        book.add_person(alice()).unwrap();
        book.add_person(benson()).unwrap();

        let mut replacement = alice();
        replacement.email = "updated@example.com".to_string();
        book.upsert_person(replacement);

        assert_eq!(book.len(), 2);
        // Position kept, value from the later insert wins.
        assert_eq!(book.persons()[0].email, "updated@example.com");
        assert_eq!(book.persons()[1].key(), benson().key());
    }

    #[test]
    fn remove_person_returns_the_removed_record() {
        let mut book = AddressBook::new();
        book.add_person(alice()).unwrap();

        let removed = book.remove_person(&alice().key()).unwrap();
        assert_eq!(removed.key(), alice().key());
        assert!(book.is_empty());
        assert!(book.remove_person(&alice().key()).is_none());
    }

    #[test]
    fn from_persons_rejects_duplicates() {
        let mut same_key = alice();
        same_key.address = "other place".to_string();
        let err = AddressBook::from_persons(vec![alice(), same_key]).unwrap_err();
        assert_eq!(err.0, alice().key());
    }

    #[test]
    fn partition_is_disjoint_exhaustive_and_order_preserving() {
        let mut archived_benson = benson();
        archived_benson.archive();

        let mut book = AddressBook::new();
        book.add_person(alice()).unwrap();
        book.add_person(archived_benson.clone()).unwrap();
        book.add_person(carl()).unwrap();

        let (archived, active) = book.partition(Person::is_archived);

        assert_eq!(archived.len() + active.len(), book.len());
        assert_eq!(archived.persons()[0].key(), archived_benson.key());
        assert_eq!(active.persons()[0].key(), alice().key());
        assert_eq!(active.persons()[1].key(), carl().key());
        for person in &book {
            assert_ne!(
                archived.contains(&person.key()),
                active.contains(&person.key())
            );
        }
    }

    #[test]
    fn partition_of_empty_book_yields_two_empty_books() {
        let (matching, rest) = AddressBook::new().partition(Person::is_archived);
        assert!(matching.is_empty());
        assert!(rest.is_empty());
    }
}

mod appointment {
    use socialbook_core::{Appointment, AppointmentValidationError};

    #[test]
    fn point_appointment_is_valid() {
        Appointment::new("Alice Pauline", "dental checkup", 1_700_000_000_000)
            .validate()
            .unwrap();
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut appointment = Appointment::new("Alice Pauline", "review", 2_000);
        appointment.end_epoch_ms = Some(1_000);
        assert!(matches!(
            appointment.validate().unwrap_err(),
            AppointmentValidationError::EndBeforeStart { .. }
        ));
    }

    #[test]
    fn blank_description_is_rejected() {
        let appointment = Appointment::new("Alice Pauline", "  ", 1_000);
        assert_eq!(
            appointment.validate().unwrap_err(),
            AppointmentValidationError::EmptyDescription
        );
    }
}
