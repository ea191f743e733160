//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `socialbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use socialbook_core::UserPrefs;

fn main() {
    let prefs = UserPrefs::default();
    println!("socialbook_core version={}", socialbook_core::core_version());
    println!("default data file={}", prefs.address_book_path().display());
    println!(
        "default archive file={}",
        prefs.archived_address_book_path().display()
    );
    println!("default appointment file={}", prefs.appointment_path().display());
}
