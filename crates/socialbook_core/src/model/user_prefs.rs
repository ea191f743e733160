//! User preference model.
//!
//! # Responsibility
//! - Hold the durable store locations and window geometry for one user.
//! - Supply first-run defaults when no preference file exists yet.
//!
//! # Invariants
//! - Preferences are process-wide: constructed once at startup, mutated on
//!   explicit user action, persisted on change or shutdown by the caller.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_WINDOW_WIDTH: f64 = 740.0;
const DEFAULT_WINDOW_HEIGHT: f64 = 600.0;

/// Window geometry persisted across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    pub window_width: f64,
    pub window_height: f64,
    /// Last top-left screen position, `None` until the user moves the window.
    pub window_position: Option<(i32, i32)>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_position: None,
        }
    }
}

/// Durable user preferences: store locations plus window geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPrefs {
    #[serde(default)]
    pub gui_settings: GuiSettings,
    pub address_book_path: PathBuf,
    pub archived_address_book_path: PathBuf,
    pub appointment_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            address_book_path: PathBuf::from("data").join("socialbook.json"),
            archived_address_book_path: PathBuf::from("data").join("socialbook-archived.json"),
            appointment_path: PathBuf::from("data").join("appointments.json"),
        }
    }
}

impl UserPrefs {
    pub fn address_book_path(&self) -> &Path {
        &self.address_book_path
    }

    pub fn archived_address_book_path(&self) -> &Path {
        &self.archived_address_book_path
    }

    pub fn appointment_path(&self) -> &Path {
        &self.appointment_path
    }

    /// Replaces window geometry after a user move/resize.
    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.gui_settings = gui_settings;
    }
}
