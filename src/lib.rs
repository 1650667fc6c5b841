//! rec-intake: a GTK4 intake form for scheduling lecture recordings
//!
//! This library provides the building blocks of the form:
//! - Single-select image dropdown pickers backed by a hidden value slot
//! - The pattern → field-group visibility binding
//! - Option catalogs scanned from the lecturer-image and template directories
//! - Configuration management

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use core::{IntakeRecord, PickerModel, PickerOption};
pub use ui::{ImageDropDown, IntakeForm};
