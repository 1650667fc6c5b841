//! Core form model and decision logic for rec-intake
//!
//! Everything in this module is GTK-free so the interaction rules (picker
//! selection, pattern → field-group visibility, start-time defaulting,
//! catalog parsing) can be unit tested without a display.

pub mod catalog;
mod patterns;
mod picker_model;
mod record;
pub mod start_time;

pub use catalog::{CatalogError, LecturerImage, PatternTemplate};
pub use patterns::{
    field_group_for, FieldGroup, PATTERN_1, PATTERN_2, PATTERN_3, PATTERN_PICKER_ID,
};
pub use picker_model::{PickerModel, PickerOption};
pub use record::{GroupInputs, IntakeRecord, CATEGORIES};
