//! Widget builder helpers for consistent form construction
//!
//! This module provides helper functions to reduce boilerplate when creating
//! the labeled-row patterns used throughout the intake form.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Entry, Label, Orientation, Widget};

/// Default margin used for padded containers
pub const DEFAULT_MARGIN: i32 = 12;

/// Default spacing used for vertical containers
pub const DEFAULT_SPACING: i32 = 12;

/// Default spacing used for horizontal label+control rows
pub const ROW_SPACING: i32 = 6;

/// Creates a box with standard margins on all sides.
pub fn create_padded_box(orientation: Orientation, spacing: i32) -> GtkBox {
    let container = GtkBox::new(orientation, spacing);
    container.set_margin_start(DEFAULT_MARGIN);
    container.set_margin_end(DEFAULT_MARGIN);
    container.set_margin_top(DEFAULT_MARGIN);
    container.set_margin_bottom(DEFAULT_MARGIN);
    container
}

/// Creates a horizontal box containing a label and a widget.
///
/// This is the common pattern for labeled controls:
/// ```ignore
/// let row = GtkBox::new(Orientation::Horizontal, 6);
/// row.append(&Label::new(Some("Label:")));
/// widget.set_hexpand(true);
/// row.append(&widget);
/// ```
pub fn create_labeled_row<W: IsA<Widget>>(label_text: &str, widget: &W) -> GtkBox {
    let row = GtkBox::new(Orientation::Horizontal, ROW_SPACING);
    let label = Label::new(Some(label_text));
    label.set_width_request(110);
    label.set_halign(gtk4::Align::Start);
    row.append(&label);
    widget.set_hexpand(true);
    row.append(widget);
    row
}

/// Creates a text entry with a leading label and returns both the row and
/// the entry, so the entry can be stored for later reads.
pub fn create_entry_row(label_text: &str) -> (GtkBox, Entry) {
    let entry = Entry::new();
    let row = create_labeled_row(label_text, &entry);
    (row, entry)
}

/// Creates a start-aligned heading label for a form section.
pub fn create_section_heading(text: &str) -> Label {
    let label = Label::new(Some(text));
    label.set_halign(gtk4::Align::Start);
    label.add_css_class("heading");
    label
}
