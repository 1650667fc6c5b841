//! Selection and disclosure state for the dropdown pickers.
//!
//! This is the GTK-free half of the picker widget: which options exist,
//! which one (if any) is selected, and whether the options panel is open.
//! The widget layer (`ui::image_dropdown`) owns a `PickerModel` and mirrors
//! its state into the actual widgets, so the selection rules can be tested
//! without a display.

use std::path::PathBuf;

use log::trace;

/// One selectable entry in a picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOption {
    /// Opaque value stored in the picker's value slot when selected.
    pub value: String,
    /// Display label shown on the option row and after selection.
    pub label: String,
    /// Optional image shown as the option thumbnail and selection preview.
    pub image: Option<PathBuf>,
}

impl PickerOption {
    /// Create a text-only option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            image: None,
        }
    }

    /// Create an option with an image thumbnail.
    pub fn with_image(
        value: impl Into<String>,
        label: impl Into<String>,
        image: impl Into<PathBuf>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            image: Some(image.into()),
        }
    }
}

/// State of one single-select dropdown picker.
///
/// Invariants:
/// - at most one option is selected at any time
/// - open/closed state is independent per picker; closing happens only via
///   `select`, `set_open(false)` or `dismiss`
#[derive(Debug, Clone)]
pub struct PickerModel {
    id: String,
    options: Vec<PickerOption>,
    selected: Option<usize>,
    open: bool,
}

impl PickerModel {
    /// Create a closed, unselected picker over the given options.
    ///
    /// An empty option list is valid; such a picker can be opened but never
    /// produces a selection.
    pub fn new(id: impl Into<String>, options: Vec<PickerOption>) -> Self {
        Self {
            id: id.into(),
            options,
            selected: None,
            open: false,
        }
    }

    /// Identifier of this picker, unique within the form.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &[PickerOption] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&PickerOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Current value, i.e. the selected option's opaque value string.
    pub fn value(&self) -> Option<&str> {
        self.selected_option().map(|opt| opt.value.as_str())
    }

    /// Select the option at `index` and close the picker.
    ///
    /// Selecting an already-selected option re-runs the same effect
    /// idempotently. An out-of-range index is ignored. Returns the selected
    /// option so callers can apply display effects.
    pub fn select(&mut self, index: usize) -> Option<&PickerOption> {
        if index >= self.options.len() {
            return None;
        }
        self.selected = Some(index);
        self.open = false;
        trace!(
            "picker '{}': selected option {} ({})",
            self.id, index, self.options[index].value
        );
        self.options.get(index)
    }

    /// Outside-click dismissal: close only when open and the click landed
    /// outside this picker's root widget. Clicks inside the root never close
    /// the picker through this rule.
    pub fn dismiss(&mut self, click_inside: bool) {
        if self.open && !click_inside {
            self.open = false;
            trace!("picker '{}': dismissed by outside click", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> PickerModel {
        PickerModel::new(
            "test",
            vec![
                PickerOption::with_image("a", "Option A", "/tmp/a.png"),
                PickerOption::new("b", "Option B"),
                PickerOption::new("c", "Option C"),
            ],
        )
    }

    #[test]
    fn test_select_marks_exactly_one_and_closes() {
        let mut p = picker();
        p.set_open(true);

        let selected = p.select(1).cloned();

        assert_eq!(selected.unwrap().value, "b");
        assert_eq!(p.selected_index(), Some(1));
        assert_eq!(p.value(), Some("b"));
        assert!(!p.is_open());
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let mut p = picker();
        p.select(2);
        p.set_open(true);
        p.select(2);

        assert_eq!(p.selected_index(), Some(2));
        assert!(!p.is_open());
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut p = picker();
        p.select(0);
        p.select(2);

        assert_eq!(p.selected_index(), Some(2));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut p = picker();
        assert!(p.select(7).is_none());
        assert_eq!(p.selected_index(), None);
    }

    #[test]
    fn test_empty_picker_never_selects() {
        let mut p = PickerModel::new("empty", Vec::new());
        p.set_open(true);
        assert!(p.select(0).is_none());
        assert_eq!(p.value(), None);
    }

    #[test]
    fn test_dismiss_closes_only_on_outside_click() {
        let mut p = picker();
        p.set_open(true);
        p.dismiss(true);
        assert!(p.is_open());

        p.dismiss(false);
        assert!(!p.is_open());
    }

    #[test]
    fn test_dismiss_when_closed_is_a_no_op() {
        let mut p = picker();
        p.dismiss(false);
        assert!(!p.is_open());
    }
}
