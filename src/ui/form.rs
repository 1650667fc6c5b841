//! The intake form: entries, pickers, and pattern-driven group visibility.
//!
//! `IntakeForm` builds the whole page once at construction: common fields,
//! the category and pattern pickers, and the three pattern-specific field
//! groups. Selecting a pattern shows exactly one group and hides the other
//! two; an empty or unrecognized selection leaves all groups untouched.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Entry, GestureClick, Orientation, PropagationPhase};
use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;

use crate::core::{
    field_group_for, start_time, FieldGroup, GroupInputs, IntakeRecord, LecturerImage,
    PatternTemplate, PickerOption, CATEGORIES, PATTERN_PICKER_ID,
};
use crate::ui::image_dropdown::ImageDropDown;
use crate::ui::widget_builder::{
    create_entry_row, create_labeled_row, create_padded_box, create_section_heading,
    DEFAULT_SPACING,
};

type SubmitCallback = Rc<RefCell<Option<Box<dyn Fn(&IntakeRecord)>>>>;

/// The value-bearing widgets, bundled so the submit handler and `collect`
/// share one read path.
#[derive(Clone)]
struct FormFields {
    title_entry: Entry,
    thumbnail_entry: Entry,
    category_picker: Rc<ImageDropDown>,
    start_time_entry: Entry,
    pattern_picker: Rc<ImageDropDown>,
    lecturer_name_p1: Entry,
    lecturer_image1: Rc<ImageDropDown>,
    lecturer_image2: Rc<ImageDropDown>,
    lecturer_name_p2: Entry,
    lecturer_image_single: Rc<ImageDropDown>,
    lecturer_name_p3: Entry,
    student_name: Entry,
}

impl FormFields {
    /// Assemble the intake record from the current widget values.
    fn collect(&self) -> IntakeRecord {
        let groups = GroupInputs {
            lecturer_name_p1: self.lecturer_name_p1.text().to_string(),
            lecturer_image1: self.lecturer_image1.value().unwrap_or_default(),
            lecturer_image2: self.lecturer_image2.value().unwrap_or_default(),
            lecturer_name_p2: self.lecturer_name_p2.text().to_string(),
            lecturer_image_single: self.lecturer_image_single.value().unwrap_or_default(),
            lecturer_name_p3: self.lecturer_name_p3.text().to_string(),
            student_name: self.student_name.text().to_string(),
        };

        IntakeRecord::assemble(
            &self.title_entry.text(),
            &self.thumbnail_entry.text(),
            &self.category_picker.value().unwrap_or_default(),
            &self.start_time_entry.text(),
            &self.pattern_picker.value().unwrap_or_default(),
            &groups,
        )
    }
}

/// The whole intake form, built once from the option catalogs.
pub struct IntakeForm {
    container: GtkBox,
    fields: FormFields,
    groups: [GtkBox; 3],
    on_submit: SubmitCallback,
}

impl IntakeForm {
    pub fn new(lecturers: &[LecturerImage], templates: &[PatternTemplate]) -> Self {
        let on_submit: SubmitCallback = Rc::new(RefCell::new(None));
        let container = create_padded_box(Orientation::Vertical, DEFAULT_SPACING);

        let lecturer_options: Vec<PickerOption> =
            lecturers.iter().map(|l| l.to_option()).collect();

        // Common fields.
        let (title_row, title_entry) = create_entry_row("タイトル");
        container.append(&title_row);

        let (thumbnail_row, thumbnail_entry) = create_entry_row("サムネ文言");
        container.append(&thumbnail_row);

        let category_picker = Rc::new(ImageDropDown::new(
            "category",
            "選択してください",
            CATEGORIES
                .iter()
                .map(|c| PickerOption::new(*c, *c))
                .collect(),
        ));
        container.append(&create_labeled_row("種別", category_picker.widget()));

        let (start_time_row, start_time_entry) = create_entry_row("開始時間");
        container.append(&start_time_row);

        // Pre-fill the start time once; a value already present is kept.
        let now = Local::now().naive_local();
        start_time_entry.set_text(&start_time::defaulted(&start_time_entry.text(), now));

        let pattern_picker = Rc::new(ImageDropDown::new(
            PATTERN_PICKER_ID,
            "選択してください",
            templates.iter().map(|t| t.to_option()).collect(),
        ));
        container.append(&create_labeled_row("パターン", pattern_picker.widget()));

        // Pattern 1: lecturer name + two lecturer images.
        let group1 = GtkBox::new(Orientation::Vertical, DEFAULT_SPACING);
        group1.append(&create_section_heading("パターン1"));
        let (name_row, lecturer_name_p1) = create_entry_row("講師名");
        group1.append(&name_row);
        let lecturer_image1 = Rc::new(ImageDropDown::new(
            "lecturer-image-1",
            "選択してください",
            lecturer_options.clone(),
        ));
        group1.append(&create_labeled_row("講師画像1", lecturer_image1.widget()));
        let lecturer_image2 = Rc::new(ImageDropDown::new(
            "lecturer-image-2",
            "選択してください",
            lecturer_options.clone(),
        ));
        group1.append(&create_labeled_row("講師画像2", lecturer_image2.widget()));

        // Pattern 2: lecturer name + a single lecturer image.
        let group2 = GtkBox::new(Orientation::Vertical, DEFAULT_SPACING);
        group2.append(&create_section_heading("パターン2"));
        let (name_row, lecturer_name_p2) = create_entry_row("講師名");
        group2.append(&name_row);
        let lecturer_image_single = Rc::new(ImageDropDown::new(
            "lecturer-image-single",
            "選択してください",
            lecturer_options,
        ));
        group2.append(&create_labeled_row(
            "講師画像",
            lecturer_image_single.widget(),
        ));

        // Pattern 3: lecturer name + student name.
        let group3 = GtkBox::new(Orientation::Vertical, DEFAULT_SPACING);
        group3.append(&create_section_heading("パターン3"));
        let (name_row, lecturer_name_p3) = create_entry_row("講師名");
        group3.append(&name_row);
        let (student_row, student_name) = create_entry_row("生徒名");
        group3.append(&student_row);

        // Groups start hidden until a pattern is selected.
        for group in [&group1, &group2, &group3] {
            group.set_visible(false);
            container.append(group);
        }
        let groups = [group1, group2, group3];

        let submit_button = Button::with_label("送信");
        submit_button.add_css_class("suggested-action");
        submit_button.set_halign(gtk4::Align::End);
        container.append(&submit_button);

        let fields = FormFields {
            title_entry,
            thumbnail_entry,
            category_picker,
            start_time_entry,
            pattern_picker,
            lecturer_name_p1,
            lecturer_image1,
            lecturer_image2,
            lecturer_name_p2,
            lecturer_image_single,
            lecturer_name_p3,
            student_name,
        };

        // Pattern selection drives group visibility.
        let groups_for_pattern = groups.clone();
        fields.pattern_picker.set_on_select(move |option| {
            apply_pattern_visibility(&option.value, &groups_for_pattern);
        });

        // Close open pickers on clicks landing outside them. The gesture
        // observes the capture phase and never claims the sequence, so
        // option clicks still reach their buttons.
        let pickers: Vec<Rc<ImageDropDown>> = vec![
            fields.category_picker.clone(),
            fields.pattern_picker.clone(),
            fields.lecturer_image1.clone(),
            fields.lecturer_image2.clone(),
            fields.lecturer_image_single.clone(),
        ];
        let click_gesture = GestureClick::new();
        click_gesture.set_propagation_phase(PropagationPhase::Capture);
        let container_for_dismiss = container.clone();
        click_gesture.connect_pressed(move |_, _, x, y| {
            for picker in &pickers {
                picker.dismiss_if_clicked_outside(&container_for_dismiss, x, y);
            }
        });
        container.add_controller(click_gesture);

        let fields_for_submit = fields.clone();
        let on_submit_for_submit = on_submit.clone();
        submit_button.connect_clicked(move |_| {
            let record = fields_for_submit.collect();
            if let Some(callback) = on_submit_for_submit.borrow().as_ref() {
                callback(&record);
            }
        });

        let form = Self {
            container,
            fields,
            groups,
            on_submit,
        };

        // Initial recompute: covers a form rebuilt with a pre-existing
        // selection; with no selection it leaves the groups untouched.
        form.recompute_visibility();

        form
    }

    /// Get the container widget (for adding to layouts).
    pub fn widget(&self) -> &GtkBox {
        &self.container
    }

    /// Re-derive group visibility from the pattern picker's current value.
    /// No selection, or an unrecognized value, changes nothing.
    pub fn recompute_visibility(&self) {
        if let Some(value) = self.fields.pattern_picker.value() {
            apply_pattern_visibility(&value, &self.groups);
        }
    }

    /// Assemble the intake record from the current widget values.
    pub fn collect(&self) -> IntakeRecord {
        self.fields.collect()
    }

    /// Set a callback to be called when the submit button is clicked.
    pub fn set_on_submit<F: Fn(&IntakeRecord) + 'static>(&self, callback: F) {
        *self.on_submit.borrow_mut() = Some(Box::new(callback));
    }
}

/// Show the group matching `value` and hide the other two. An empty or
/// unrecognized value is a no-op for all groups.
fn apply_pattern_visibility(value: &str, groups: &[GtkBox; 3]) {
    let Some(active) = field_group_for(value) else {
        return;
    };
    for (group, id) in groups.iter().zip(FieldGroup::ALL) {
        group.set_visible(id == active);
    }
}
