//! Single-select image dropdown picker.
//!
//! The widget mirrors a `core::PickerModel` into GTK: a disclosure button
//! showing the current selection (preview thumbnail, label, or a placeholder
//! while nothing is selected) above an inline options panel with one row per
//! option. Selecting an option updates the value slot, the preview and label,
//! marks the row as selected, and closes the panel.
//!
//! All sub-effects are best-effort: a thumbnail that fails to load degrades
//! to a stock icon, an option without an image leaves the preview alone.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Frame, Image, Label, Orientation};
use log::debug;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use crate::core::{PickerModel, PickerOption};

/// Pixel size for preview and option thumbnails.
const THUMBNAIL_SIZE: i32 = 48;

type SelectCallback = Rc<RefCell<Option<Box<dyn Fn(&PickerOption)>>>>;

/// The widgets a selection needs to update, bundled so option-button
/// handlers and programmatic selection share one code path.
#[derive(Clone)]
struct SelectionDisplay {
    preview: Image,
    selected_label: Label,
    placeholder: Label,
    options_panel: Frame,
    option_buttons: Rc<Vec<Button>>,
}

impl SelectionDisplay {
    /// Apply the display side of a selection: preview, label, placeholder,
    /// per-row selected marking, and closing the panel.
    fn apply(&self, index: usize, option: &PickerOption) {
        if let Some(ref image_path) = option.image {
            if load_thumbnail(&self.preview, image_path) {
                self.preview.set_visible(true);
            }
        }
        // No image: the preview keeps its prior (hidden) state.

        self.selected_label.set_text(&option.label);
        self.selected_label.set_visible(true);
        self.placeholder.set_visible(false);

        for (i, button) in self.option_buttons.iter().enumerate() {
            if i == index {
                button.add_css_class("selected");
            } else {
                button.remove_css_class("selected");
            }
        }

        self.options_panel.set_visible(false);
    }
}

/// A single-select dropdown picker backed by a hidden value slot.
///
/// Each picker owns its sub-widgets; they are resolved once at construction
/// and held for the widget's lifetime.
pub struct ImageDropDown {
    container: GtkBox,
    #[allow(dead_code)]
    toggle_button: Button,
    options_panel: Frame,
    display: SelectionDisplay,
    model: Rc<RefCell<PickerModel>>,
    on_select: SelectCallback,
}

impl ImageDropDown {
    /// Create a picker over the given options.
    ///
    /// An empty option list is valid; the picker then opens onto an empty
    /// panel and never produces a selection.
    pub fn new(id: &str, placeholder_text: &str, options: Vec<PickerOption>) -> Self {
        let model = Rc::new(RefCell::new(PickerModel::new(id, options)));
        let on_select: SelectCallback = Rc::new(RefCell::new(None));

        let container = GtkBox::new(Orientation::Vertical, 2);
        container.add_css_class("image-dropdown");

        // Disclosure button: preview + selected label, placeholder until a
        // selection exists, and a drop-down arrow.
        let header = GtkBox::new(Orientation::Horizontal, 6);

        let preview = Image::new();
        preview.set_pixel_size(THUMBNAIL_SIZE);
        preview.set_visible(false);
        header.append(&preview);

        let selected_label = Label::new(None);
        selected_label.set_halign(gtk4::Align::Start);
        selected_label.set_ellipsize(pango::EllipsizeMode::End);
        selected_label.set_hexpand(true);
        selected_label.set_visible(false);
        header.append(&selected_label);

        let placeholder = Label::new(Some(placeholder_text));
        placeholder.set_halign(gtk4::Align::Start);
        placeholder.set_hexpand(true);
        placeholder.add_css_class("dim-label");
        header.append(&placeholder);

        let arrow = Image::from_icon_name("pan-down-symbolic");
        header.append(&arrow);

        let toggle_button = Button::new();
        toggle_button.set_child(Some(&header));
        container.append(&toggle_button);

        // Options panel, hidden while the picker is closed.
        let options_box = GtkBox::new(Orientation::Vertical, 0);
        let option_buttons: Rc<Vec<Button>> = Rc::new(
            model
                .borrow()
                .options()
                .iter()
                .map(|option| {
                    let button = create_option_button(option);
                    options_box.append(&button);
                    button
                })
                .collect(),
        );

        let options_panel = Frame::new(None);
        options_panel.set_child(Some(&options_box));
        options_panel.set_visible(false);
        container.append(&options_panel);

        let display = SelectionDisplay {
            preview,
            selected_label,
            placeholder,
            options_panel: options_panel.clone(),
            option_buttons: option_buttons.clone(),
        };

        // Toggle open/closed.
        let model_for_toggle = model.clone();
        let panel_for_toggle = options_panel.clone();
        toggle_button.connect_clicked(move |_| {
            let open = {
                let mut m = model_for_toggle.borrow_mut();
                m.toggle_open();
                m.is_open()
            };
            panel_for_toggle.set_visible(open);
        });

        // Option clicks select.
        for (index, button) in option_buttons.iter().enumerate() {
            let model_for_select = model.clone();
            let display_for_select = display.clone();
            let on_select_for_select = on_select.clone();
            button.connect_clicked(move |_| {
                apply_selection(
                    index,
                    &model_for_select,
                    &display_for_select,
                    &on_select_for_select,
                );
            });
        }

        Self {
            container,
            toggle_button,
            options_panel,
            display,
            model,
            on_select,
        }
    }

    /// Get the container widget (for adding to layouts).
    pub fn widget(&self) -> &GtkBox {
        &self.container
    }

    /// Identifier this picker was created with.
    pub fn id(&self) -> String {
        self.model.borrow().id().to_string()
    }

    /// The current value, i.e. the selected option's opaque value string.
    pub fn value(&self) -> Option<String> {
        self.model.borrow().value().map(|v| v.to_string())
    }

    /// The currently selected option, if any.
    pub fn selected_option(&self) -> Option<PickerOption> {
        self.model.borrow().selected_option().cloned()
    }

    pub fn is_open(&self) -> bool {
        self.model.borrow().is_open()
    }

    pub fn set_open(&self, open: bool) {
        self.model.borrow_mut().set_open(open);
        self.options_panel.set_visible(open);
    }

    /// Programmatically select the option at `index`, with the same display
    /// effects as a click. Out-of-range indices are ignored.
    pub fn select(&self, index: usize) {
        apply_selection(index, &self.model, &self.display, &self.on_select);
    }

    /// Set a callback to be called when an option is selected.
    pub fn set_on_select<F: Fn(&PickerOption) + 'static>(&self, callback: F) {
        *self.on_select.borrow_mut() = Some(Box::new(callback));
    }

    /// Outside-click dismissal: close this picker when it is open and the
    /// click at (`x`, `y`) in `root`'s coordinates landed outside this
    /// picker's own widgets. Clicks inside never close it through this rule.
    pub fn dismiss_if_clicked_outside<W: IsA<gtk4::Widget>>(&self, root: &W, x: f64, y: f64) {
        if !self.model.borrow().is_open() {
            return;
        }
        let inside = root
            .translate_coordinates(&self.container, x, y)
            .map(|(tx, ty)| self.container.contains(tx, ty))
            .unwrap_or(false);

        self.model.borrow_mut().dismiss(inside);
        if !self.model.borrow().is_open() {
            self.options_panel.set_visible(false);
        }
    }
}

/// Select in the model, then mirror the change into the widgets and notify.
fn apply_selection(
    index: usize,
    model: &Rc<RefCell<PickerModel>>,
    display: &SelectionDisplay,
    on_select: &SelectCallback,
) {
    let option = {
        let mut m = model.borrow_mut();
        m.select(index).cloned()
    };
    let Some(option) = option else {
        return;
    };

    display.apply(index, &option);

    if let Some(callback) = on_select.borrow().as_ref() {
        callback(&option);
    }
}

/// Build one option row: thumbnail (when the option has an image) + label.
fn create_option_button(option: &PickerOption) -> Button {
    let row = GtkBox::new(Orientation::Horizontal, 6);

    if let Some(ref image_path) = option.image {
        let thumbnail = Image::new();
        thumbnail.set_pixel_size(THUMBNAIL_SIZE);
        if !load_thumbnail(&thumbnail, image_path) {
            thumbnail.set_icon_name(Some("image-missing"));
        }
        row.append(&thumbnail);
    }

    let label = Label::new(Some(&option.label));
    label.set_halign(gtk4::Align::Start);
    label.set_ellipsize(pango::EllipsizeMode::End);
    label.set_hexpand(true);
    row.append(&label);

    let button = Button::new();
    button.add_css_class("flat");
    button.set_child(Some(&row));
    button
}

/// Load a scaled thumbnail into `image`. Returns false when the file cannot
/// be loaded; the image is left untouched in that case.
fn load_thumbnail(image: &Image, path: &Path) -> bool {
    match gtk4::gdk_pixbuf::Pixbuf::from_file_at_scale(
        path,
        THUMBNAIL_SIZE,
        THUMBNAIL_SIZE,
        true,
    ) {
        Ok(pixbuf) => {
            let texture = gtk4::gdk::Texture::for_pixbuf(&pixbuf);
            image.set_paintable(Some(&texture));
            true
        }
        Err(e) => {
            debug!("failed to load thumbnail {:?}: {}", path, e);
            false
        }
    }
}
