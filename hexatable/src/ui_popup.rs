use crate::app::{ViewerApp, colors};
use crate::events::collect_ui_events;
use eframe::egui;

//  ========================== Popup Type logic ============================= //

#[derive(Clone, PartialEq, Eq)]
pub enum PopupType {
    Error,
    About,
    Base64,
}

impl PopupType {
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::About => "About",
            Self::Base64 => "Paste Base64",
        }
    }
}

//  ========================== Popup logic =================================== //

#[derive(Default)]
pub struct Popup {
    /// Is there a pop-up
    pub(crate) active: bool,
    /// Type of the pop-up. Used to determine the title and content of the window.
    pub(crate) ptype: Option<PopupType>,
    /// Base64 payload field content, if present
    payload_input: String,
    /// Media type field content, if present
    media_type_input: String,
}

impl Popup {
    /// Clear (aka remove) the pop-up
    pub const fn clear(&mut self) {
        self.active = false;
        self.ptype = None;
    }
}

//  ========================== ViewerApp logic ============================= //

impl ViewerApp {
    fn display_error(ui: &mut egui::Ui, msg: &str) -> bool {
        ui.label(msg);

        // Add space before close button
        ui.add_space(10.0);

        // Keep the window open
        false
    }

    fn display_about(ui: &mut egui::Ui) -> bool {
        ui.vertical(|ui| {
            ui.add_space(5.0);

            ui.heading("Hexatable");
            ui.label("Hex/ASCII payload inspection table");

            ui.add_space(3.0);
            ui.separator();
            ui.add_space(3.0);

            ui.label(
                "The app is built with egui - immediate-mode GUI library. \
            The hex/ASCII table model is built by the hexatablelib library, part of the \
            same project.\n\nPayloads are loaded into memory whole, so RAM usage \
            while inspecting very large files will be high.",
            );

            ui.add_space(3.0);
            ui.separator();
            ui.add_space(3.0);

            ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
            ui.add_space(5.0);
        });

        // Keep the window open
        false
    }

    fn display_base64(&mut self, ui: &mut egui::Ui) -> bool {
        ui.vertical(|ui| {
            ui.add_space(3.0);
            ui.label("Base64 payload:");
            ui.add_space(3.0);

            // Add text field to enter the payload
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.popup.payload_input)
                    .desired_width(ui.available_width() - 70.0),
            );

            // Strip whitespace so pasted text with stray newlines decodes
            if response.changed() {
                self.popup.payload_input.retain(|c| !c.is_whitespace());
            }

            ui.add_space(5.0);
            ui.label("Media type (optional):");
            ui.add_space(3.0);

            ui.add(
                egui::TextEdit::singleline(&mut self.popup.media_type_input)
                    .hint_text(hexatablelib::DEFAULT_MEDIA_TYPE)
                    .desired_width(ui.available_width() - 70.0),
            );
        });

        ui.add_space(8.0);

        if ui.button(" OK ").clicked() || self.events.borrow().enter_released {
            // Close the window
            return true;
        }

        // Keep the window open
        false
    }

    /// Show the pop-up
    pub(crate) fn show_popup(&mut self, ctx: &egui::Context) {
        let content_rect = ctx.content_rect();

        // Block interaction with the app
        egui::Area::new(egui::Id::from("modal_blocker"))
            .order(egui::Order::Background)
            .fixed_pos(content_rect.left_top())
            .show(ctx, |ui| {
                ui.allocate_rect(content_rect, egui::Sense::click());

                // Collect input events once per frame and store in the app state
                *self.events.borrow_mut() = collect_ui_events(ui);
            });

        // Darken the background
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Background,
            egui::Id::new("modal_bg"),
        ));
        painter.rect_filled(content_rect, 0.0, colors::SHADOW);

        let mut is_open = self.popup.active;
        let was_open = self.popup.active;

        let Some(popup_type) = self.popup.ptype.clone() else {
            self.popup.clear();
            return;
        };

        // Display the pop-up
        let window = egui::Window::new(popup_type.title())
            .open(&mut is_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0]);

        // Track OK button or Enter press
        let mut close_confirm = false;

        window.show(ctx, |ui| match popup_type {
            PopupType::Error => {
                let error = self.error.borrow().clone().unwrap_or_default();
                close_confirm = Self::display_error(ui, &error);
            }
            PopupType::About => close_confirm = Self::display_about(ui),
            PopupType::Base64 => close_confirm = self.display_base64(ui),
        });

        self.popup.active = !close_confirm && is_open && !self.events.borrow().escape_pressed;

        // If the window got closed this frame
        if was_open && !self.popup.active {
            *self.error.borrow_mut() = None;

            // If the pop-up closed was the base64 form -> decode and load
            if self.popup.ptype == Some(PopupType::Base64) && close_confirm {
                let payload = std::mem::take(&mut self.popup.payload_input);
                let media_type = std::mem::take(&mut self.popup.media_type_input);

                self.popup.clear();

                // A decode failure fills the error cell, which re-opens
                // the pop-up as an error window on the next frame
                self.load_base64(&payload, &media_type);
                return;
            }

            self.popup.clear();
        }
    }
}
