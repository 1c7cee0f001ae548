use crate::app::ViewerApp;
use crate::ui_popup::PopupType;
use eframe::egui;

impl ViewerApp {
    /// Displays the top menu bar with File and About buttons
    pub(crate) fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menubar").show(ctx, |ui| {
            ui.add_space(3.0);

            egui::MenuBar::new().ui(ui, |ui| {
                ui.horizontal(|ui| {
                    // FILE MENU
                    ui.menu_button("File", |ui| {
                        // OPEN BUTTON
                        if ui.button("Open file...").clicked()
                            && let Some(path) =
                                rfd::FileDialog::new().set_title("Open File").pick_file()
                        {
                            self.load_file(&path);
                        }

                        // BASE64 BUTTON
                        if ui.button("Paste base64...").clicked() {
                            self.popup.active = true;
                            self.popup.ptype = Some(PopupType::Base64);
                        }

                        // RESET BUTTON
                        if ui.button("Reset view").clicked()
                            && let Some(session) = self.session.as_mut()
                        {
                            session.table.reset();
                        }

                        // CLOSE BUTTON
                        if ui.button("Close").clicked() && self.session.is_some() {
                            self.close_session();
                        }
                    });

                    // ABOUT BUTTON
                    let about_button = ui.button("About");

                    if about_button.clicked() {
                        self.popup.active = true;
                        self.popup.ptype = Some(PopupType::About);
                    }
                });
            });

            ui.add_space(2.0);
        });
    }
}
